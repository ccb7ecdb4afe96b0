//! Widget nodes
//!
//! Nodes embedding a combo menu, a text field and checkboxes. Widget values
//! are edited through `ConnectionGraph::set_widget_value`.

use node_graph::{
    NodeDescriptor, NodeTypeBuilder, NodeTypeDescriptor, PortDescriptor, WidgetDescriptor,
};

/// Node with a drop-down menu
pub struct DropdownMenuNode;

impl DropdownMenuNode {
    pub const TYPE_ID: &'static str = "nodes.widget.DropdownMenuNode";
    /// Name of the embedded menu
    pub const MENU: &'static str = "my_menu";
}

impl NodeDescriptor for DropdownMenuNode {
    fn descriptor() -> NodeTypeDescriptor {
        NodeTypeBuilder::new(Self::TYPE_ID, "menu")
            .input(PortDescriptor::input("in 1"))
            .output(PortDescriptor::output("out 1"))
            .output(PortDescriptor::output("out 2"))
            .widget(
                WidgetDescriptor::combo_menu(
                    Self::MENU,
                    "Menu Test",
                    ["item 1", "item 2", "item 3"],
                )
                .with_tooltip("example custom tooltip"),
            )
            .build()
    }
}

inventory::submit!(node_graph::DescriptorFn(DropdownMenuNode::descriptor));

/// Node with a single-line text field
pub struct TextInputNode;

impl TextInputNode {
    pub const TYPE_ID: &'static str = "nodes.widget.TextInputNode";
    pub const INPUT: &'static str = "my_input";
}

impl NodeDescriptor for TextInputNode {
    fn descriptor() -> NodeTypeDescriptor {
        NodeTypeBuilder::new(Self::TYPE_ID, "text")
            .input(PortDescriptor::input("in"))
            .output(PortDescriptor::output("out"))
            .widget(
                WidgetDescriptor::text_input(Self::INPUT, "Text Input")
                    .with_tab("widgets"),
            )
            .build()
    }
}

inventory::submit!(node_graph::DescriptorFn(TextInputNode::descriptor));

/// Node with two checkboxes
pub struct CheckboxNode;

impl CheckboxNode {
    pub const TYPE_ID: &'static str = "nodes.widget.CheckboxNode";
}

impl NodeDescriptor for CheckboxNode {
    fn descriptor() -> NodeTypeDescriptor {
        NodeTypeBuilder::new(Self::TYPE_ID, "checkbox")
            .widget(WidgetDescriptor::checkbox("cb_1", "", "Checkbox 1", true))
            .widget(WidgetDescriptor::checkbox("cb_2", "", "Checkbox 2", false))
            .input(PortDescriptor::input("in").with_color(200, 100, 0))
            .output(PortDescriptor::output("out").with_color(0, 100, 200))
            .build()
    }
}

inventory::submit!(node_graph::DescriptorFn(CheckboxNode::descriptor));

#[cfg(test)]
mod tests {
    use super::*;
    use node_graph::{synthesize, ConnectionGraph, GraphError, WidgetValue};

    #[test]
    fn test_dropdown_selection() {
        let mut graph = ConnectionGraph::new();
        graph
            .register(synthesize(DropdownMenuNode::descriptor()).unwrap())
            .unwrap();
        let menu = graph.create_node(DropdownMenuNode::TYPE_ID).unwrap();

        graph
            .set_widget_value(&menu, DropdownMenuNode::MENU, WidgetValue::Choice(2))
            .unwrap();
        let binding = graph
            .node(&menu)
            .unwrap()
            .widget(DropdownMenuNode::MENU)
            .unwrap();
        assert_eq!(binding.selected_item(), Some("item 3"));

        let err = graph
            .set_widget_value(&menu, DropdownMenuNode::MENU, WidgetValue::Choice(3))
            .unwrap_err();
        assert!(matches!(err, GraphError::InvalidWidgetValue { .. }));
    }

    #[test]
    fn test_checkbox_defaults() {
        let mut graph = ConnectionGraph::new();
        graph
            .register(synthesize(CheckboxNode::descriptor()).unwrap())
            .unwrap();
        let node_id = graph.create_node(CheckboxNode::TYPE_ID).unwrap();
        let node = graph.node(&node_id).unwrap();
        assert_eq!(node.widget_value("cb_1"), Some(&WidgetValue::Checked(true)));
        assert_eq!(
            node.widget_value("cb_2"),
            Some(&WidgetValue::Checked(false))
        );
    }
}
