//! Node type synthesis
//!
//! Turns a [`NodeTypeDescriptor`] into a [`NodeType`]: a validated,
//! immutable node type that can build fresh [`Node`]s. Every node is built
//! by the same fixed routine in [`NodeType::instantiate`]; descriptors only
//! supply data.
//!
//! Synthesis is pure. Registering the result is a separate step, so a
//! descriptor can be synthesized as a dry run without touching any registry.

use std::collections::HashSet;
use std::sync::Arc;

use crate::descriptor::{Direction, NodeTypeDescriptor, WidgetKind};
use crate::error::{GraphError, Result};
use crate::node::Node;
use crate::types::NodeId;
use crate::validation::{validate_member_name, validate_qualified_id};

/// A validated, constructible node type
///
/// Cheap to clone; the descriptor is shared.
#[derive(Debug, Clone)]
pub struct NodeType {
    descriptor: Arc<NodeTypeDescriptor>,
}

impl NodeType {
    /// Qualified id of the type
    pub fn qualified_id(&self) -> &str {
        &self.descriptor.qualified_id
    }

    pub fn display_name(&self) -> &str {
        &self.descriptor.display_name
    }

    /// The descriptor this type was synthesized from
    pub fn descriptor(&self) -> &NodeTypeDescriptor {
        &self.descriptor
    }

    /// Build a new node of this type
    ///
    /// One port per port descriptor and one binding per widget descriptor,
    /// in declared order, widgets at their default values.
    pub fn instantiate(&self, id: impl Into<NodeId>) -> Node {
        let descriptor = &self.descriptor;
        let mut node = Node::new(
            id.into(),
            descriptor.qualified_id.clone(),
            descriptor.display_name.clone(),
            descriptor.base_shape,
            descriptor.color,
        );
        for port in &descriptor.ports {
            node.add_port(port.clone());
        }
        for widget in &descriptor.widgets {
            node.add_widget(widget.clone());
        }
        node
    }
}

/// Validate a descriptor and produce a node type
pub fn synthesize(descriptor: NodeTypeDescriptor) -> Result<NodeType> {
    validate_qualified_id(&descriptor.qualified_id)?;
    validate_ports(&descriptor)?;
    validate_widgets(&descriptor)?;

    log::debug!(
        "Synthesized node type '{}' ({} ports, {} widgets)",
        descriptor.qualified_id,
        descriptor.ports.len(),
        descriptor.widgets.len()
    );

    Ok(NodeType {
        descriptor: Arc::new(descriptor),
    })
}

/// Parse a JSON authoring document and synthesize it
pub fn synthesize_json(document: &str) -> Result<NodeType> {
    synthesize(NodeTypeDescriptor::from_json(document)?)
}

fn validate_ports(descriptor: &NodeTypeDescriptor) -> Result<()> {
    let mut seen: HashSet<(&str, Direction)> = HashSet::new();

    for port in &descriptor.ports {
        validate_member_name(&port.name)?;
        if !seen.insert((port.name.as_str(), port.direction)) {
            return Err(GraphError::DuplicateMember {
                type_id: descriptor.qualified_id.clone(),
                name: port.name.clone(),
            });
        }

        // Remote types are resolved lazily at connect time; only syntax is checked here.
        for rule in &port.accept_rules {
            validate_qualified_id(&rule.node_type)?;
            validate_member_name(&rule.port_name)?;
            if rule.direction == port.direction {
                log::debug!(
                    "Accept rule on '{}.{}' names an {} port and can never match",
                    descriptor.qualified_id,
                    port.name,
                    rule.direction
                );
            }
        }
    }
    Ok(())
}

fn validate_widgets(descriptor: &NodeTypeDescriptor) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();

    for widget in &descriptor.widgets {
        validate_member_name(&widget.name)?;
        if !seen.insert(widget.name.as_str()) {
            return Err(GraphError::DuplicateMember {
                type_id: descriptor.qualified_id.clone(),
                name: widget.name.clone(),
            });
        }
        if let WidgetKind::ComboMenu { items, selected } = &widget.kind {
            if items.is_empty() {
                return Err(GraphError::InvalidWidget {
                    name: widget.name.clone(),
                    reason: "combo menu has no items".to_string(),
                });
            }
            if *selected >= items.len() {
                return Err(GraphError::InvalidWidget {
                    name: widget.name.clone(),
                    reason: format!(
                        "selected index {} out of range for {} items",
                        selected,
                        items.len()
                    ),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::NodeTypeBuilder;
    use crate::descriptor::{AcceptRule, BaseShape, Cardinality, PortDescriptor, WidgetDescriptor};
    use crate::node::WidgetValue;

    fn widget_node() -> NodeTypeDescriptor {
        let menu = WidgetDescriptor::combo_menu("my_menu", "Menu Test", ["item 1", "item 2"]);
        let input = WidgetDescriptor::text_input("my_input", "Text Input");
        NodeTypeBuilder::new("nodes.widget.Mixed", "mixed")
            .input(PortDescriptor::input("in 1"))
            .output(PortDescriptor::output("out 1"))
            .output(PortDescriptor::output("out 2"))
            .widget(menu.with_selected(1))
            .widget(input.with_tab("widgets"))
            .widget(WidgetDescriptor::checkbox("cb_1", "", "Checkbox 1", true))
            .build()
    }

    #[test]
    fn test_instantiate_matches_descriptor() {
        let node_type = synthesize(widget_node()).unwrap();
        assert_eq!(node_type.qualified_id(), "nodes.widget.Mixed");

        let node = node_type.instantiate("node-1");
        assert_eq!(node.id(), "node-1");
        assert_eq!(node.type_id(), "nodes.widget.Mixed");
        assert_eq!(node.name, "mixed");
        assert_eq!(node.base_shape, BaseShape::Rectangular);

        let outputs: Vec<&str> = node.outputs().iter().map(|p| p.name()).collect();
        assert_eq!(outputs, vec!["out 1", "out 2"]);
        assert_eq!(node.inputs().len(), 1);

        let widgets: Vec<&str> = node.widgets().iter().map(|w| w.name()).collect();
        assert_eq!(widgets, vec!["my_menu", "my_input", "cb_1"]);
        assert_eq!(node.widget_value("my_menu"), Some(&WidgetValue::Choice(1)));
        assert_eq!(node.widget_value("cb_1"), Some(&WidgetValue::Checked(true)));
    }

    #[test]
    fn test_synthesis_is_repeatable() {
        let first = synthesize(widget_node()).unwrap();
        let second = synthesize(widget_node()).unwrap();
        assert_eq!(first.descriptor(), second.descriptor());
    }

    #[test]
    fn test_invalid_qualified_id() {
        let err = synthesize(NodeTypeDescriptor::new("no namespace", "x")).unwrap_err();
        assert!(matches!(err, GraphError::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_empty_port_name() {
        let descriptor = NodeTypeBuilder::new("test.node", "Node")
            .input(PortDescriptor::input(""))
            .build();
        assert!(matches!(
            synthesize(descriptor).unwrap_err(),
            GraphError::InvalidIdentifier { .. }
        ));
    }

    #[test]
    fn test_duplicate_port_same_direction() {
        let descriptor = NodeTypeBuilder::new("test.node", "Node")
            .input(PortDescriptor::input("in"))
            .input(PortDescriptor::input("in").multi())
            .build();
        assert!(matches!(
            synthesize(descriptor).unwrap_err(),
            GraphError::DuplicateMember { ref name, .. } if name == "in"
        ));
    }

    #[test]
    fn test_same_name_different_direction_allowed() {
        let descriptor = NodeTypeBuilder::new("nodes.basic.BasicNodeB", "node B")
            .input(PortDescriptor::input("single 1"))
            .output(PortDescriptor::output("single 1").single())
            .build();
        assert!(synthesize(descriptor).is_ok());
    }

    #[test]
    fn test_duplicate_widget() {
        let descriptor = NodeTypeBuilder::new("test.node", "Node")
            .widget(WidgetDescriptor::text_input("w", "A"))
            .widget(WidgetDescriptor::checkbox("w", "B", "", false))
            .build();
        assert!(matches!(
            synthesize(descriptor).unwrap_err(),
            GraphError::DuplicateMember { .. }
        ));
    }

    #[test]
    fn test_accept_rule_syntax_checked() {
        let rule = AcceptRule::new("bad type", "p", Direction::Out);
        let descriptor = NodeTypeBuilder::new("test.node", "Node")
            .input(PortDescriptor::input("in").accept(rule))
            .build();
        assert!(matches!(
            synthesize(descriptor).unwrap_err(),
            GraphError::InvalidIdentifier { .. }
        ));
    }

    #[test]
    fn test_accept_rule_remote_type_not_required() {
        let rule = AcceptRule::new("not.registered.Yet", "p", Direction::Out);
        let descriptor = NodeTypeBuilder::new("test.node", "Node")
            .input(PortDescriptor::input("in").accept(rule))
            .build();
        assert!(synthesize(descriptor).is_ok());
    }

    #[test]
    fn test_combo_selection_out_of_range() {
        let menu = WidgetDescriptor::combo_menu("m", "M", ["a"]);
        let descriptor = NodeTypeBuilder::new("test.node", "Node")
            .widget(menu.with_selected(3))
            .build();
        assert!(matches!(
            synthesize(descriptor).unwrap_err(),
            GraphError::InvalidWidget { .. }
        ));
    }

    #[test]
    fn test_combo_without_items_rejected() {
        let descriptor = NodeTypeBuilder::new("test.node", "Node")
            .widget(WidgetDescriptor::combo_menu("m", "M", Vec::<String>::new()))
            .build();
        assert!(matches!(
            synthesize(descriptor).unwrap_err(),
            GraphError::InvalidWidget { ref name, .. } if name == "m"
        ));
    }

    #[test]
    fn test_initial_widget_values_pass_their_own_check() {
        let node = synthesize(widget_node()).unwrap().instantiate("node-1");
        for binding in node.widgets() {
            assert!(binding.check(&binding.value).is_ok(), "{}", binding.name());
        }
    }

    #[test]
    fn test_synthesize_json() {
        let node_type = synthesize_json(
            r#"{
                "qualifiedId": "shape.receiver",
                "displayName": "Receiver",
                "ports": [{"name": "i", "direction": "in", "cardinality": "multi"}]
            }"#,
        )
        .unwrap();
        let node = node_type.instantiate("node-1");
        assert_eq!(node.input("i").unwrap().cardinality(), Cardinality::Multi);

        assert!(matches!(
            synthesize_json("{ not json").unwrap_err(),
            GraphError::Descriptor(_)
        ));
    }
}
