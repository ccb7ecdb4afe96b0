//! Fluent builder for node type descriptors
//!
//! Provides the Rust-side authoring API. The builder only assembles data;
//! validation happens when the descriptor is synthesized.

use crate::descriptor::{
    BaseShape, Direction, NodeTypeDescriptor, PortDescriptor, Rgb, WidgetDescriptor,
};

/// Fluent builder for constructing node type descriptors
///
/// # Example
///
/// ```ignore
/// let descriptor = NodeTypeBuilder::new("nodes.widget.TextInputNode", "text")
///     .input(PortDescriptor::input("in"))
///     .output(PortDescriptor::output("out"))
///     .widget(WidgetDescriptor::text_input("my_input", "Text Input").with_tab("widgets"))
///     .build();
/// ```
pub struct NodeTypeBuilder {
    descriptor: NodeTypeDescriptor,
}

impl NodeTypeBuilder {
    /// Create a new builder
    pub fn new(qualified_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            descriptor: NodeTypeDescriptor::new(qualified_id, display_name),
        }
    }

    /// Add an input port
    ///
    /// The port is forced to the input direction.
    pub fn input(mut self, mut port: PortDescriptor) -> Self {
        port.direction = Direction::In;
        self.descriptor.ports.push(port);
        self
    }

    /// Add an output port
    ///
    /// The port is forced to the output direction.
    pub fn output(mut self, mut port: PortDescriptor) -> Self {
        port.direction = Direction::Out;
        self.descriptor.ports.push(port);
        self
    }

    /// Add a port as declared
    pub fn port(mut self, port: PortDescriptor) -> Self {
        self.descriptor.ports.push(port);
        self
    }

    /// Add an embedded widget
    pub fn widget(mut self, widget: WidgetDescriptor) -> Self {
        self.descriptor.widgets.push(widget);
        self
    }

    /// Use the circular base shape
    pub fn circular(mut self) -> Self {
        self.descriptor.base_shape = BaseShape::Circular;
        self
    }

    pub fn with_color(mut self, r: u8, g: u8, b: u8) -> Self {
        self.descriptor.color = Some(Rgb(r, g, b));
        self
    }

    /// Build the descriptor without validation
    pub fn build(self) -> NodeTypeDescriptor {
        self.descriptor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Cardinality;

    #[test]
    fn test_builder_preserves_order() {
        let descriptor = NodeTypeBuilder::new("nodes.basic.BasicNodeA", "node A")
            .input(PortDescriptor::input("in A"))
            .input(PortDescriptor::input("in B"))
            .output(PortDescriptor::output("out A"))
            .output(PortDescriptor::output("out B"))
            .build();

        let inputs: Vec<&str> = descriptor.inputs().map(|p| p.name.as_str()).collect();
        let outputs: Vec<&str> = descriptor.outputs().map(|p| p.name.as_str()).collect();
        assert_eq!(inputs, vec!["in A", "in B"]);
        assert_eq!(outputs, vec!["out A", "out B"]);
    }

    #[test]
    fn test_builder_forces_direction() {
        let descriptor = NodeTypeBuilder::new("test.node", "Node")
            .output(PortDescriptor::input("x").multi())
            .build();
        let port = &descriptor.ports[0];
        assert_eq!(port.direction, Direction::Out);
        assert_eq!(port.cardinality, Cardinality::Multi);
    }

    #[test]
    fn test_builder_shape_and_widgets() {
        let descriptor = NodeTypeBuilder::new("nodes.basic.CircleNode", "Circle Node")
            .circular()
            .with_color(10, 24, 38)
            .widget(WidgetDescriptor::checkbox("cb_1", "", "Checkbox 1", true))
            .build();
        assert_eq!(descriptor.base_shape, BaseShape::Circular);
        assert_eq!(descriptor.color, Some(Rgb(10, 24, 38)));
        assert_eq!(descriptor.widgets.len(), 1);
    }
}
