//! Node with custom-drawn ports
//!
//! The core stores render hook names only; the renderer maps `square` and
//! `triangle` to its own paint routines.

use node_graph::{NodeDescriptor, NodeTypeBuilder, NodeTypeDescriptor, PortDescriptor};

/// Render hook for square port glyphs
pub const SQUARE_PORT: &str = "square";
/// Render hook for triangle port glyphs
pub const TRIANGLE_PORT: &str = "triangle";

/// Colored input and outputs with custom port glyphs
pub struct CustomPortsNode;

impl CustomPortsNode {
    pub const TYPE_ID: &'static str = "nodes.custom.ports.CustomPortsNode";
}

impl NodeDescriptor for CustomPortsNode {
    fn descriptor() -> NodeTypeDescriptor {
        NodeTypeBuilder::new(Self::TYPE_ID, "node")
            .input(PortDescriptor::input("in").with_color(200, 10, 0))
            .output(PortDescriptor::output("default"))
            .output(hooked_output("square", SQUARE_PORT))
            .output(hooked_output("triangle", TRIANGLE_PORT))
            .build()
    }
}

fn hooked_output(name: &str, hook: &str) -> PortDescriptor {
    PortDescriptor::output(name).with_render_hook(hook)
}

inventory::submit!(node_graph::DescriptorFn(CustomPortsNode::descriptor));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_hooks() {
        let descriptor = CustomPortsNode::descriptor();
        let hooks: Vec<Option<&str>> = descriptor
            .outputs()
            .map(|p| p.render_hook.as_ref().map(|h| h.name()))
            .collect();
        assert_eq!(hooks, vec![None, Some(SQUARE_PORT), Some(TRIANGLE_PORT)]);
    }
}
