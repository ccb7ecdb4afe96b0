//! Basic nodes
//!
//! Plain rectangular and circular nodes showing port cardinality, hidden
//! labels and acceptance rules.

use node_graph::{
    AcceptRule, Direction, NodeDescriptor, NodeTypeBuilder, NodeTypeDescriptor, PortDescriptor,
};

/// Two inputs and two outputs with default cardinality
pub struct BasicNodeA;

impl BasicNodeA {
    pub const TYPE_ID: &'static str = "nodes.basic.BasicNodeA";
}

impl NodeDescriptor for BasicNodeA {
    fn descriptor() -> NodeTypeDescriptor {
        NodeTypeBuilder::new(Self::TYPE_ID, "node A")
            .input(PortDescriptor::input("in A"))
            .input(PortDescriptor::input("in B"))
            .output(PortDescriptor::output("out A"))
            .output(PortDescriptor::output("out B"))
            .build()
    }
}

inventory::submit!(node_graph::DescriptorFn(BasicNodeA::descriptor));

/// Single and multi ports on both sides
///
/// Inputs and outputs share the names `single 1` and `single 2`.
pub struct BasicNodeB;

impl BasicNodeB {
    pub const TYPE_ID: &'static str = "nodes.basic.BasicNodeB";
}

impl NodeDescriptor for BasicNodeB {
    fn descriptor() -> NodeTypeDescriptor {
        NodeTypeBuilder::new(Self::TYPE_ID, "node B")
            .input(PortDescriptor::input("single 1"))
            .input(PortDescriptor::input("single 2"))
            .input(PortDescriptor::input("multi in").multi())
            .output(PortDescriptor::output("single 1").single())
            .output(PortDescriptor::output("single 2").single())
            .output(PortDescriptor::output("multi out"))
            .build()
    }
}

inventory::submit!(node_graph::DescriptorFn(BasicNodeB::descriptor));

/// Circular node whose first input only takes `BasicNodeB`'s `single 1` output
pub struct CircleNode;

impl CircleNode {
    pub const TYPE_ID: &'static str = "nodes.basic.CircleNode";
}

impl NodeDescriptor for CircleNode {
    fn descriptor() -> NodeTypeDescriptor {
        NodeTypeBuilder::new(Self::TYPE_ID, "Circle Node")
            .circular()
            .with_color(10, 24, 38)
            .input(PortDescriptor::input("in 1").accept(AcceptRule::new(
                BasicNodeB::TYPE_ID,
                "single 1",
                Direction::Out,
            )))
            .input(PortDescriptor::input("in 2"))
            .input(PortDescriptor::input("in 3").multi())
            .input(PortDescriptor::input("in 4").hide_label())
            .input(PortDescriptor::input("in 5").hide_label())
            .output(PortDescriptor::output("out 1"))
            .output(PortDescriptor::output("out 2").single())
            .output(PortDescriptor::output("out 3").hide_label())
            .output(PortDescriptor::output("out 4").hide_label())
            .build()
    }
}

inventory::submit!(node_graph::DescriptorFn(CircleNode::descriptor));

#[cfg(test)]
mod tests {
    use super::*;
    use node_graph::{synthesize, BaseShape, Cardinality, ConnectionGraph, GraphError};

    fn graph() -> ConnectionGraph {
        let mut graph = ConnectionGraph::new();
        for descriptor in [
            BasicNodeA::descriptor(),
            BasicNodeB::descriptor(),
            CircleNode::descriptor(),
        ] {
            graph.register(synthesize(descriptor).unwrap()).unwrap();
        }
        graph
    }

    #[test]
    fn test_basic_node_b_cardinality() {
        let mut graph = graph();
        let b = graph.create_node(BasicNodeB::TYPE_ID).unwrap();
        let node = graph.node(&b).unwrap();
        let input = |name: &str| node.input(name).unwrap().cardinality();
        let output = |name: &str| node.output(name).unwrap().cardinality();
        assert_eq!(input("multi in"), Cardinality::Multi);
        assert_eq!(output("single 1"), Cardinality::Single);
        assert_eq!(input("single 1"), Cardinality::Single);
    }

    #[test]
    fn test_circle_accepts_only_node_b() {
        let mut graph = graph();
        let a = graph.create_node(BasicNodeA::TYPE_ID).unwrap();
        let b = graph.create_node(BasicNodeB::TYPE_ID).unwrap();
        let circle = graph.create_node(CircleNode::TYPE_ID).unwrap();
        let shape = graph.node(&circle).unwrap().base_shape;
        assert_eq!(shape, BaseShape::Circular);

        let err = graph.connect(&a, "out A", &circle, "in 1").unwrap_err();
        assert!(matches!(err, GraphError::TypeNotAccepted { .. }));
        let err = graph.connect(&b, "single 2", &circle, "in 1").unwrap_err();
        assert!(matches!(err, GraphError::TypeNotAccepted { .. }));

        graph.connect(&b, "single 1", &circle, "in 1").unwrap();
        graph.connect(&a, "out A", &circle, "in 2").unwrap();
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_circle_hidden_labels() {
        let descriptor = CircleNode::descriptor();
        let hidden: Vec<&str> = descriptor
            .ports
            .iter()
            .filter(|p| !p.display_label)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(hidden, vec!["in 4", "in 5", "out 3", "out 4"]);
    }
}
