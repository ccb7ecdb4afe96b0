//! Group node
//!
//! A colored pass-through node meant to stand for a collapsed sub-graph.

use node_graph::{NodeDescriptor, NodeTypeBuilder, NodeTypeDescriptor, PortDescriptor};

pub struct MyGroupNode;

impl MyGroupNode {
    pub const TYPE_ID: &'static str = "nodes.group.MyGroupNode";
}

impl NodeDescriptor for MyGroupNode {
    fn descriptor() -> NodeTypeDescriptor {
        NodeTypeBuilder::new(Self::TYPE_ID, "group node")
            .with_color(50, 8, 25)
            .input(PortDescriptor::input("in"))
            .output(PortDescriptor::output("out"))
            .build()
    }
}

inventory::submit!(node_graph::DescriptorFn(MyGroupNode::descriptor));
