//! The basic example session
//!
//! Builds the demo graph: one node of every bundled type, wired together and
//! with two of them on a backdrop.

use node_graph::{ConnectionGraph, Direction, GraphError, GroupId, NodeId, Result, Rgb, WrapTarget};

use crate::basic::{BasicNodeA, BasicNodeB, CircleNode};
use crate::custom_ports::CustomPortsNode;
use crate::dynamic::DYNAMIC_NODE_TYPE_ID;
use crate::group::MyGroupNode;
use crate::widgets::{CheckboxNode, DropdownMenuNode, TextInputNode};

/// Color of the text node (#0a1e20)
pub const TEXT_NODE_COLOR: Rgb = Rgb(10, 30, 32);

/// Handles to the nodes of the example session
#[derive(Debug, Clone)]
pub struct BasicExample {
    pub dynamic: NodeId,
    pub basic_a: NodeId,
    pub basic_b: NodeId,
    pub custom_ports: NodeId,
    pub text_input: NodeId,
    pub checkbox: NodeId,
    pub combo_menu: NodeId,
    pub circle: NodeId,
    pub group: NodeId,
    pub backdrop: GroupId,
}

/// Populate a graph with the example nodes
///
/// The graph must already have the bundled types registered
/// (see [`crate::register_nodes`]).
pub fn build_basic_example(graph: &mut ConnectionGraph) -> Result<BasicExample> {
    let dynamic = graph.create_node(DYNAMIC_NODE_TYPE_ID)?;

    let basic_a = graph.create_node(BasicNodeA::TYPE_ID)?;
    graph.set_node_disabled(&basic_a, true)?;

    let basic_b = graph.create_node(BasicNodeB::TYPE_ID)?;
    graph.rename_node(&basic_b, "custom icon")?;

    let custom_ports = named(graph, CustomPortsNode::TYPE_ID, "custom ports")?;
    let text_input = named(graph, TextInputNode::TYPE_ID, "text node")?;
    graph.set_node_color(&text_input, Some(TEXT_NODE_COLOR))?;
    let checkbox = named(graph, CheckboxNode::TYPE_ID, "checkbox node")?;
    let combo_menu = named(graph, DropdownMenuNode::TYPE_ID, "combobox node")?;
    let circle = named(graph, CircleNode::TYPE_ID, "circle node")?;
    let group = graph.create_node(MyGroupNode::TYPE_ID)?;

    // Fan the text node's output out to three inputs
    for target in [&custom_ports, &checkbox, &combo_menu] {
        connect_at(graph, &text_input, 0, target, 0)?;
    }

    connect_at(graph, &custom_ports, 1, &group, 0)?;
    connect_at(graph, &checkbox, 0, &basic_b, 2)?;
    connect_at(graph, &combo_menu, 1, &basic_b, 2)?;
    connect_at(graph, &basic_b, 0, &basic_a, 0)?;

    let backdrop = graph.wrap(
        WrapTarget::NewBackdrop,
        [custom_ports.clone(), combo_menu.clone()],
    )?;

    log::info!(
        "Built basic example: {} nodes, {} edges, {} groups",
        graph.node_count(),
        graph.edge_count(),
        graph.group_count()
    );

    Ok(BasicExample {
        dynamic,
        basic_a,
        basic_b,
        custom_ports,
        text_input,
        checkbox,
        combo_menu,
        circle,
        group,
        backdrop,
    })
}

fn named(graph: &mut ConnectionGraph, type_id: &str, name: &str) -> Result<NodeId> {
    let node_id = graph.create_node(type_id)?;
    graph.rename_node(&node_id, name)?;
    Ok(node_id)
}

/// Connect ports by declared position
fn connect_at(
    graph: &mut ConnectionGraph,
    from_node: &str,
    output: usize,
    to_node: &str,
    input: usize,
) -> Result<()> {
    let from_port = port_name(graph, from_node, Direction::Out, output)?;
    let to_port = port_name(graph, to_node, Direction::In, input)?;
    graph.connect(from_node, &from_port, to_node, &to_port)?;
    Ok(())
}

fn port_name(
    graph: &ConnectionGraph,
    node_id: &str,
    direction: Direction,
    index: usize,
) -> Result<String> {
    let node = graph
        .node(node_id)
        .ok_or_else(|| GraphError::UnknownNode(node_id.to_string()))?;
    node.ports(direction)
        .get(index)
        .map(|p| p.name().to_string())
        .ok_or_else(|| GraphError::unknown_port(node_id, format!("#{}", index)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register_nodes;
    use node_graph::{audit_graph, GroupKind};

    #[test]
    fn test_build_basic_example() {
        let mut graph = ConnectionGraph::new();
        register_nodes(&mut graph).unwrap();
        let example = build_basic_example(&mut graph).unwrap();

        assert_eq!(graph.node_count(), 9);
        assert_eq!(graph.edge_count(), 7);
        assert!(audit_graph(&graph).is_empty());

        let text = graph.node(&example.text_input).unwrap();
        assert_eq!(text.name, "text node");
        assert_eq!(text.color, Some(Rgb(0x0a, 0x1e, 0x20)));
        assert_eq!(text.output("out").unwrap().edges().len(), 3);

        let basic_b = graph.node(&example.basic_b).unwrap();
        assert_eq!(basic_b.input("multi in").unwrap().edges().len(), 2);
        assert!(graph.node(&example.basic_a).unwrap().disabled);

        let backdrop = graph.group(&example.backdrop).unwrap();
        assert_eq!(backdrop.kind, GroupKind::Backdrop);
        assert!(backdrop.contains_node(&example.custom_ports));
        assert!(backdrop.contains_node(&example.combo_menu));
        for id in [&example.circle, &example.dynamic] {
            assert!(graph.node(id).unwrap().edge_ids().is_empty());
        }
    }

    #[test]
    fn test_example_needs_registered_types() {
        let mut graph = ConnectionGraph::new();
        assert!(build_basic_example(&mut graph).is_err());
        assert_eq!(graph.node_count(), 0);
    }
}
