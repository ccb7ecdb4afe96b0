//! Graph Nodes
//!
//! Example node types for the node-graph core, plus the configuration file
//! handling and session setup used by the demo binary.
//!
//! # Namespaces
//!
//! - **nodes.basic**: Plain nodes showing cardinality and acceptance rules
//! - **nodes.custom.ports**: Ports with custom render hooks
//! - **nodes.group**: A group node
//! - **nodes.widget**: Nodes with embedded widgets
//! - **nodes.dyBasic**: A node type authored as a JSON document
//!
//! Code-defined types are collected at link time through `inventory`;
//! document types are synthesized from the bundled JSON files.

pub mod basic;
pub mod config;
pub mod constants;
pub mod custom_ports;
pub mod dynamic;
pub mod example;
pub mod group;
pub mod widgets;

pub use basic::{BasicNodeA, BasicNodeB, CircleNode};
pub use config::{default_config, load_config, save_config, ConfigError};
pub use custom_ports::CustomPortsNode;
pub use dynamic::{
    document_node_types, synthesize_documents, BUNDLED_DOCUMENTS, DYNAMIC_NODE_TYPE_ID,
};
pub use example::{build_basic_example, BasicExample};
pub use group::MyGroupNode;
pub use widgets::{CheckboxNode, DropdownMenuNode, TextInputNode};

use node_graph::{ConnectionGraph, Result};

/// Register every bundled node type not already known to the session
///
/// Returns the ids that were added, sorted.
pub fn register_nodes(graph: &mut ConnectionGraph) -> Result<Vec<String>> {
    register_nodes_with(graph, BUNDLED_DOCUMENTS)
}

/// Register the built-ins plus the given authoring documents
///
/// Every document is synthesized before anything is registered, so a bad
/// document leaves the session untouched.
pub fn register_nodes_with(graph: &mut ConnectionGraph, sources: &[&str]) -> Result<Vec<String>> {
    let document_types = synthesize_documents(sources)?;
    let mut added = graph.register_builtins()?;
    for node_type in document_types {
        if graph.registry().contains(node_type.qualified_id()) {
            continue;
        }
        added.push(node_type.qualified_id().to_string());
        graph.register(node_type)?;
    }
    added.sort();
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use node_graph::{NodeTypeRegistry, VecEventSink};
    use std::sync::Arc;

    #[test]
    fn test_inventory_collects_all_builtins() {
        let registry = NodeTypeRegistry::with_builtins().unwrap();
        assert_eq!(registry.len(), 8, "Expected 8 code-defined built-in nodes");

        // Spot-check known types
        assert!(registry.contains(BasicNodeA::TYPE_ID));
        assert!(registry.contains(CircleNode::TYPE_ID));
        assert!(registry.contains(CustomPortsNode::TYPE_ID));
        assert!(registry.contains(MyGroupNode::TYPE_ID));
        assert!(registry.contains(CheckboxNode::TYPE_ID));
    }

    #[test]
    fn test_register_nodes_is_idempotent() {
        let mut graph = ConnectionGraph::new();
        let added = register_nodes(&mut graph).unwrap();
        assert_eq!(added.len(), 9);
        assert!(added.iter().any(|id| id == DYNAMIC_NODE_TYPE_ID));
        assert!(register_nodes(&mut graph).unwrap().is_empty());

        let namespaces: Vec<String> = graph.list_by_namespace().map(|e| e.namespace).collect();
        assert_eq!(
            namespaces,
            vec![
                "nodes.basic",
                "nodes.custom.ports",
                "nodes.dyBasic",
                "nodes.group",
                "nodes.widget",
            ]
        );
    }

    #[test]
    fn test_bad_document_registers_nothing() {
        let events = Arc::new(VecEventSink::new());
        let mut graph = ConnectionGraph::with_event_sink(events.clone());
        let documents = [dynamic::DYNAMIC_NODE_DOCUMENT, "{ not a descriptor"];

        assert!(register_nodes_with(&mut graph, &documents).is_err());
        assert!(graph.registry().is_empty());
        assert!(events.events().is_empty());

        // The session is still usable afterwards
        let added = register_nodes(&mut graph).unwrap();
        assert_eq!(added.len(), 9);
    }
}
