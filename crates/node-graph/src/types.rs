//! Core identifier and edge types
//!
//! These types are shared by nodes, groups and the connection graph.
//! Identifiers are plain strings handed out by the graph session.

use serde::{Deserialize, Serialize};

/// Unique identifier for a node within one graph session
pub type NodeId = String;

/// Unique identifier for an edge within one graph session
pub type EdgeId = String;

/// Unique identifier for a group within one graph session
pub type GroupId = String;

/// Address of one port: owning node plus port name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortRef {
    pub node_id: NodeId,
    pub port: String,
}

impl PortRef {
    pub fn new(node_id: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            port: port.into(),
        }
    }
}

/// An edge from an output port to an input port
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: EdgeId,
    /// Output side
    pub from: PortRef,
    /// Input side
    pub to: PortRef,
}

impl Edge {
    /// Check if this edge touches a node
    pub fn involves_node(&self, node_id: &str) -> bool {
        self.from.node_id == node_id || self.to.node_id == node_id
    }

    /// Check if this edge joins exactly these endpoints
    pub fn joins(&self, from: &PortRef, to: &PortRef) -> bool {
        &self.from == from && &self.to == to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_edge() -> Edge {
        Edge {
            id: "edge-1".to_string(),
            from: PortRef::new("node-1", "out"),
            to: PortRef::new("node-2", "in"),
        }
    }

    #[test]
    fn test_edge_involves_node() {
        let edge = make_edge();
        assert!(edge.involves_node("node-1"));
        assert!(edge.involves_node("node-2"));
        assert!(!edge.involves_node("node-3"));
    }

    #[test]
    fn test_edge_joins() {
        let edge = make_edge();
        let output = PortRef::new("node-1", "out");
        let input = PortRef::new("node-2", "in");
        assert!(edge.joins(&output, &input));
        assert!(!edge.joins(&input, &output));
    }

    #[test]
    fn test_edge_serialization() {
        let json = serde_json::to_value(make_edge()).unwrap();
        assert_eq!(json["from"]["nodeId"], "node-1");
        assert_eq!(json["to"]["port"], "in");
    }
}
