//! Identifier rules and graph integrity checks
//!
//! Identifier checks run during synthesis. `audit_graph` walks a whole
//! `ConnectionGraph` and reports every broken structural invariant it finds
//! (not just the first). A correct graph always audits clean; the audit
//! exists for tests and for hosts that want to assert consistency after
//! loading a session.

use std::collections::HashSet;

use crate::descriptor::{Cardinality, Direction};
use crate::error::{GraphError, Result};
use crate::graph::ConnectionGraph;

/// Check a qualified node type id of the form `namespace.identifier`
///
/// Every `.`-separated segment must be non-empty, start with a letter or
/// `_`, and contain only ASCII alphanumerics, `_` or `-`.
pub fn validate_qualified_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(GraphError::invalid_identifier(id, "identifier is empty"));
    }
    let segments: Vec<&str> = id.split('.').collect();
    if segments.len() < 2 {
        return Err(GraphError::invalid_identifier(
            id,
            "expected a namespace and an identifier separated by '.'",
        ));
    }
    for segment in segments {
        let mut chars = segment.chars();
        match chars.next() {
            None => return Err(GraphError::invalid_identifier(id, "empty path segment")),
            Some(first) if !(first.is_ascii_alphabetic() || first == '_') => {
                return Err(GraphError::invalid_identifier(
                    id,
                    format!("segment '{}' must start with a letter or '_'", segment),
                ));
            }
            Some(_) => {}
        }
        let legal = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-';
        if let Some(bad) = chars.find(|c| !legal(*c)) {
            return Err(GraphError::invalid_identifier(id, format!("illegal character '{}'", bad)));
        }
    }
    Ok(())
}

/// Check a port or widget name
///
/// Names may contain interior spaces ("in A") but must not be empty, carry
/// surrounding whitespace, contain control characters, or contain `.`.
pub fn validate_member_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(GraphError::invalid_identifier(name, "name is empty"));
    }
    if name.trim() != name {
        return Err(GraphError::invalid_identifier(name, "leading or trailing whitespace"));
    }
    if let Some(bad) = name.chars().find(|c| c.is_control() || *c == '.') {
        return Err(GraphError::invalid_identifier(name, format!("illegal character {:?}", bad)));
    }
    Ok(())
}

/// A broken structural invariant found by [`audit_graph`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityViolation {
    /// An edge endpoint names a node that does not exist
    DanglingEndpoint { edge_id: String, node_id: String },
    /// An edge endpoint names a port missing from its node
    MissingPort {
        edge_id: String,
        node_id: String,
        port: String,
    },
    /// A port lists an edge that is not in the graph, or the edge does not list the port
    UnlinkedEdge {
        edge_id: String,
        node_id: String,
        port: String,
    },
    /// A single-cardinality port holds more than one edge
    CardinalityExceeded {
        node_id: String,
        port: String,
        edges: usize,
    },
    /// A node's group pointer and the group's member set disagree
    MembershipMismatch { node_id: String, group_id: String },
}

impl std::fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DanglingEndpoint { edge_id, node_id } => write!(
                f,
                "Edge '{}' references unknown node '{}'",
                edge_id, node_id
            ),
            Self::MissingPort {
                edge_id,
                node_id,
                port,
            } => write!(
                f,
                "Edge '{}' references missing port '{}' on node '{}'",
                edge_id, port, node_id
            ),
            Self::UnlinkedEdge {
                edge_id,
                node_id,
                port,
            } => write!(
                f,
                "Edge '{}' and port '{}' on node '{}' disagree",
                edge_id, port, node_id
            ),
            Self::CardinalityExceeded {
                node_id,
                port,
                edges,
            } => write!(
                f,
                "Single port '{}' on node '{}' holds {} edges",
                port, node_id, edges
            ),
            Self::MembershipMismatch { node_id, group_id } => write!(
                f,
                "Node '{}' and group '{}' disagree on membership",
                node_id, group_id
            ),
        }
    }
}

impl std::error::Error for IntegrityViolation {}

/// Audit a graph and return every violation found
pub fn audit_graph(graph: &ConnectionGraph) -> Vec<IntegrityViolation> {
    let mut violations = Vec::new();

    audit_edge_endpoints(graph, &mut violations);
    audit_port_edges(graph, &mut violations);
    audit_membership(graph, &mut violations);

    violations
}

/// Every edge must point at existing ports that list it
fn audit_edge_endpoints(graph: &ConnectionGraph, violations: &mut Vec<IntegrityViolation>) {
    for edge in graph.edges() {
        for (endpoint, direction) in [(&edge.from, Direction::Out), (&edge.to, Direction::In)] {
            let Some(node) = graph.node(&endpoint.node_id) else {
                violations.push(IntegrityViolation::DanglingEndpoint {
                    edge_id: edge.id.clone(),
                    node_id: endpoint.node_id.clone(),
                });
                continue;
            };
            let port = match direction {
                Direction::In => node.input(&endpoint.port),
                Direction::Out => node.output(&endpoint.port),
            };
            match port {
                None => violations.push(IntegrityViolation::MissingPort {
                    edge_id: edge.id.clone(),
                    node_id: endpoint.node_id.clone(),
                    port: endpoint.port.clone(),
                }),
                Some(port) if !port.edges().contains(&edge.id) => {
                    violations.push(IntegrityViolation::UnlinkedEdge {
                        edge_id: edge.id.clone(),
                        node_id: endpoint.node_id.clone(),
                        port: endpoint.port.clone(),
                    })
                }
                Some(_) => {}
            }
        }
    }
}

/// Every edge a port lists must exist, and single ports hold at most one
fn audit_port_edges(graph: &ConnectionGraph, violations: &mut Vec<IntegrityViolation>) {
    for node in graph.nodes() {
        for port in node.inputs().iter().chain(node.outputs().iter()) {
            for edge_id in port.edges() {
                let linked = graph.edge(edge_id).is_some_and(|edge| {
                    let end = match port.direction() {
                        Direction::In => &edge.to,
                        Direction::Out => &edge.from,
                    };
                    end.node_id == node.id() && end.port == port.name()
                });
                if !linked {
                    violations.push(IntegrityViolation::UnlinkedEdge {
                        edge_id: edge_id.clone(),
                        node_id: node.id().to_string(),
                        port: port.name().to_string(),
                    });
                }
            }
            if port.cardinality() == Cardinality::Single && port.edges().len() > 1 {
                violations.push(IntegrityViolation::CardinalityExceeded {
                    node_id: node.id().to_string(),
                    port: port.name().to_string(),
                    edges: port.edges().len(),
                });
            }
        }
    }
}

/// Node group pointers and group member sets must mirror each other
fn audit_membership(graph: &ConnectionGraph, violations: &mut Vec<IntegrityViolation>) {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();

    for group in graph.groups() {
        for member in group.members() {
            let consistent = graph
                .node(member)
                .is_some_and(|node| node.group_id() == Some(group.id.as_str()));
            if !consistent {
                violations.push(IntegrityViolation::MembershipMismatch {
                    node_id: member.clone(),
                    group_id: group.id.clone(),
                });
            }
            seen.insert((member.as_str(), group.id.as_str()));
        }
    }

    for node in graph.nodes() {
        if let Some(group_id) = node.group_id() {
            if !seen.contains(&(node.id(), group_id)) {
                violations.push(IntegrityViolation::MembershipMismatch {
                    node_id: node.id().to_string(),
                    group_id: group_id.to_string(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::NodeTypeBuilder;
    use crate::descriptor::PortDescriptor;
    use crate::graph::ConnectionGraph;
    use crate::groups::WrapTarget;
    use crate::synthesis::synthesize;

    #[test]
    fn test_valid_qualified_ids() {
        for id in [
            "shape.emitter",
            "nodes.custom.ports.CustomPortsNode",
            "_private.node-2",
        ] {
            assert!(validate_qualified_id(id).is_ok(), "{}", id);
        }
    }

    #[test]
    fn test_invalid_qualified_ids() {
        for bad in [
            "",
            "emitter",
            "shape.",
            ".emitter",
            "shape..emitter",
            "shape.emit ter",
            "shape.2d",
            "sh@pe.x",
        ] {
            let err = validate_qualified_id(bad).unwrap_err();
            assert!(
                matches!(err, GraphError::InvalidIdentifier { .. }),
                "expected InvalidIdentifier for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_member_names() {
        assert!(validate_member_name("in A").is_ok());
        assert!(validate_member_name("multi in").is_ok());
        assert!(validate_member_name("cb_1").is_ok());
        assert!(validate_member_name("").is_err());
        assert!(validate_member_name(" in").is_err());
        assert!(validate_member_name("a.b").is_err());
        assert!(validate_member_name("tab\there").is_err());
    }

    #[test]
    fn test_audit_clean_graph() {
        let mut graph = ConnectionGraph::new();
        let source = NodeTypeBuilder::new("test.source", "Source")
            .output(PortDescriptor::output("out").single())
            .build();
        let sink = NodeTypeBuilder::new("test.sink", "Sink")
            .input(PortDescriptor::input("in").multi())
            .build();
        graph.register(synthesize(source).unwrap()).unwrap();
        graph.register(synthesize(sink).unwrap()).unwrap();

        let a = graph.create_node("test.source").unwrap();
        let b = graph.create_node("test.sink").unwrap();
        let c = graph.create_node("test.sink").unwrap();
        graph.connect(&a, "out", &b, "in").unwrap();
        graph.connect(&a, "out", &c, "in").unwrap();
        graph
            .wrap(WrapTarget::NewGroup, [a.clone(), b.clone()])
            .unwrap();

        assert!(audit_graph(&graph).is_empty());
    }
}
