//! Error types for the node graph core

use thiserror::Error;

use crate::descriptor::Direction;

/// Result type alias using GraphError
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur while synthesizing node types or mutating a graph
///
/// Every variant is a deterministic validation failure. Operations that
/// return one of these leave the graph and registry untouched.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A qualified type id, port name or widget name is malformed
    #[error("Invalid identifier '{value}': {reason}")]
    InvalidIdentifier { value: String, reason: String },

    /// Two ports share (name, direction) or two widgets share a name
    #[error("Duplicate member '{name}' on node type '{type_id}'")]
    DuplicateMember { type_id: String, name: String },

    /// A widget descriptor carries an inconsistent payload
    #[error("Invalid widget '{name}': {reason}")]
    InvalidWidget { name: String, reason: String },

    /// A node type with this id is already registered
    #[error("Node type already registered: {0}")]
    DuplicateTypeId(String),

    /// No node type with this id is registered
    #[error("Unknown node type: {0}")]
    UnknownTypeId(String),

    /// No node with this id exists in the graph
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    /// The node has no port with this name
    #[error("Unknown port '{port}' on node '{node_id}'")]
    UnknownPort { node_id: String, port: String },

    /// No edge with this id exists in the graph
    #[error("Unknown edge: {0}")]
    UnknownEdge(String),

    /// No group with this id exists in the graph
    #[error("Unknown group: {0}")]
    UnknownGroup(String),

    /// The node has no widget with this name
    #[error("Unknown widget '{widget}' on node '{node_id}'")]
    UnknownWidget { node_id: String, widget: String },

    /// A widget value does not fit the widget's kind or options
    #[error("Invalid value for widget '{widget}': {reason}")]
    InvalidWidgetValue { widget: String, reason: String },

    /// Connections must run from an output port to an input port
    #[error("Port '{port}' is an {actual} port, expected {expected}")]
    DirectionMismatch {
        port: String,
        expected: Direction,
        actual: Direction,
    },

    /// Both endpoints belong to the same node
    #[error("Cannot connect node '{0}' to itself")]
    SelfConnection(String),

    /// An accept rule on one of the ports rejects the peer
    #[error("Port '{port}' on node '{node_id}' does not accept '{peer_type}.{peer_port}'")]
    TypeNotAccepted {
        node_id: String,
        port: String,
        peer_type: String,
        peer_port: String,
    },

    /// A locked port cannot gain or lose connections
    #[error("Port '{port}' on node '{node_id}' is locked")]
    PortLocked { node_id: String, port: String },

    /// A descriptor document could not be parsed
    #[error("Descriptor error: {0}")]
    Descriptor(#[from] serde_json::Error),
}

impl GraphError {
    /// Create an invalid identifier error
    pub fn invalid_identifier(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown port error
    pub fn unknown_port(node_id: impl Into<String>, port: impl Into<String>) -> Self {
        Self::UnknownPort {
            node_id: node_id.into(),
            port: port.into(),
        }
    }

    /// Create a port locked error
    pub fn port_locked(node_id: impl Into<String>, port: impl Into<String>) -> Self {
        Self::PortLocked {
            node_id: node_id.into(),
            port: port.into(),
        }
    }
}
