//! Graph change notifications
//!
//! Every committed mutation of a [`ConnectionGraph`](crate::graph::ConnectionGraph)
//! is reported to an [`EventSink`] synchronously, after the change is applied
//! and in the order changes were applied. Renderers use these events to stay
//! in sync without polling.

use serde::{Deserialize, Serialize};

use crate::descriptor::{Direction, Rgb};
use crate::node::WidgetValue;
use crate::types::{Edge, GroupId, NodeId};

/// Trait for receiving graph events
///
/// This abstracts over the host's notification mechanism (UI channel,
/// callback list, test recorder) so the graph does not depend on any
/// particular event system.
pub trait EventSink: Send + Sync {
    /// Deliver an event
    ///
    /// Returns an error if the event could not be delivered (e.g., channel
    /// closed). The graph logs the failure; the mutation stays committed.
    fn send(&self, event: GraphEvent) -> Result<(), EventError>;
}

/// Error when delivering events fails
#[derive(Debug, Clone)]
pub struct EventError {
    pub message: String,
}

impl std::fmt::Display for EventError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Event error: {}", self.message)
    }
}

impl std::error::Error for EventError {}

impl EventError {
    pub fn channel_closed() -> Self {
        Self {
            message: "Channel closed".to_string(),
        }
    }
}

/// A property of a node changed through the properties surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "property", rename_all = "camelCase")]
pub enum NodeChange {
    /// Display name changed
    Name { name: String },
    /// Node enabled or disabled
    Disabled { disabled: bool },
    /// Node color set or cleared
    Color { color: Option<Rgb> },
    /// An embedded widget got a new value
    Widget { widget: String, value: WidgetValue },
    /// A port was locked or unlocked
    PortLocked {
        port: String,
        direction: Direction,
        locked: bool,
    },
}

/// Events emitted when the graph or its registry changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GraphEvent {
    /// A node type was added to the session registry
    #[serde(rename_all = "camelCase")]
    TypeRegistered { type_id: String },

    /// A node type was removed from the session registry
    #[serde(rename_all = "camelCase")]
    TypeUnregistered { type_id: String },

    /// A node was created
    #[serde(rename_all = "camelCase")]
    NodeCreated { node_id: NodeId, type_id: String },

    /// A node was deleted (its edges and membership are already gone)
    #[serde(rename_all = "camelCase")]
    NodeDeleted { node_id: NodeId, type_id: String },

    /// A node property changed
    #[serde(rename_all = "camelCase")]
    NodeUpdated { node_id: NodeId, change: NodeChange },

    /// An edge was added
    EdgeCreated { edge: Edge },

    /// An edge was removed, explicitly or by replacement or cascade
    EdgeRemoved { edge: Edge },

    /// Group membership changed
    ///
    /// `members` is the full membership after the change; `dissolved` is set
    /// when the group itself was discarded.
    #[serde(rename_all = "camelCase")]
    GroupChanged {
        group_id: GroupId,
        members: Vec<NodeId>,
        dissolved: bool,
    },
}

impl GraphEvent {
    /// Create a group changed event for a live group
    pub fn group_changed(group_id: &str, members: Vec<NodeId>) -> Self {
        Self::GroupChanged {
            group_id: group_id.to_string(),
            members,
            dissolved: false,
        }
    }

    /// Create a group changed event for a discarded group
    pub fn group_dissolved(group_id: &str) -> Self {
        Self::GroupChanged {
            group_id: group_id.to_string(),
            members: Vec::new(),
            dissolved: true,
        }
    }
}

/// A no-op event sink that discards all events
///
/// Default sink of a new graph.
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn send(&self, _event: GraphEvent) -> Result<(), EventError> {
        Ok(())
    }
}

/// A vector-based event sink that collects events
///
/// Useful for testing to verify events were emitted correctly.
pub struct VecEventSink {
    events: std::sync::Mutex<Vec<GraphEvent>>,
}

impl VecEventSink {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Get all collected events
    pub fn events(&self) -> Vec<GraphEvent> {
        self.lock().clone()
    }

    /// Clear all collected events
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<GraphEvent>> {
        // A panicking reader cannot leave the vector half-written.
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for VecEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for VecEventSink {
    fn send(&self, event: GraphEvent) -> Result<(), EventError> {
        self.lock().push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_event_sink() {
        let sink = VecEventSink::new();

        sink.send(GraphEvent::NodeCreated {
            node_id: "node-1".to_string(),
            type_id: "shape.emitter".to_string(),
        })
        .unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 1);

        match &events[0] {
            GraphEvent::NodeCreated { node_id, type_id } => {
                assert_eq!(node_id, "node-1");
                assert_eq!(type_id, "shape.emitter");
            }
            _ => panic!("Expected NodeCreated event"),
        }

        sink.clear();
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_null_event_sink() {
        let sink = NullEventSink;
        // Should not panic
        sink.send(GraphEvent::group_dissolved("group-1")).unwrap();
    }

    #[test]
    fn test_event_serialization() {
        let event = GraphEvent::group_changed("group-1", vec!["node-1".to_string()]);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "groupChanged");
        assert_eq!(json["groupId"], "group-1");
        assert_eq!(json["dissolved"], false);

        let event = GraphEvent::NodeUpdated {
            node_id: "node-1".to_string(),
            change: NodeChange::Disabled { disabled: true },
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "nodeUpdated");
        assert_eq!(json["change"]["property"], "disabled");
    }
}
