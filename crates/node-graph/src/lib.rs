//! Node Graph - Core of a visual node-graph editor
//!
//! This crate holds everything a node editor needs below the canvas:
//!
//! - Declarative node type descriptors (ports, widgets, shape, color)
//! - Synthesis of descriptors into constructible node types
//! - A per-session registry of node types, browsable by namespace
//! - A connection graph enforcing port direction, cardinality and
//!   acceptance rules, plus exclusive grouping of nodes
//! - Typed change events for keeping a renderer in sync
//!
//! # Architecture
//!
//! Node types are data. A [`NodeTypeDescriptor`] is authored in code (via
//! [`NodeTypeBuilder`]) or as a JSON document, validated by [`synthesize`],
//! and stored in a [`NodeTypeRegistry`]. A [`ConnectionGraph`] instantiates
//! nodes from registered types and is the single authority over edges and
//! groups. Rendering, persistence and undo live outside this crate.
//!
//! # Example
//!
//! ```ignore
//! use node_graph::{synthesize, ConnectionGraph, NodeTypeBuilder, PortDescriptor};
//!
//! let emitter = NodeTypeBuilder::new("shape.emitter", "Emitter")
//!     .output(PortDescriptor::output("o").single())
//!     .build();
//!
//! let mut graph = ConnectionGraph::new();
//! graph.register(synthesize(emitter)?)?;
//! let node = graph.create_node("shape.emitter")?;
//! ```

pub mod builder;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod events;
pub mod graph;
pub mod groups;
pub mod node;
pub mod registry;
pub mod synthesis;
pub mod types;
pub mod validation;

// Re-export key types
pub use builder::NodeTypeBuilder;
pub use config::GraphConfig;
pub use descriptor::{
    AcceptRule, BaseShape, Cardinality, DescriptorFn, Direction, NodeDescriptor, NodeTypeDescriptor,
    PortDescriptor, RenderHook, Rgb, WidgetDescriptor, WidgetKind,
};
pub use error::{GraphError, Result};
pub use events::{EventError, EventSink, GraphEvent, NodeChange, NullEventSink, VecEventSink};
pub use graph::ConnectionGraph;
pub use groups::{GroupKind, NodeGroup, WrapTarget};
pub use node::{Node, Port, WidgetBinding, WidgetValue};
pub use registry::{NamespaceEntry, NodeTypeRegistry};
pub use synthesis::{synthesize, synthesize_json, NodeType};
pub use types::{Edge, EdgeId, GroupId, NodeId, PortRef};
pub use validation::{audit_graph, IntegrityViolation};
