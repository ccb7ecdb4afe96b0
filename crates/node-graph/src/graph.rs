//! The connection graph
//!
//! `ConnectionGraph` owns one editor session: its node type registry, the
//! live nodes, the edges between their ports, and the groups that organize
//! them. It is the only place edges are created or destroyed, so port edge
//! lists, cardinality limits and group membership stay consistent.
//!
//! Every operation is all-or-nothing: all checks run before the first
//! change, and a failed call leaves the graph untouched. Each committed
//! change is reported to the session's [`EventSink`] right after it is
//! applied.
//!
//! # Usage
//!
//! ```ignore
//! use node_graph::{synthesize, ConnectionGraph};
//!
//! let mut graph = ConnectionGraph::new();
//! graph.register(synthesize(emitter)?)?;
//! graph.register(synthesize(receiver)?)?;
//!
//! let a = graph.create_node("shape.emitter")?;
//! let b = graph.create_node("shape.receiver")?;
//! graph.connect(&a, "o", &b, "i")?;
//! ```

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use uuid::Uuid;

use crate::config::GraphConfig;
use crate::descriptor::{Cardinality, Direction, Rgb};
use crate::error::{GraphError, Result};
use crate::events::{EventSink, GraphEvent, NodeChange, NullEventSink};
use crate::groups::{dedup_members, GroupKind, NodeGroup, WrapTarget};
use crate::node::{Node, Port, WidgetValue};
use crate::registry::{NamespaceEntry, NodeTypeRegistry};
use crate::synthesis::NodeType;
use crate::types::{Edge, EdgeId, GroupId, NodeId, PortRef};

/// One editor session's graph of nodes, edges and groups
pub struct ConnectionGraph {
    session_id: Uuid,
    name: String,
    registry: NodeTypeRegistry,
    nodes: HashMap<NodeId, Node>,
    node_order: Vec<NodeId>,
    edges: HashMap<EdgeId, Edge>,
    edge_order: Vec<EdgeId>,
    groups: HashMap<GroupId, NodeGroup>,
    group_order: Vec<GroupId>,
    next_node: u64,
    next_edge: u64,
    next_group: u64,
    event_sink: Arc<dyn EventSink>,
}

impl std::fmt::Debug for ConnectionGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionGraph")
            .field("session_id", &self.session_id)
            .field("name", &self.name)
            .field("types", &self.registry.len())
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edges.len())
            .field("groups", &self.groups.len())
            .finish_non_exhaustive()
    }
}

impl Default for ConnectionGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionGraph {
    /// Create an empty session that discards events
    pub fn new() -> Self {
        Self::with_event_sink(Arc::new(NullEventSink))
    }

    /// Create an empty session reporting to the given sink
    pub fn with_event_sink(event_sink: Arc<dyn EventSink>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            name: GraphConfig::default().name,
            registry: NodeTypeRegistry::new(),
            nodes: HashMap::new(),
            node_order: Vec::new(),
            edges: HashMap::new(),
            edge_order: Vec::new(),
            groups: HashMap::new(),
            group_order: Vec::new(),
            next_node: 1,
            next_edge: 1,
            next_group: 1,
            event_sink,
        }
    }

    /// Create a session from configuration
    ///
    /// Registers the link-time built-in types when the configuration asks
    /// for them; fails if any of them does not synthesize.
    pub fn with_config(config: GraphConfig, event_sink: Arc<dyn EventSink>) -> Result<Self> {
        let mut graph = Self::with_event_sink(event_sink);
        graph.name = config.name;
        for (namespace, label) in config.namespace_labels {
            graph.registry.set_namespace_label(namespace, label);
        }
        if config.register_builtins {
            graph.register_builtins()?;
        }
        log::info!(
            "Started graph session '{}' ({})",
            graph.name,
            graph.session_id
        );
        Ok(graph)
    }

    /// Unique id of this session
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Swap the event sink; later events go to the new sink
    pub fn set_event_sink(&mut self, event_sink: Arc<dyn EventSink>) {
        self.event_sink = event_sink;
    }

    fn emit(&self, event: GraphEvent) {
        if let Err(e) = self.event_sink.send(event) {
            log::warn!("Failed to deliver graph event: {}", e);
        }
    }

    // ------------------------------------------------------------------
    // Node types
    // ------------------------------------------------------------------

    /// The session's node type registry
    pub fn registry(&self) -> &NodeTypeRegistry {
        &self.registry
    }

    /// Register a node type with the session
    pub fn register(&mut self, node_type: NodeType) -> Result<()> {
        let type_id = node_type.qualified_id().to_string();
        self.registry.register(node_type)?;
        log::info!("Registered node type '{}'", type_id);
        self.emit(GraphEvent::TypeRegistered { type_id });
        Ok(())
    }

    /// Register a re-synthesized node type over an existing entry
    ///
    /// Existing nodes keep their ports and widgets.
    pub fn replace_type(&mut self, node_type: NodeType) -> Option<NodeType> {
        let type_id = node_type.qualified_id().to_string();
        let previous = self.registry.replace(node_type);
        log::info!(
            "Registered node type '{}' (replacing: {})",
            type_id,
            previous.is_some()
        );
        self.emit(GraphEvent::TypeRegistered { type_id });
        previous
    }

    /// Remove a node type from the session
    ///
    /// Existing nodes of the type stay in the graph; only new instances
    /// become impossible.
    pub fn unregister(&mut self, qualified_id: &str) -> Result<NodeType> {
        let node_type = self.registry.unregister(qualified_id)?;
        log::info!("Unregistered node type '{}'", qualified_id);
        self.emit(GraphEvent::TypeUnregistered {
            type_id: qualified_id.to_string(),
        });
        Ok(node_type)
    }

    /// Register every link-time built-in type not registered yet
    pub fn register_builtins(&mut self) -> Result<Vec<String>> {
        let added = self.registry.register_builtins()?;
        for type_id in &added {
            self.emit(GraphEvent::TypeRegistered {
                type_id: type_id.clone(),
            });
        }
        Ok(added)
    }

    /// Look up a registered node type
    pub fn lookup(&self, qualified_id: &str) -> Result<&NodeType> {
        self.registry.lookup(qualified_id)
    }

    /// Registered types grouped by namespace
    pub fn list_by_namespace(&self) -> impl Iterator<Item = NamespaceEntry> + '_ {
        self.registry.list_by_namespace()
    }

    // ------------------------------------------------------------------
    // Nodes
    // ------------------------------------------------------------------

    /// Instantiate a registered node type
    pub fn create_node(&mut self, type_id: &str) -> Result<NodeId> {
        let node_type = self.registry.lookup(type_id)?;
        let node_id = format!("node-{}", self.next_node);
        let node = node_type.instantiate(node_id.clone());
        self.next_node += 1;

        self.nodes.insert(node_id.clone(), node);
        self.node_order.push(node_id.clone());

        log::debug!("Created node '{}' of type '{}'", node_id, type_id);
        self.emit(GraphEvent::NodeCreated {
            node_id: node_id.clone(),
            type_id: type_id.to_string(),
        });
        Ok(node_id)
    }

    /// Delete a node with every edge touching it and its group membership
    ///
    /// Locked ports do not protect their edges from deletion of the node.
    pub fn delete_node(&mut self, node_id: &str) -> Result<Node> {
        let edge_ids = self
            .nodes
            .get(node_id)
            .map(Node::edge_ids)
            .ok_or_else(|| GraphError::UnknownNode(node_id.to_string()))?;

        for edge_id in &edge_ids {
            self.remove_edge(edge_id);
        }

        let Some(mut node) = self.nodes.remove(node_id) else {
            return Err(GraphError::UnknownNode(node_id.to_string()));
        };
        self.node_order.retain(|id| id != node_id);

        if let Some(group_id) = node.group_id().map(str::to_string) {
            node.set_group(None);
            if let Some(group) = self.groups.get_mut(&group_id) {
                group.remove(node_id);
                let members = group.node_ids();
                self.emit(GraphEvent::group_changed(&group_id, members));
            }
        }

        log::debug!(
            "Deleted node '{}' ({} edges removed)",
            node_id,
            edge_ids.len()
        );
        self.emit(GraphEvent::NodeDeleted {
            node_id: node_id.to_string(),
            type_id: node.type_id().to_string(),
        });
        Ok(node)
    }

    /// Change a node's display name
    pub fn rename_node(&mut self, node_id: &str, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        let node = self.node_mut(node_id)?;
        if node.name == name {
            return Ok(());
        }
        node.name = name.clone();
        self.emit(GraphEvent::NodeUpdated {
            node_id: node_id.to_string(),
            change: NodeChange::Name { name },
        });
        Ok(())
    }

    /// Enable or disable a node
    pub fn set_node_disabled(&mut self, node_id: &str, disabled: bool) -> Result<()> {
        let node = self.node_mut(node_id)?;
        if node.disabled == disabled {
            return Ok(());
        }
        node.disabled = disabled;
        self.emit(GraphEvent::NodeUpdated {
            node_id: node_id.to_string(),
            change: NodeChange::Disabled { disabled },
        });
        Ok(())
    }

    /// Override a node's color; `None` falls back to the renderer default
    pub fn set_node_color(&mut self, node_id: &str, color: Option<Rgb>) -> Result<()> {
        let node = self.node_mut(node_id)?;
        if node.color == color {
            return Ok(());
        }
        node.color = color;
        self.emit(GraphEvent::NodeUpdated {
            node_id: node_id.to_string(),
            change: NodeChange::Color { color },
        });
        Ok(())
    }

    /// Set the value of one of a node's widgets
    ///
    /// Returns the previous value.
    pub fn set_widget_value(
        &mut self,
        node_id: &str,
        widget: &str,
        value: WidgetValue,
    ) -> Result<WidgetValue> {
        let node = self.node_mut(node_id)?;
        let previous = node.set_widget_value(widget, value.clone())?;
        if previous != value {
            self.emit(GraphEvent::NodeUpdated {
                node_id: node_id.to_string(),
                change: NodeChange::Widget {
                    widget: widget.to_string(),
                    value,
                },
            });
        }
        Ok(previous)
    }

    /// Lock or unlock a port
    ///
    /// A locked port keeps its edges: it accepts no new edge and none of its
    /// edges can be removed until it is unlocked or its node is deleted.
    pub fn set_port_locked(
        &mut self,
        node_id: &str,
        port: &str,
        direction: Direction,
        locked: bool,
    ) -> Result<()> {
        let found = self
            .node_mut(node_id)?
            .port_mut(port, direction)
            .ok_or_else(|| GraphError::unknown_port(node_id, port))?;
        if found.is_locked() == locked {
            return Ok(());
        }
        found.set_locked(locked);
        self.emit(GraphEvent::NodeUpdated {
            node_id: node_id.to_string(),
            change: NodeChange::PortLocked {
                port: port.to_string(),
                direction,
                locked,
            },
        });
        Ok(())
    }

    fn node_mut(&mut self, node_id: &str) -> Result<&mut Node> {
        self.nodes
            .get_mut(node_id)
            .ok_or_else(|| GraphError::UnknownNode(node_id.to_string()))
    }

    // ------------------------------------------------------------------
    // Edges
    // ------------------------------------------------------------------

    /// Connect an output port to an input port
    ///
    /// A single-cardinality endpoint that is already connected has its old
    /// edge replaced. When both endpoints need replacing, the output side's
    /// edge is removed first, then the input side's. Connecting two ports
    /// that are already joined returns the existing edge and changes nothing.
    pub fn connect(
        &mut self,
        from_node: &str,
        from_port: &str,
        to_node: &str,
        to_port: &str,
    ) -> Result<Edge> {
        let from_ref = PortRef::new(from_node, from_port);
        let to_ref = PortRef::new(to_node, to_port);

        let replaced = {
            let (source_node, source) = self.resolve_port(from_node, from_port, Direction::Out)?;
            let (target_node, target) = self.resolve_port(to_node, to_port, Direction::In)?;

            check_direction(source, Direction::Out)?;
            check_direction(target, Direction::In)?;

            if from_node == to_node {
                return Err(GraphError::SelfConnection(from_node.to_string()));
            }

            if !source
                .descriptor()
                .accepts(target_node.type_id(), to_port, Direction::In)
            {
                return Err(GraphError::TypeNotAccepted {
                    node_id: from_node.to_string(),
                    port: from_port.to_string(),
                    peer_type: target_node.type_id().to_string(),
                    peer_port: to_port.to_string(),
                });
            }
            if !target
                .descriptor()
                .accepts(source_node.type_id(), from_port, Direction::Out)
            {
                return Err(GraphError::TypeNotAccepted {
                    node_id: to_node.to_string(),
                    port: to_port.to_string(),
                    peer_type: source_node.type_id().to_string(),
                    peer_port: from_port.to_string(),
                });
            }

            if let Some(existing) = source
                .edges()
                .iter()
                .filter_map(|id| self.edges.get(id))
                .find(|edge| edge.joins(&from_ref, &to_ref))
            {
                return Ok(existing.clone());
            }

            if source.is_locked() {
                return Err(GraphError::port_locked(from_node, from_port));
            }
            if target.is_locked() {
                return Err(GraphError::port_locked(to_node, to_port));
            }

            let mut replaced: Vec<EdgeId> = Vec::new();
            for port in [source, target] {
                if port.cardinality() == Cardinality::Single {
                    for edge_id in port.edges() {
                        if !replaced.contains(edge_id) {
                            replaced.push(edge_id.clone());
                        }
                    }
                }
            }
            for edge_id in &replaced {
                self.check_unlocked(edge_id)?;
            }
            replaced
        };

        for edge_id in &replaced {
            self.remove_edge(edge_id);
        }

        let edge = Edge {
            id: format!("edge-{}", self.next_edge),
            from: from_ref,
            to: to_ref,
        };
        self.next_edge += 1;
        self.insert_edge(edge.clone());

        log::debug!(
            "Connected {}.{} -> {}.{} as '{}' ({} replaced)",
            from_node,
            from_port,
            to_node,
            to_port,
            edge.id,
            replaced.len()
        );
        self.emit(GraphEvent::EdgeCreated { edge: edge.clone() });
        Ok(edge)
    }

    /// Remove one edge
    pub fn disconnect(&mut self, edge_id: &str) -> Result<Edge> {
        if !self.edges.contains_key(edge_id) {
            return Err(GraphError::UnknownEdge(edge_id.to_string()));
        }
        self.check_unlocked(edge_id)?;
        self.remove_edge(edge_id)
            .ok_or_else(|| GraphError::UnknownEdge(edge_id.to_string()))
    }

    /// Remove every edge attached to one port
    ///
    /// Returns the removed edges, oldest first.
    pub fn disconnect_port(
        &mut self,
        node_id: &str,
        port: &str,
        direction: Direction,
    ) -> Result<Vec<Edge>> {
        let edge_ids = {
            let node = self
                .node(node_id)
                .ok_or_else(|| GraphError::UnknownNode(node_id.to_string()))?;
            let found = node
                .ports(direction)
                .iter()
                .find(|p| p.name() == port)
                .ok_or_else(|| GraphError::unknown_port(node_id, port))?;
            if found.is_locked() && found.is_connected() {
                return Err(GraphError::port_locked(node_id, port));
            }
            found.edges().to_vec()
        };
        for edge_id in &edge_ids {
            self.check_unlocked(edge_id)?;
        }

        Ok(edge_ids
            .iter()
            .filter_map(|edge_id| self.remove_edge(edge_id))
            .collect())
    }

    /// Find a port by name, preferring the given direction
    fn resolve_port(
        &self,
        node_id: &str,
        port: &str,
        preferred: Direction,
    ) -> Result<(&Node, &Port)> {
        let node = self
            .nodes
            .get(node_id)
            .ok_or_else(|| GraphError::UnknownNode(node_id.to_string()))?;
        let found = node
            .find_port(port, preferred)
            .ok_or_else(|| GraphError::unknown_port(node_id, port))?;
        Ok((node, found))
    }

    /// Fail if either endpoint of an edge is locked
    fn check_unlocked(&self, edge_id: &str) -> Result<()> {
        let Some(edge) = self.edges.get(edge_id) else {
            return Ok(());
        };
        for (end, direction) in [(&edge.from, Direction::Out), (&edge.to, Direction::In)] {
            if self.port(end, direction).is_some_and(Port::is_locked) {
                return Err(GraphError::port_locked(&end.node_id, &end.port));
            }
        }
        Ok(())
    }

    fn port(&self, port_ref: &PortRef, direction: Direction) -> Option<&Port> {
        self.nodes
            .get(&port_ref.node_id)?
            .ports(direction)
            .iter()
            .find(|p| p.name() == port_ref.port)
    }

    fn insert_edge(&mut self, edge: Edge) {
        if let Some(port) = self
            .nodes
            .get_mut(&edge.from.node_id)
            .and_then(|n| n.port_mut(&edge.from.port, Direction::Out))
        {
            port.attach(edge.id.clone());
        }
        if let Some(port) = self
            .nodes
            .get_mut(&edge.to.node_id)
            .and_then(|n| n.port_mut(&edge.to.port, Direction::In))
        {
            port.attach(edge.id.clone());
        }
        self.edge_order.push(edge.id.clone());
        self.edges.insert(edge.id.clone(), edge);
    }

    /// Unlink an edge from both ports and drop it, reporting the removal
    fn remove_edge(&mut self, edge_id: &str) -> Option<Edge> {
        let edge = self.edges.remove(edge_id)?;
        self.edge_order.retain(|id| id != edge_id);

        if let Some(port) = self
            .nodes
            .get_mut(&edge.from.node_id)
            .and_then(|n| n.port_mut(&edge.from.port, Direction::Out))
        {
            port.detach(edge_id);
        }
        if let Some(port) = self
            .nodes
            .get_mut(&edge.to.node_id)
            .and_then(|n| n.port_mut(&edge.to.port, Direction::In))
        {
            port.detach(edge_id);
        }

        log::debug!("Removed edge '{}'", edge_id);
        self.emit(GraphEvent::EdgeRemoved { edge: edge.clone() });
        Some(edge)
    }

    // ------------------------------------------------------------------
    // Groups
    // ------------------------------------------------------------------

    /// Make a group's membership exactly the given nodes
    ///
    /// Nodes are taken out of any other group first. When an existing group
    /// is reused, its members missing from `node_ids` are released. Groups
    /// left empty by this call stay alive until unwrapped.
    pub fn wrap(
        &mut self,
        target: WrapTarget,
        node_ids: impl IntoIterator<Item = NodeId>,
    ) -> Result<GroupId> {
        let members = dedup_members(node_ids);
        if let Some(missing) = members.iter().find(|id| !self.nodes.contains_key(*id)) {
            return Err(GraphError::UnknownNode(missing.clone()));
        }

        let group_id = match target {
            WrapTarget::Existing(group_id) => {
                if !self.groups.contains_key(&group_id) {
                    return Err(GraphError::UnknownGroup(group_id));
                }
                group_id
            }
            WrapTarget::NewGroup => self.new_group(GroupKind::Group),
            WrapTarget::NewBackdrop => self.new_group(GroupKind::Backdrop),
        };

        let wanted: BTreeSet<&NodeId> = members.iter().collect();
        let mut touched: BTreeSet<GroupId> = BTreeSet::new();

        let released: Vec<NodeId> = self
            .groups
            .get(&group_id)
            .map(|g| {
                g.members()
                    .filter(|id| !wanted.contains(id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        for node_id in &released {
            if let Some(node) = self.nodes.get_mut(node_id) {
                node.set_group(None);
            }
            if let Some(group) = self.groups.get_mut(&group_id) {
                group.remove(node_id);
            }
        }

        for node_id in &members {
            let Some(node) = self.nodes.get_mut(node_id) else {
                continue;
            };
            if let Some(previous) = node
                .group_id()
                .filter(|g| *g != group_id)
                .map(str::to_string)
            {
                if let Some(group) = self.groups.get_mut(&previous) {
                    group.remove(node_id);
                }
                touched.insert(previous);
            }
            node.set_group(Some(group_id.clone()));
            if let Some(group) = self.groups.get_mut(&group_id) {
                group.insert(node_id.clone());
            }
        }

        for other in &touched {
            if let Some(group) = self.groups.get(other) {
                self.emit(GraphEvent::group_changed(other, group.node_ids()));
            }
        }
        if let Some(group) = self.groups.get(&group_id) {
            log::debug!("Wrapped {} nodes in '{}'", group.len(), group_id);
            self.emit(GraphEvent::group_changed(&group_id, group.node_ids()));
        }
        Ok(group_id)
    }

    /// Release every member of a group and discard it
    ///
    /// Returns the ids of the released nodes.
    pub fn unwrap(&mut self, group_id: &str) -> Result<Vec<NodeId>> {
        let Some(mut group) = self.groups.remove(group_id) else {
            return Err(GraphError::UnknownGroup(group_id.to_string()));
        };
        self.group_order.retain(|id| id != group_id);

        let released: Vec<NodeId> = group.take_members().into_iter().collect();
        for node_id in &released {
            if let Some(node) = self.nodes.get_mut(node_id) {
                node.set_group(None);
            }
        }

        log::debug!(
            "Unwrapped '{}' ({} nodes released)",
            group_id,
            released.len()
        );
        self.emit(GraphEvent::group_dissolved(group_id));
        Ok(released)
    }

    /// Edges with exactly one endpoint inside a group
    pub fn boundary_edges(&self, group_id: &str) -> Result<Vec<&Edge>> {
        let group = self
            .groups
            .get(group_id)
            .ok_or_else(|| GraphError::UnknownGroup(group_id.to_string()))?;
        Ok(group.boundary_edges(self.edges()).collect())
    }

    fn new_group(&mut self, kind: GroupKind) -> GroupId {
        let group_id = format!("group-{}", self.next_group);
        self.next_group += 1;
        self.groups
            .insert(group_id.clone(), NodeGroup::new(group_id.clone(), kind));
        self.group_order.push(group_id.clone());
        group_id
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    /// Nodes in creation order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.node_order.iter().filter_map(|id| self.nodes.get(id))
    }

    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    /// Edges in creation order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edge_order.iter().filter_map(|id| self.edges.get(id))
    }

    pub fn edge(&self, edge_id: &str) -> Option<&Edge> {
        self.edges.get(edge_id)
    }

    /// Edges attached to one port, oldest first
    pub fn edges_of_port(
        &self,
        node_id: &str,
        port: &str,
        direction: Direction,
    ) -> Result<Vec<&Edge>> {
        let node = self
            .node(node_id)
            .ok_or_else(|| GraphError::UnknownNode(node_id.to_string()))?;
        let port = node
            .ports(direction)
            .iter()
            .find(|p| p.name() == port)
            .ok_or_else(|| GraphError::unknown_port(node_id, port))?;
        Ok(port
            .edges()
            .iter()
            .filter_map(|id| self.edges.get(id))
            .collect())
    }

    /// Groups in creation order
    pub fn groups(&self) -> impl Iterator<Item = &NodeGroup> {
        self.group_order.iter().filter_map(|id| self.groups.get(id))
    }

    pub fn group(&self, group_id: &str) -> Option<&NodeGroup> {
        self.groups.get(group_id)
    }

    /// The group containing a node
    pub fn group_of(&self, node_id: &str) -> Option<&NodeGroup> {
        self.nodes
            .get(node_id)?
            .group_id()
            .and_then(|id| self.groups.get(id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Tear the session down: drop every node, edge, group and type
    ///
    /// Emits no events. Id counters keep running, so handles from before
    /// the teardown never alias new items.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.node_order.clear();
        self.edges.clear();
        self.edge_order.clear();
        self.groups.clear();
        self.group_order.clear();
        self.registry.clear();
        log::info!("Cleared graph session '{}'", self.name);
    }
}

fn check_direction(port: &Port, expected: Direction) -> Result<()> {
    if port.direction() == expected {
        Ok(())
    } else {
        Err(GraphError::DirectionMismatch {
            port: port.name().to_string(),
            expected,
            actual: port.direction(),
        })
    }
}
