//! Groups and backdrops
//!
//! A group is a flat, non-hierarchical container for organizing nodes. A
//! backdrop is the same bookkeeping drawn as a panel behind its members.
//! Membership is exclusive: a node sits in at most one group at a time, and
//! groups never contain other groups. Geometry (fitting a backdrop around its
//! members) is left to the renderer.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::types::{Edge, GroupId, NodeId};

/// How a group is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    /// Plain organizational group
    #[default]
    Group,
    /// Backdrop panel drawn behind its members
    Backdrop,
}

/// Where `wrap` puts the given nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrapTarget {
    /// Create a new plain group
    NewGroup,
    /// Create a new backdrop
    NewBackdrop,
    /// Reuse an existing group, replacing its membership
    Existing(GroupId),
}

/// A set of nodes grouped for organization only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeGroup {
    /// Unique identifier for this group
    pub id: GroupId,
    /// Human-readable name for the group
    pub name: String,
    pub kind: GroupKind,
    members: BTreeSet<NodeId>,
}

impl NodeGroup {
    /// Create a new empty group
    pub fn new(id: impl Into<String>, kind: GroupKind) -> Self {
        let name = match kind {
            GroupKind::Group => "group",
            GroupKind::Backdrop => "backdrop",
        };
        Self {
            id: id.into(),
            name: name.to_string(),
            kind,
            members: BTreeSet::new(),
        }
    }

    /// Member node ids in sorted order
    pub fn members(&self) -> impl Iterator<Item = &NodeId> {
        self.members.iter()
    }

    /// Member node ids as an owned list
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.members.iter().cloned().collect()
    }

    /// Check if this group contains a specific node
    pub fn contains_node(&self, node_id: &str) -> bool {
        self.members.contains(node_id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub(crate) fn insert(&mut self, node_id: NodeId) -> bool {
        self.members.insert(node_id)
    }

    pub(crate) fn remove(&mut self, node_id: &str) -> bool {
        self.members.remove(node_id)
    }

    pub(crate) fn take_members(&mut self) -> BTreeSet<NodeId> {
        std::mem::take(&mut self.members)
    }

    /// Get edges that cross the group boundary
    ///
    /// These are edges where one end is inside the group and the other is outside.
    pub fn boundary_edges<'a>(
        &'a self,
        all_edges: impl IntoIterator<Item = &'a Edge> + 'a,
    ) -> impl Iterator<Item = &'a Edge> + 'a {
        all_edges.into_iter().filter(move |e| {
            let source_inside = self.members.contains(&e.from.node_id);
            let target_inside = self.members.contains(&e.to.node_id);
            source_inside != target_inside
        })
    }

    /// Get edges with both ends inside the group
    pub fn internal_edges<'a>(
        &'a self,
        all_edges: impl IntoIterator<Item = &'a Edge> + 'a,
    ) -> impl Iterator<Item = &'a Edge> + 'a {
        all_edges.into_iter().filter(move |e| {
            self.members.contains(&e.from.node_id) && self.members.contains(&e.to.node_id)
        })
    }
}

/// Deduplicate a requested member list, keeping first occurrences
pub(crate) fn dedup_members(node_ids: impl IntoIterator<Item = NodeId>) -> Vec<NodeId> {
    let mut seen = HashSet::new();
    node_ids
        .into_iter()
        .filter(|id| seen.insert(id.clone()))
        .collect()
}
