//! Node type registry
//!
//! Maps qualified type ids to synthesized [`NodeType`]s for one editor
//! session. A registry starts empty; types enter it only through
//! [`NodeTypeRegistry::register`] (or the explicit `replace`), and leave
//! through `unregister` or `clear`. Multiple registries can coexist, one
//! per session.
//!
//! # Usage
//!
//! ```ignore
//! use node_graph::{synthesize, NodeTypeRegistry};
//!
//! let mut registry = NodeTypeRegistry::new();
//! registry.register(synthesize(descriptor)?)?;
//!
//! for entry in registry.list_by_namespace() {
//!     println!("{}: {:?}", entry.namespace, entry.type_ids);
//! }
//! ```

use std::collections::{BTreeMap, HashMap};

use crate::descriptor::{namespace_of, DescriptorFn};
use crate::error::{GraphError, Result};
use crate::synthesis::{synthesize, NodeType};

/// One namespace of the browsing listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceEntry {
    /// Prefix before the last `.` of the member ids
    pub namespace: String,
    /// Display label, falling back to the namespace itself
    pub label: String,
    /// Qualified ids in this namespace, sorted
    pub type_ids: Vec<String>,
}

/// Registry of node types for one session
#[derive(Debug, Default)]
pub struct NodeTypeRegistry {
    entries: HashMap<String, NodeType>,
    labels: BTreeMap<String, String>,
}

impl NodeTypeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every link-time built-in type
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        registry.register_builtins()?;
        Ok(registry)
    }

    /// Synthesize and register every descriptor submitted via `inventory`
    ///
    /// Built-ins already present are left alone. Returns the ids that were
    /// newly registered, sorted.
    pub fn register_builtins(&mut self) -> Result<Vec<String>> {
        let mut node_types = Vec::new();
        for descriptor_fn in inventory::iter::<DescriptorFn> {
            node_types.push(synthesize((descriptor_fn.0)())?);
        }

        let mut added = Vec::new();
        for node_type in node_types {
            if self.contains(node_type.qualified_id()) {
                continue;
            }
            added.push(node_type.qualified_id().to_string());
            self.entries
                .insert(node_type.qualified_id().to_string(), node_type);
        }
        added.sort();

        log::info!("Registered {} built-in node types", added.len());
        Ok(added)
    }

    /// Register a node type
    ///
    /// Fails with `DuplicateTypeId` if the id is taken; the existing entry
    /// is kept.
    pub fn register(&mut self, node_type: NodeType) -> Result<()> {
        let id = node_type.qualified_id().to_string();
        if self.entries.contains_key(&id) {
            return Err(GraphError::DuplicateTypeId(id));
        }
        log::debug!("Registered node type '{}'", id);
        self.entries.insert(id, node_type);
        Ok(())
    }

    /// Register a node type, replacing any entry with the same id
    ///
    /// Nodes already built from the old type keep their ports and widgets;
    /// only later instantiations see the new type.
    pub fn replace(&mut self, node_type: NodeType) -> Option<NodeType> {
        let id = node_type.qualified_id().to_string();
        log::debug!("Replaced node type '{}'", id);
        self.entries.insert(id, node_type)
    }

    /// Remove a node type
    pub fn unregister(&mut self, qualified_id: &str) -> Result<NodeType> {
        self.entries
            .remove(qualified_id)
            .ok_or_else(|| GraphError::UnknownTypeId(qualified_id.to_string()))
    }

    /// Look up a node type
    pub fn lookup(&self, qualified_id: &str) -> Result<&NodeType> {
        self.entries
            .get(qualified_id)
            .ok_or_else(|| GraphError::UnknownTypeId(qualified_id.to_string()))
    }

    /// Check if a node type is registered
    pub fn contains(&self, qualified_id: &str) -> bool {
        self.entries.contains_key(qualified_id)
    }

    /// All registered ids, sorted
    pub fn type_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every registered type (session teardown)
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Set the display label of a namespace
    pub fn set_namespace_label(&mut self, namespace: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(namespace.into(), label.into());
    }

    /// Display label of a namespace
    pub fn namespace_label<'a>(&'a self, namespace: &'a str) -> &'a str {
        self.labels
            .get(namespace)
            .map(String::as_str)
            .unwrap_or(namespace)
    }

    /// Registered types grouped by namespace, for browsing
    ///
    /// Computed from the current contents on every call; the sequence is
    /// finite, sorted by namespace, and can be requested again at any time.
    pub fn list_by_namespace(&self) -> impl Iterator<Item = NamespaceEntry> + '_ {
        let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for id in self.entries.keys() {
            grouped.entry(namespace_of(id)).or_default().push(id);
        }

        grouped.into_iter().map(move |(namespace, mut ids)| {
            ids.sort_unstable();
            NamespaceEntry {
                namespace: namespace.to_string(),
                label: self.namespace_label(namespace).to_string(),
                type_ids: ids.into_iter().map(str::to_string).collect(),
            }
        })
    }
}
