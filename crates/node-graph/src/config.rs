//! Session configuration
//!
//! Plain data handed to
//! [`ConnectionGraph::with_config`](crate::graph::ConnectionGraph::with_config).
//! The core never reads files; hosts deserialize this from wherever they
//! keep settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default session name
pub const DEFAULT_SESSION_NAME: &str = "untitled";

/// Configuration for one graph session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphConfig {
    /// Human-readable session name
    pub name: String,
    /// Register every link-time built-in node type when the session starts
    pub register_builtins: bool,
    /// Display labels for type namespaces (e.g. "nodes.basic" -> "Basic Nodes")
    pub namespace_labels: BTreeMap<String, String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SESSION_NAME.to_string(),
            register_builtins: false,
            namespace_labels: BTreeMap::new(),
        }
    }
}

impl GraphConfig {
    /// Set a namespace display label
    pub fn with_namespace_label(
        mut self,
        namespace: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.namespace_labels.insert(namespace.into(), label.into());
        self
    }
}
