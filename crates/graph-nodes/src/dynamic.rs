//! Descriptor-document nodes
//!
//! Node types authored as JSON documents and shipped with the crate. They go
//! through the same synthesis path as any user-supplied document.

use node_graph::{synthesize_json, NodeType, Result};

/// Authoring document of `nodes.dyBasic.DynamicNode`
pub const DYNAMIC_NODE_DOCUMENT: &str = include_str!("../descriptors/dynamic_basic.json");

/// Qualified id declared by [`DYNAMIC_NODE_DOCUMENT`]
pub const DYNAMIC_NODE_TYPE_ID: &str = "nodes.dyBasic.DynamicNode";

/// Every document bundled with the crate
pub const BUNDLED_DOCUMENTS: &[&str] = &[DYNAMIC_NODE_DOCUMENT];

/// Synthesize every bundled document node type
pub fn document_node_types() -> Result<Vec<NodeType>> {
    synthesize_documents(BUNDLED_DOCUMENTS)
}

/// Synthesize a set of authoring documents, failing on the first bad one
pub fn synthesize_documents(documents: &[&str]) -> Result<Vec<NodeType>> {
    documents.iter().map(|doc| synthesize_json(doc)).collect()
}
