//! Basic example host
//!
//! Loads the session configuration, registers the bundled node types,
//! builds the example graph and logs what it contains.
//!
//! Usage: `basic_example [config.json]`

use std::path::PathBuf;
use std::sync::Arc;

use graph_nodes::constants::CONFIG_FILE;
use graph_nodes::{build_basic_example, load_config, register_nodes};
use node_graph::{ConnectionGraph, EventError, EventSink, GraphEvent};

/// Logs every graph event at debug level
struct LogEventSink;

impl EventSink for LogEventSink {
    fn send(&self, event: GraphEvent) -> Result<(), EventError> {
        log::debug!("{:?}", event);
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let config = load_config(&config_path)?;

    let mut graph = ConnectionGraph::with_config(config, Arc::new(LogEventSink))?;
    let added = register_nodes(&mut graph)?;
    log::info!("{} node types available", graph.registry().len());
    log::debug!("Newly registered: {:?}", added);

    for entry in graph.list_by_namespace() {
        log::info!(
            "{} ({}): {}",
            entry.label,
            entry.namespace,
            entry.type_ids.join(", ")
        );
    }

    build_basic_example(&mut graph)?;

    for node in graph.nodes() {
        log::info!(
            "{} '{}' [{}]{}",
            node.id(),
            node.name,
            node.type_id(),
            if node.disabled { " (disabled)" } else { "" }
        );
    }
    for edge in graph.edges() {
        log::info!(
            "{}: {}.{} -> {}.{}",
            edge.id,
            edge.from.node_id,
            edge.from.port,
            edge.to.node_id,
            edge.to.port
        );
    }
    for group in graph.groups() {
        log::info!("{} {:?}: {:?}", group.id, group.kind, group.node_ids());
    }

    Ok(())
}
