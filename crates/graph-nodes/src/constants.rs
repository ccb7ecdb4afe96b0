//! Shared constants for the example node library

/// Default configuration file name
pub const CONFIG_FILE: &str = "node-graph.json";

/// Display labels for the bundled namespaces
pub const NAMESPACE_LABELS: &[(&str, &str)] = &[
    ("nodes.basic", "Basic Nodes"),
    ("nodes.custom.ports", "Custom Port Nodes"),
    ("nodes.group", "Group Nodes"),
    ("nodes.widget", "Widget Nodes"),
    ("nodes.dyBasic", "Dynamic Nodes"),
];
