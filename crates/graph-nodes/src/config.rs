//! Configuration file storage
//!
//! Reads and writes [`GraphConfig`] as JSON. A missing file is not an error;
//! the example defaults are used instead.

use std::fs;
use std::path::Path;

use node_graph::GraphConfig;

use crate::constants::NAMESPACE_LABELS;

/// Configuration used when no file exists
pub fn default_config() -> GraphConfig {
    NAMESPACE_LABELS.iter().fold(
        GraphConfig {
            register_builtins: true,
            ..GraphConfig::default()
        },
        |config, (namespace, label)| config.with_namespace_label(*namespace, *label),
    )
}

/// Load configuration from disk
pub fn load_config(path: &Path) -> Result<GraphConfig, ConfigError> {
    if !path.exists() {
        log::debug!("No config at {:?}, using defaults", path);
        return Ok(default_config());
    }

    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(ConfigError::Parse)
}

/// Save configuration to disk
pub fn save_config(config: &GraphConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    fs::write(path, contents)?;

    log::info!("Configuration saved to {:?}", path);
    Ok(())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(serde_json::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CONFIG_FILE;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, default_config());
        assert!(config.register_builtins);
        assert_eq!(config.namespace_labels["nodes.widget"], "Widget Nodes");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = GraphConfig {
            name: "saved".to_string(),
            ..default_config()
        };

        save_config(&config, &path).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn test_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
