//! News wall configuration system.
//!
//! Provides TOML-based configuration with live reload, range normalisation,
//! and validation. All config sections use defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wall_config::{config_to_json, load_config};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod keybinds;
pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::{WallConfig, CONFIG_SCHEMA_VERSION};
pub use watcher::ConfigWatcher;

use std::path::Path;
use wall_common::ConfigError;

/// Load config from the platform default path, creating it if needed, and
/// validate the result.
pub fn load_config() -> Result<WallConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path, creating it if needed.
pub fn load_config_from(path: &Path) -> Result<WallConfig, ConfigError> {
    let config = toml_loader::load_or_create(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &WallConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&WallConfig::default());
        assert!(json.contains("\"grid\""));
        assert!(json.contains("\"wall\""));
        assert!(json.contains("\"keybinds\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"channels\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = WallConfig::default();
        let parsed: WallConfig = serde_json::from_str(&config_to_json(&config)).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn empty_channel_list_uses_seed() {
        let config = WallConfig::default();
        let channels = config.channel_list();
        assert!(!channels.is_empty());
        assert!(channels.iter().any(|c| c.title == "BBC News"));
    }

    #[test]
    fn load_config_from_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[keybinds]\nreload_active = \"Space\"\n").unwrap();
        assert!(matches!(
            load_config_from(&path),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
