//! Core TOML config loading: read from path or platform default.

use crate::schema::WallConfig;
use crate::validation;
use std::path::Path;
use tracing::{info, warn};
use wall_common::ConfigError;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their defaults and out-of-range numbers are clamped.
/// Validation problems are logged; callers that must reject them run
/// [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<WallConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let mut config: WallConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validation::normalize(&mut config);

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `path`, writing the default template there first if the
/// file does not exist yet.
pub fn load_or_create(path: &Path) -> Result<WallConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(WallConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/newswall/config.toml`
/// On Linux: `~/.config/newswall/config.toml`
pub fn load_default() -> Result<WallConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}
