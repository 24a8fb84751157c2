//! Core reload manager implementation.

use crate::schema::WallConfig;
use crate::watcher::ConfigWatcher;
use std::path::{Path, PathBuf};
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};
use wall_common::ConfigError;

/// Manages live config reloading.
///
/// Watches the config file for changes and publishes new configs
/// via a [`tokio::sync::watch`] channel. A reload that fails to parse or
/// validate is logged and the previous config stays current.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    /// Load the initial config from the given path and start watching for changes.
    ///
    /// A missing file is created from the default template. If the initial
    /// load fails, defaults are used and the watcher still starts, so fixing
    /// the file takes effect without a restart.
    pub async fn start(config_path: PathBuf) -> (WallConfig, watch::Receiver<WallConfig>) {
        let initial_config = match crate::load_config_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load config: {e}, using defaults");
                WallConfig::default()
            }
        };

        let (config_tx, config_rx) = watch::channel(initial_config.clone());

        let manager = ReloadManager { config_path };
        tokio::spawn(async move {
            manager.run_watch_loop(config_tx).await;
        });

        (initial_config, config_rx)
    }

    async fn run_watch_loop(&self, config_tx: watch::Sender<WallConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);

        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) => {
                    info!("reloading config from {}", self.config_path.display());
                    match reload_config(&self.config_path) {
                        Ok(config) => {
                            let changed = config_tx.send_if_modified(|current| {
                                if *current == config {
                                    false
                                } else {
                                    *current = config;
                                    true
                                }
                            });
                            if !changed {
                                info!("config unchanged after reload");
                            }
                            if config_tx.is_closed() {
                                info!("all config receivers dropped, stopping reload manager");
                                break;
                            }
                        }
                        Err(e) => {
                            warn!("config reload failed, keeping previous config: {e}");
                        }
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("config watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("config watcher channel closed");
                    break;
                }
            }
        }
    }
}

/// Reload config from disk. Unlike the initial load, a missing file is an error.
pub(crate) fn reload_config(path: &Path) -> Result<WallConfig, ConfigError> {
    let config = crate::toml_loader::load_from_path(path)?;
    crate::validation::validate(&config)?;
    Ok(config)
}
