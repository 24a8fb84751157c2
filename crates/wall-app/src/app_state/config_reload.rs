//! Applying config changes: from the file watcher and from the reload key.

use std::time::Instant;

use wall_common::{Event, Notification};
use wall_config::schema::{GridSection, WallSection};
use wall_config::WallConfig;
use wall_core::{GridConfig, LayoutEngine};

use crate::input::KeybindRegistry;

use super::core::NewsWallApp;

pub(super) fn grid_config(grid: &GridSection) -> GridConfig {
    GridConfig::new(grid.rows, grid.cols)
        .with_show_native_controls(grid.show_native_controls)
        .with_health_poll_interval_secs(grid.health_poll_interval_secs)
        .with_stall_ticks_threshold(grid.stall_ticks_threshold)
}

pub(super) fn layout_engine(wall: &WallSection) -> LayoutEngine {
    LayoutEngine {
        gap: wall.gap,
        outer_padding: wall.outer_padding,
        focus_side_fraction: wall.focus_side_fraction,
        detached_width: f64::from(wall.detached_width),
        detached_height: f64::from(wall.detached_height),
        ..LayoutEngine::default()
    }
}

pub(super) fn max_detached(wall: &WallSection) -> usize {
    wall.max_detached.max(1) as usize
}

impl NewsWallApp {
    /// Pick up a config published by the reload manager, if any.
    pub(super) fn poll_config_reload(&mut self) {
        let Some(rx) = self.config_rx.as_mut() else {
            return;
        };
        match rx.has_changed() {
            Ok(true) => {}
            Ok(false) => return,
            Err(_) => {
                tracing::warn!("config reload channel closed");
                self.config_rx = None;
                return;
            }
        }
        let config = rx.borrow_and_update().clone();
        tracing::info!("applying reloaded config");
        self.apply_config(config);
    }

    /// Re-read the config file now, keeping the current config on failure.
    pub(super) fn reload_config_now(&mut self) {
        match wall_config::load_config_from(&self.config_path) {
            Ok(config) => self.apply_config(config),
            Err(e) => {
                tracing::warn!("config reload failed: {e}");
                self.notifications
                    .push(Notification::warning(format!("config reload failed: {e}")));
            }
        }
    }

    /// Swap in a new config.
    ///
    /// The grid section only reaches the wall when it changed in the file, so
    /// an unrelated edit does not undo a grow/shrink made from the keyboard.
    /// A changed channel list triggers a fresh reconciliation.
    pub(super) fn apply_config(&mut self, config: WallConfig) {
        let now = Instant::now();
        self.registry = KeybindRegistry::from_config(&config.keybinds);
        self.layout = layout_engine(&config.wall);

        if let Some(wall) = self.wall.as_mut() {
            wall.set_max_detached(max_detached(&config.wall), now);
            if config.grid != self.config.grid {
                wall.apply_config(grid_config(&config.grid), now);
            }
            let channels = config.channel_list();
            if channels != self.config.channel_list() {
                tracing::info!(count = channels.len(), "channel list changed");
                wall.set_channels(channels, now);
            }
        }

        self.config = config;
        self.event_bus.publish(Event::ConfigReloaded);
        self.notifications.push(Notification::info("config reloaded"));
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::core::test_support::app;
    use std::io::Write;

    #[test]
    fn grid_section_maps_to_grid_config() {
        let grid = GridSection {
            rows: 2,
            cols: 3,
            show_native_controls: true,
            health_poll_interval_secs: 2.0,
            stall_ticks_threshold: 5,
        };
        let config = grid_config(&grid);
        assert_eq!(config.rows(), 2);
        assert_eq!(config.cols(), 3);
        assert!(config.show_native_controls());
        assert_eq!(config.health_poll_interval().as_secs_f64(), 2.0);
        assert_eq!(config.stall_ticks_threshold(), 5);
    }

    #[test]
    fn wall_section_maps_to_layout() {
        let wall = WallSection {
            gap: 10,
            detached_width: 640,
            ..Default::default()
        };
        let layout = layout_engine(&wall);
        assert_eq!(layout.gap, 10);
        assert_eq!(layout.detached_width, 640.0);
        assert_eq!(layout.cascade_step, LayoutEngine::default().cascade_step);
    }

    #[test]
    fn max_detached_is_at_least_one() {
        let wall = WallSection {
            max_detached: 0,
            ..Default::default()
        };
        assert_eq!(max_detached(&wall), 1);
    }

    #[test]
    fn apply_config_without_window_swaps_state() {
        let mut app = app();
        let mut rx = app.event_bus.subscribe();
        let mut config = WallConfig::default();
        config.keybinds.quit = String::new();
        config.wall.gap = 12;

        app.apply_config(config);

        assert_eq!(app.registry.len(), 24);
        assert_eq!(app.layout.gap, 12);
        assert!(matches!(rx.try_recv(), Ok(Event::ConfigReloaded)));
    }

    #[test]
    fn manual_reload_failure_keeps_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[grid\nrows = ").unwrap();

        let mut app = app();
        app.config_path = path;
        app.reload_config_now();

        assert_eq!(app.config, WallConfig::default());
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn manual_reload_applies_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[grid]\nrows = 2\ncols = 2\n").unwrap();

        let mut app = app();
        app.config_path = path;
        app.reload_config_now();

        assert_eq!(app.config.grid.rows, 2);
        assert_eq!(app.config.grid.cols, 2);
    }

    #[tokio::test]
    async fn watched_config_is_applied_once() {
        let mut app = app();
        let (tx, rx) = tokio::sync::watch::channel(WallConfig::default());
        app.config_rx = Some(rx);

        app.poll_config_reload();
        assert!(app.notifications.is_empty());

        let mut next = WallConfig::default();
        next.wall.outer_padding = 20;
        tx.send(next).unwrap();

        app.poll_config_reload();
        assert_eq!(app.layout.outer_padding, 20);
        assert_eq!(app.notifications.len(), 1);

        app.poll_config_reload();
        assert_eq!(app.notifications.len(), 1);
    }
}
