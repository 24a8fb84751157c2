//! NewsWallApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::watch;
use winit::window::Window;

use wall_common::{EventBus, NotificationQueue};
use wall_config::WallConfig;
use wall_core::{LayoutEngine, StaticChannelSource, Wall};
use wall_webview::WebViewHost;

use crate::input::KeybindRegistry;

use super::config_reload::layout_engine;
use super::floating::FloatingWindows;

pub(super) type AppWall = Wall<WebViewHost<Window>, StaticChannelSource>;

/// Top-level application state.
pub struct NewsWallApp {
    pub(super) config: WallConfig,
    pub(super) config_path: PathBuf,
    pub(super) registry: KeybindRegistry,
    pub(super) event_bus: EventBus,
    pub(super) notifications: NotificationQueue,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) floats: FloatingWindows,
    pub(super) layout: LayoutEngine,
    pub(super) last_title: String,

    // The wall exists once the window does
    pub(super) wall: Option<AppWall>,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,
    pub(super) cursor_pos: (f64, f64),

    // Live config reload
    pub(super) config_rx: Option<watch::Receiver<WallConfig>>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    pub(super) should_exit: bool,
    pub(super) shut_down: bool,
}

impl NewsWallApp {
    pub fn new(config: WallConfig, registry: KeybindRegistry, config_path: PathBuf) -> Self {
        let layout = layout_engine(&config.wall);
        Self {
            config,
            config_path,
            registry,
            event_bus: EventBus::new(256),
            notifications: NotificationQueue::new(16),
            window: None,
            floats: FloatingWindows::default(),
            layout,
            last_title: String::new(),
            wall: None,
            modifiers: winit::keyboard::ModifiersState::empty(),
            cursor_pos: (0.0, 0.0),
            config_rx: None,
            tokio_runtime: None,
            should_exit: false,
            shut_down: false,
        }
    }

    /// Follow a [`wall_config::ReloadManager`] channel. The runtime hosts the
    /// watcher tasks and is shut down with the app.
    pub fn with_config_reload(
        mut self,
        config_rx: watch::Receiver<WallConfig>,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        self.config_rx = Some(config_rx);
        self.tokio_runtime = Some(runtime);
        self
    }
}
