//! Window creation and wall start-up.

use std::sync::Arc;
use std::time::Instant;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use wall_core::{StaticChannelSource, Wall};
use wall_webview::{WebViewConfig, WebViewHost};

use super::config_reload::{grid_config, max_detached};
use super::core::NewsWallApp;

impl NewsWallApp {
    /// Create the window and start the wall in it.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title("News Wall")
            .with_inner_size(winit::dpi::LogicalSize::new(1600.0, 900.0));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let host = WebViewHost::new(window.clone(), WebViewConfig::default());
        let source = StaticChannelSource::new(self.config.channel_list());
        let mut wall = Wall::new(host, source, grid_config(&self.config.grid))
            .with_max_detached(max_detached(&self.config.wall));

        tracing::info!(
            rows = wall.config().rows(),
            cols = wall.config().cols(),
            channels = wall.channels().len(),
            "starting wall"
        );
        wall.start(Instant::now());

        self.window = Some(window);
        self.wall = Some(wall);
        true
    }
}
