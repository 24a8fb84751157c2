//! Graceful shutdown: dispose sessions, destroy webviews, stop the watcher.

use std::time::Duration;

use wall_common::Event;

use super::core::NewsWallApp;

impl NewsWallApp {
    /// Perform graceful shutdown of all subsystems. Safe to call twice.
    ///
    /// Order matters:
    /// 1. Dispose every tile session (pauses and destroys its surface)
    /// 2. Destroy any webview the wall no longer tracks, then close the
    ///    floating windows that hosted some of them
    /// 3. Stop following config reloads and shut down the tokio runtime
    /// 4. Drop the window last, after its child webviews
    pub(super) fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        tracing::info!("Initiating graceful shutdown");

        if let Some(mut wall) = self.wall.take() {
            wall.shutdown();
            wall.host_mut().destroy_all();
        }
        self.floats.clear();

        self.event_bus.publish(Event::Shutdown);

        self.config_rx = None;
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        self.window = None;

        tracing::info!("Graceful shutdown complete");
    }
}
