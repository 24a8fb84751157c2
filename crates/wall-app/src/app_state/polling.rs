//! One pass of the coordinating loop, and scheduling of the next one.

use std::time::{Duration, Instant};

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use wall_common::TileId;
use wall_core::WallCommand;
use wall_webview::Gesture;

use super::core::NewsWallApp;

/// Longest sleep between passes, so player IPC is drained promptly.
pub(super) const MAX_IDLE: Duration = Duration::from_millis(100);

/// When to wake next: the wall's own deadline, capped by [`MAX_IDLE`].
pub(super) fn next_wake(deadline: Option<Instant>, now: Instant) -> Instant {
    let cap = now + MAX_IDLE;
    match deadline {
        Some(d) => d.clamp(now, cap),
        None => cap,
    }
}

impl NewsWallApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        self.poll_config_reload();
        if let Some(wall) = self.wall.as_mut() {
            wall.tick(now);
        }
        self.poll_gestures();
        self.refresh();
        self.open_floating_windows(event_loop);

        let deadline = self.wall.as_ref().and_then(|w| w.next_deadline());
        event_loop.set_control_flow(ControlFlow::WaitUntil(next_wake(deadline, Instant::now())));
    }

    /// Turn player gestures into wall commands. Keyboard focus goes back to
    /// the surface's window afterwards.
    fn poll_gestures(&mut self) {
        let Some(wall) = self.wall.as_mut() else {
            return;
        };
        for (surface, gesture) in wall.host_mut().drain_gestures() {
            let Some(tile) = wall.tile_for_surface(surface) else {
                continue;
            };
            let cmd = gesture_command(gesture, tile, wall.detached().is_detached(tile));
            if let Err(e) = wall.execute(cmd, Instant::now()) {
                tracing::debug!("gesture refused: {e}");
            }
            wall.host().focus_parent(surface);
        }
    }

    /// Bring the windows in line with the wall after anything changed.
    pub(super) fn refresh(&mut self) {
        self.forward_wall_events();
        self.release_floating_windows();
        self.sync_surface_bounds();
        self.sync_floating_bounds();
        self.update_window_title();
    }
}

/// Clicks select a tile. A double click toggles focus on a grid tile and
/// sends a detached tile back to the grid.
pub(super) fn gesture_command(gesture: Gesture, tile: TileId, detached: bool) -> WallCommand {
    match gesture {
        Gesture::Click => WallCommand::Activate(tile),
        Gesture::DoubleClick if detached => WallCommand::ToggleDetach(tile),
        Gesture::DoubleClick => WallCommand::ToggleFocus(tile),
    }
}
