//! Detached tiles in windows of their own.
//!
//! Each floating surface gets a movable, resizable, always-on-top window and
//! the tile's live WebView is moved into it. Closing that window is the
//! floating surface's close action; a double click inside it returns the
//! tile to the grid. Where the platform cannot move a WebView between
//! windows, detached tiles stay drawn inside the wall window.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId, WindowLevel};

use wall_common::{FloatId, Notification, Rect, SurfaceId, TileId};
use wall_core::WallCommand;

use super::core::{AppWall, NewsWallApp};

pub(super) struct FloatWindow {
    pub(super) window: Arc<Window>,
    pub(super) tile: TileId,
    pub(super) surface: SurfaceId,
}

impl FloatWindow {
    /// The window's content area in its own logical coordinates.
    pub(super) fn viewport(&self) -> Rect {
        let size = self
            .window
            .inner_size()
            .to_logical::<f64>(self.window.scale_factor());
        Rect::new(0.0, 0.0, size.width, size.height)
    }
}

/// Open floating windows, keyed by the wall's floating surface id.
#[derive(Default)]
pub(super) struct FloatingWindows {
    windows: HashMap<FloatId, FloatWindow>,
    /// Set after the platform refused to move a WebView. Detached tiles
    /// stay inside the wall window from then on.
    unsupported: bool,
}

impl FloatingWindows {
    pub(super) fn is_unsupported(&self) -> bool {
        self.unsupported
    }

    pub(super) fn mark_unsupported(&mut self) {
        self.unsupported = true;
    }

    pub(super) fn get(&self, float: FloatId) -> Option<&FloatWindow> {
        self.windows.get(&float)
    }

    pub(super) fn by_window(&self, id: WindowId) -> Option<FloatId> {
        self.windows
            .iter()
            .find(|(_, w)| w.window.id() == id)
            .map(|(float, _)| *float)
    }

    /// Tiles whose surface is shown in a floating window.
    pub(super) fn tiles(&self) -> Vec<TileId> {
        self.windows.values().map(|w| w.tile).collect()
    }

    pub(super) fn hosts_tile(&self, tile: TileId) -> bool {
        self.windows.values().any(|w| w.tile == tile)
    }

    pub(super) fn iter(&self) -> impl Iterator<Item = &FloatWindow> {
        self.windows.values()
    }

    pub(super) fn insert(&mut self, float: FloatId, window: FloatWindow) {
        self.windows.insert(float, window);
    }

    pub(super) fn remove(&mut self, float: FloatId) -> Option<FloatWindow> {
        self.windows.remove(&float)
    }

    /// Windows whose floating surface the wall no longer knows about, or
    /// whose tile is now backed by a different surface.
    pub(super) fn stale(&self, wall: Option<&AppWall>) -> Vec<FloatId> {
        self.windows
            .iter()
            .filter(|(float, w)| {
                let Some(wall) = wall else {
                    return true;
                };
                let live = wall.detached().tile_of(**float) == Some(w.tile);
                let same_surface =
                    wall.session(w.tile).and_then(|s| s.surface()) == Some(w.surface);
                !(live && same_surface)
            })
            .map(|(float, _)| *float)
            .collect()
    }

    pub(super) fn clear(&mut self) {
        self.windows.clear();
    }
}

impl NewsWallApp {
    /// Give every detached tile that lacks one a window, and move its
    /// WebView in. Needs the event loop, so it runs once per loop pass.
    pub(super) fn open_floating_windows(&mut self, event_loop: &ActiveEventLoop) {
        if self.floats.is_unsupported() {
            return;
        }
        let Some(wall) = self.wall.as_mut() else {
            return;
        };

        let pending: Vec<(FloatId, TileId, SurfaceId, String)> = wall
            .detached()
            .surfaces()
            .iter()
            .filter(|d| self.floats.get(d.float).is_none())
            .filter_map(|d| {
                let session = wall.session(d.tile)?;
                let surface = session.surface()?;
                Some((d.float, d.tile, surface, session.channel().title.clone()))
            })
            .collect();

        for (float, tile, surface, title) in pending {
            let attrs = WindowAttributes::default()
                .with_title(title)
                .with_inner_size(LogicalSize::new(
                    self.layout.detached_width,
                    self.layout.detached_height,
                ))
                .with_resizable(true)
                .with_window_level(WindowLevel::AlwaysOnTop);

            let window = match event_loop.create_window(attrs) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    tracing::warn!(%float, "failed to create floating window: {e}");
                    self.floats.mark_unsupported();
                    return;
                }
            };

            if let Err(e) = wall.host_mut().adopt(surface, window.as_ref()) {
                tracing::warn!(
                    %float,
                    "cannot move WebViews between windows here, keeping detached tiles in the wall: {e}"
                );
                self.floats.mark_unsupported();
                return;
            }

            tracing::info!(%float, %tile, "floating window opened");
            let entry = FloatWindow {
                window,
                tile,
                surface,
            };
            wall.host_mut().place(surface, entry.viewport(), true);
            self.floats.insert(float, entry);
        }
    }

    /// Close windows the wall no longer needs, bringing their WebView back
    /// into the wall window first.
    pub(super) fn release_floating_windows(&mut self) {
        for float in self.floats.stale(self.wall.as_ref()) {
            let Some(entry) = self.floats.remove(float) else {
                continue;
            };
            if let Some(wall) = self.wall.as_mut() {
                if let Err(e) = wall.host_mut().restore(entry.surface) {
                    tracing::warn!(%float, surface = %entry.surface, "failed to return WebView: {e}");
                }
            }
            tracing::info!(%float, tile = %entry.tile, "floating window closed");
        }
    }

    /// The user closed a floating window: pause, close, unregister.
    pub(super) fn close_floating_window(&mut self, float: FloatId) {
        let Some(tile) = self.floats.get(float).map(|w| w.tile) else {
            return;
        };
        let Some(wall) = self.wall.as_mut() else {
            return;
        };
        match wall.execute(WallCommand::CloseDetached(tile), Instant::now()) {
            Ok(()) => {
                self.notifications
                    .push(Notification::info("floating tile closed"));
            }
            Err(e) => tracing::debug!(%float, "close refused: {e}"),
        }
        self.refresh();
    }

    /// Fit a floating window's WebView to the window.
    pub(super) fn sync_floating_bounds(&mut self) {
        let Some(wall) = self.wall.as_mut() else {
            return;
        };
        for entry in self.floats.iter() {
            wall.host_mut().place(entry.surface, entry.viewport(), true);
        }
    }
}
