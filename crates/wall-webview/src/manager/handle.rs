use wall_common::{Channel, Rect, TileId};
use wry::WebView;

use super::bounds::to_wry_rect;

/// One child WebView hosting a tile's player page.
pub struct SurfaceHandle {
    pub(super) webview: WebView,
    pub(super) tile: TileId,
    pub(super) channel: Channel,
    /// Generation of the page currently loaded, 0 before the first load.
    pub(super) generation: u64,
    pub(super) bounds: Option<Rect>,
    pub(super) visible: bool,
    /// Moved out of the wall window into a window of its own.
    pub(super) adopted: bool,
}

impl SurfaceHandle {
    pub fn tile(&self) -> TileId {
        self.tile
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Execute JavaScript in the page.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Move, resize, show or hide the surface. Unchanged values are not
    /// pushed to the platform again.
    pub fn place(&mut self, rect: Rect, visible: bool) -> Result<(), wry::Error> {
        if self.bounds != Some(rect) {
            self.webview.set_bounds(to_wry_rect(&rect))?;
            self.bounds = Some(rect);
        }
        if self.visible != visible {
            self.webview.set_visible(visible)?;
            self.visible = visible;
        }
        Ok(())
    }

    /// Return keyboard focus to the parent window.
    pub fn focus_parent(&self) -> Result<(), wry::Error> {
        self.webview.focus_parent()
    }

    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }
}
