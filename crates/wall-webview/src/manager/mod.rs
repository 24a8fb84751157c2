//! WebView lifecycle management.
//!
//! `WebViewHost` creates, tracks, and destroys one child `wry::WebView` per
//! tile and implements [`wall_core::SurfaceHost`] on top of them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;
use wall_common::{Rect, SurfaceId};
use wry::raw_window_handle;

use crate::ipc::Gesture;

mod bounds;
mod handle;
pub mod handlers;
mod host;
mod lifecycle;
mod reparent;
mod types;

pub use bounds::to_wry_rect;
pub use handle::SurfaceHandle;
pub use types::WebViewConfig;

use handlers::{Inbox, Pages};

/// Owns every player WebView, all children of one parent window.
pub struct WebViewHost<W: raw_window_handle::HasWindowHandle> {
    window: Arc<W>,
    config: WebViewConfig,
    surfaces: HashMap<SurfaceId, SurfaceHandle>,
    /// Page served for each surface by the custom protocol.
    pages: Pages,
    /// Raw IPC bodies, pushed from WebView callbacks.
    inbox: Inbox,
    gestures: Vec<(SurfaceId, Gesture)>,
    next_surface: u64,
}

impl<W: raw_window_handle::HasWindowHandle> WebViewHost<W> {
    pub fn new(window: Arc<W>, config: WebViewConfig) -> Self {
        Self {
            window,
            config,
            surfaces: HashMap::new(),
            pages: Arc::new(Mutex::new(HashMap::new())),
            inbox: Arc::new(Mutex::new(Vec::new())),
            gestures: Vec::new(),
            next_surface: 1,
        }
    }

    pub fn surface(&self, id: SurfaceId) -> Option<&SurfaceHandle> {
        self.surfaces.get(&id)
    }

    /// How many surfaces are alive.
    pub fn count(&self) -> usize {
        self.surfaces.len()
    }

    /// Apply a layout placement to one surface.
    pub fn place(&mut self, id: SurfaceId, rect: Rect, visible: bool) {
        if let Some(handle) = self.surfaces.get_mut(&id) {
            if let Err(e) = handle.place(rect, visible) {
                debug!(surface = %id, "set_bounds failed: {e}");
            }
        }
    }

    /// Hand keyboard focus back to the window after a click on a surface.
    pub fn focus_parent(&self, id: SurfaceId) {
        if let Some(handle) = self.surfaces.get(&id) {
            if let Err(e) = handle.focus_parent() {
                debug!(surface = %id, "focus_parent failed: {e}");
            }
        }
    }

    /// Gestures collected by the last `drain_events` calls.
    pub fn drain_gestures(&mut self) -> Vec<(SurfaceId, Gesture)> {
        std::mem::take(&mut self.gestures)
    }

    /// Destroy every surface. Used during shutdown.
    pub fn destroy_all(&mut self) {
        let ids: Vec<SurfaceId> = self.surfaces.keys().copied().collect();
        for id in ids {
            self.remove(id);
        }
    }

    fn remove(&mut self, id: SurfaceId) -> bool {
        if let Ok(mut pages) = self.pages.lock() {
            pages.remove(&id);
        }
        if self.surfaces.remove(&id).is_some() {
            debug!(surface = %id, "WebView destroyed");
            true
        } else {
            false
        }
    }
}
