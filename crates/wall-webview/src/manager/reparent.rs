//! Moving a live surface between native windows.
//!
//! The page keeps running across the move, so a tile can leave the wall for
//! its own window and come back without reloading.

use tracing::debug;
use wall_common::SurfaceId;
use wry::raw_window_handle::HasWindowHandle;
#[cfg(any(target_os = "windows", target_os = "macos"))]
use wry::raw_window_handle::RawWindowHandle;
use wry::WebView;

use super::WebViewHost;

impl<W: HasWindowHandle> WebViewHost<W> {
    /// Move a surface into `target`. Fails with
    /// [`wry::Error::UnsupportedWindowHandle`] where the platform cannot
    /// move a child WebView between windows; the surface stays put then.
    pub fn adopt<T: HasWindowHandle>(&mut self, id: SurfaceId, target: &T) -> Result<(), wry::Error> {
        let Some(handle) = self.surfaces.get_mut(&id) else {
            return Err(wry::Error::UnsupportedWindowHandle);
        };
        reparent(&handle.webview, target)?;
        handle.adopted = true;
        handle.bounds = None;
        debug!(surface = %id, "surface moved to its own window");
        Ok(())
    }

    /// Bring an adopted surface back into the wall window. Surfaces that
    /// were never adopted are left alone.
    pub fn restore(&mut self, id: SurfaceId) -> Result<(), wry::Error> {
        let Some(handle) = self.surfaces.get_mut(&id) else {
            return Ok(());
        };
        if !handle.adopted {
            return Ok(());
        }
        reparent(&handle.webview, self.window.as_ref())?;
        handle.adopted = false;
        handle.bounds = None;
        debug!(surface = %id, "surface returned to the wall window");
        Ok(())
    }

    pub fn is_adopted(&self, id: SurfaceId) -> bool {
        self.surfaces.get(&id).is_some_and(|h| h.adopted)
    }
}

#[cfg(target_os = "windows")]
fn reparent<T: HasWindowHandle>(webview: &WebView, target: &T) -> Result<(), wry::Error> {
    use wry::WebViewExtWindows;

    match target.window_handle()?.as_raw() {
        RawWindowHandle::Win32(h) => webview.reparent(h.hwnd.get()),
        _ => Err(wry::Error::UnsupportedWindowHandle),
    }
}

#[cfg(target_os = "macos")]
fn reparent<T: HasWindowHandle>(webview: &WebView, target: &T) -> Result<(), wry::Error> {
    use objc2::rc::Retained;
    use objc2_app_kit::NSView;
    use wry::WebViewExtMacOS;

    let RawWindowHandle::AppKit(h) = target.window_handle()?.as_raw() else {
        return Err(wry::Error::UnsupportedWindowHandle);
    };
    // SAFETY: winit hands out the content view of a live window, and we only
    // read it on the main thread that owns it.
    let view: &NSView = unsafe { h.ns_view.cast::<NSView>().as_ref() };
    let Some(window) = view.window() else {
        return Err(wry::Error::UnsupportedWindowHandle);
    };
    webview.reparent(Retained::as_ptr(&window).cast_mut())
}

/// Child WebViews on GTK live in a container wry creates privately, so
/// there is nothing to move them into.
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn reparent<T: HasWindowHandle>(_webview: &WebView, target: &T) -> Result<(), wry::Error> {
    let _ = target.window_handle()?;
    Err(wry::Error::UnsupportedWindowHandle)
}

