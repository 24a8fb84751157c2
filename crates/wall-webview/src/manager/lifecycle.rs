use std::sync::Arc;

use tracing::debug;
use wall_common::{Channel, SurfaceId, TileId};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use super::handle::SurfaceHandle;
use super::handlers;
use super::WebViewHost;

const BLANK_PAGE: &str = "<html><body style=\"margin:0;background:#000\"></body></html>";

impl<W: raw_window_handle::HasWindowHandle> WebViewHost<W> {
    /// Build a hidden, empty child WebView for a tile. It becomes visible
    /// once the app places it and gets content with the first `Load`.
    pub(super) fn build_surface(
        &mut self,
        tile: TileId,
        channel: &Channel,
    ) -> Result<(SurfaceId, SurfaceHandle), wry::Error> {
        let id = SurfaceId(self.next_surface);

        let mut builder = WebViewBuilder::new()
            .with_visible(false)
            .with_background_color((0, 0, 0, 255))
            .with_devtools(self.config.devtools)
            .with_autoplay(self.config.autoplay)
            .with_focused(false)
            .with_html(BLANK_PAGE);

        if let Some(ua) = &self.config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = handlers::attach_ipc_handler(builder, Arc::clone(&self.inbox), id);
        builder = handlers::attach_navigation_handler(builder, id);
        builder = handlers::attach_page_protocol(builder, Arc::clone(&self.pages));

        let webview = builder.build_as_child(self.window.as_ref())?;
        self.next_surface += 1;

        debug!(surface = %id, %tile, channel = %channel.id, "WebView created");

        Ok((
            id,
            SurfaceHandle {
                webview,
                tile,
                channel: channel.clone(),
                generation: 0,
                bounds: None,
                visible: false,
                adopted: false,
            },
        ))
    }
}
