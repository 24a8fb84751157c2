use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wall_common::SurfaceId;
use wry::http::{Request, Response};
use wry::WebViewBuilder;

/// Custom protocol serving the generated player pages.
pub const PROTOCOL: &str = "newswall";

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// Allowed URL prefixes for top-level navigation inside a surface.
///
/// - `newswall://` for the player pages
/// - `about:blank` for a surface that has not loaded yet
/// - the player origins, in case a page navigates to the embed itself
pub const ALLOWED_NAV_PREFIXES: &[&str] = &[
    "newswall://",
    // On Windows, WebView2 rewrites custom protocols: newswall://localhost/… → http://newswall.localhost/…
    "http://newswall.localhost",
    "about:blank",
    "https://www.youtube.com/embed/",
    "https://www.youtube-nocookie.com/embed/",
];

/// Check whether a URL is allowed by the navigation allowlist.
pub fn is_navigation_allowed(url: &str) -> bool {
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

/// URL of the player page for one load of a surface. The generation only
/// makes successive loads distinct; the page content comes from the page map.
pub fn player_url(surface: SurfaceId, generation: u64) -> String {
    let base = if cfg!(windows) {
        "http://newswall.localhost"
    } else {
        "newswall://localhost"
    };
    format!("{base}/player/{}?g={generation}", surface.0)
}

/// The surface a protocol request asks for.
pub fn surface_from_uri(uri: &str) -> Option<SurfaceId> {
    let path = uri
        .strip_prefix("newswall://localhost/")
        .or_else(|| uri.strip_prefix("http://newswall.localhost/"))
        .or_else(|| uri.strip_prefix("newswall:///"))
        .or_else(|| uri.strip_prefix("newswall://"))?;
    let path = path.split(['?', '#']).next()?;
    let id = path.strip_prefix("player/")?;
    id.parse().ok().map(SurfaceId)
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

pub(super) type Inbox = Arc<Mutex<Vec<(SurfaceId, String)>>>;
pub(super) type Pages = Arc<Mutex<HashMap<SurfaceId, String>>>;

pub(super) fn attach_ipc_handler<'a>(
    builder: WebViewBuilder<'a>,
    inbox: Inbox,
    surface: SurfaceId,
) -> WebViewBuilder<'a> {
    builder.with_ipc_handler(move |request: Request<String>| {
        let body = request.into_body();
        if let Ok(mut pending) = inbox.lock() {
            pending.push((surface, body));
        }
    })
}

pub(super) fn attach_navigation_handler(
    builder: WebViewBuilder<'_>,
    surface: SurfaceId,
) -> WebViewBuilder<'_> {
    builder.with_navigation_handler(move |url| {
        if !is_navigation_allowed(&url) {
            warn!(%surface, url = %url, "navigation blocked: URL not in allowlist");
            return false;
        }
        debug!(%surface, url = %url, "navigation allowed");
        true
    })
}

pub(super) fn attach_page_protocol(builder: WebViewBuilder<'_>, pages: Pages) -> WebViewBuilder<'_> {
    builder.with_custom_protocol(PROTOCOL.to_string(), move |_wv_id, request| {
        let uri = request.uri().to_string();
        let page = surface_from_uri(&uri).and_then(|surface| {
            pages
                .lock()
                .ok()
                .and_then(|pages| pages.get(&surface).cloned())
        });

        match page {
            Some(html) => html_response(html),
            None => {
                warn!(uri = %uri, "custom protocol: page not found");
                Response::builder()
                    .status(404)
                    .body(Cow::Borrowed(&b"Not Found"[..]))
                    .unwrap_or_else(|_| Response::new(Cow::Borrowed(&b""[..])))
            }
        }
    })
}

fn html_response(html: String) -> Response<Cow<'static, [u8]>> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Cow::Owned(html.into_bytes()))
        .unwrap_or_else(|_| Response::new(Cow::Borrowed(&b""[..])))
}
