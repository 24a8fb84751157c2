//! WebView surfaces for the news wall.
//!
//! Wraps the `wry` crate to provide:
//! - One child WebView per tile, hosting an embedded live player page
//! - A `newswall://` custom protocol serving the generated player pages
//! - Bidirectional IPC (commands in, readiness/stats/position/gestures out)
//! - A [`wall_core::SurfaceHost`] implementation driving all of the above

pub mod ipc;
pub mod manager;
pub mod player;

pub use ipc::{Gesture, PlayerMessage};
pub use manager::{WebViewConfig, WebViewHost};
pub use player::{resolve_source, PlayerSource};
