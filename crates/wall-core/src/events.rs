//! Observable side effects of the wall, for presentation layers.
//!
//! None of these are needed for correctness; they feed spinners, the stats
//! overlay, the window title and the application event bus.

use wall_common::{ChannelId, DetachError, FloatId, TileId};

use crate::wall::PresentationMode;

#[derive(Debug, Clone, PartialEq)]
pub enum WallEvent {
    TileReady {
        tile: TileId,
        channel: ChannelId,
    },
    TileStats {
        tile: TileId,
        position: f64,
        buffered_fraction: f64,
    },
    /// `forced` is true when the watchdog triggered the reload.
    TileReloading {
        tile: TileId,
        channel: ChannelId,
        forced: bool,
    },
    ActiveChanged {
        tile: Option<TileId>,
        channel: Option<ChannelId>,
    },
    GlobalMuteChanged(bool),
    PageChanged {
        page: usize,
        page_count: usize,
    },
    ModeChanged(PresentationMode),
    FocusChanged {
        tile: Option<TileId>,
        channel: Option<ChannelId>,
    },
    Detached {
        tile: TileId,
        float: FloatId,
        channel: ChannelId,
    },
    Reattached {
        tile: TileId,
        channel: ChannelId,
    },
    DetachRefused {
        tile: TileId,
        reason: DetachError,
    },
}
