//! Boundary to the embedded content surfaces that actually render streams.
//!
//! The core never blocks on a surface. Commands are fire-and-forget, and
//! everything the surface reports comes back later through
//! [`SurfaceHost::drain_events`], tagged with the generation that was current
//! when the work was issued.

use wall_common::{Channel, SurfaceError, SurfaceId, TileId};

/// A command sent to one embedded surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceCommand {
    /// Fetch and render the channel with autoplay-muted semantics. Used for
    /// the first load and for every reload; `generation` tags all events the
    /// resulting page produces.
    Load { generation: u64, show_controls: bool },
    Play,
    Pause,
    Mute(bool),
}

/// Identifies one position query so its reply can be matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollTicket {
    pub generation: u64,
    pub seq: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEventKind {
    /// The player finished loading and started (muted) playback.
    Ready,
    /// Periodic informational stats pushed by the player.
    Stats { position: f64, buffered_fraction: f64 },
    /// Reply to a position query. `None` or a negative value means the
    /// player could not report a position.
    Position { seq: u64, position: Option<f64> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceEvent {
    pub surface: SurfaceId,
    pub generation: u64,
    pub kind: SurfaceEventKind,
}

/// The rendering collaborator that owns the real embedded surfaces.
///
/// Implementations queue every asynchronous result and hand them over in
/// [`drain_events`](SurfaceHost::drain_events), which the wall calls from its
/// coordinating thread.
pub trait SurfaceHost {
    /// Create an (empty) surface for a tile. Content arrives with `Load`.
    fn create(&mut self, tile: TileId, channel: &Channel) -> Result<SurfaceId, SurfaceError>;

    /// Release a surface. Unknown handles are ignored.
    fn destroy(&mut self, surface: SurfaceId);

    fn command(&mut self, surface: SurfaceId, command: SurfaceCommand)
        -> Result<(), SurfaceError>;

    /// Ask for the current playback position. The answer arrives later as a
    /// [`SurfaceEventKind::Position`] carrying `ticket.seq`.
    fn query_position(&mut self, surface: SurfaceId, ticket: PollTicket)
        -> Result<(), SurfaceError>;

    fn drain_events(&mut self) -> Vec<SurfaceEvent>;
}
