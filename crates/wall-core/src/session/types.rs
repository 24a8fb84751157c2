use serde::Serialize;

/// Lifecycle of one tile session.
///
/// `Loading -> Ready -> Playing` on the ready signal, `Playing <-> Stalled`
/// on health samples, `Reloading -> Loading` on a forced reload, and
/// `Disposed` from anywhere. `Disposed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TileState {
    Loading,
    Ready,
    Playing,
    Stalled,
    Reloading,
    Disposed,
}

impl TileState {
    pub fn is_live(self) -> bool {
        self != TileState::Disposed
    }
}

/// What a health sample or poll tick did to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Nothing was due, or the input was stale and dropped.
    Ignored,
    /// A query went out; the answer is pending.
    Queried,
    /// Playback advanced; the stall counter was reset.
    Healthy,
    /// The sample counted as a stall tick below the threshold.
    Stalled,
    /// The threshold was reached and the session reloaded itself.
    Reloaded,
}
