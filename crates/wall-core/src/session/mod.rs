//! One live embedded stream: its load/play/mute commands and a health
//! watchdog that reloads the surface when playback stops advancing.

mod lifecycle;
mod types;
mod watchdog;


use std::time::Instant;

use wall_common::{Channel, SurfaceId, TileId};

use crate::config::WatchdogSettings;

pub use types::{PollOutcome, TileState};

/// Timer state for the health watchdog.
#[derive(Debug, Clone, Default)]
struct PollTimer {
    next_due: Option<Instant>,
    /// Sequence number of the query still waiting for an answer.
    awaiting: Option<u64>,
    seq: u64,
}

/// A single live tile bound to one channel.
///
/// A session owns at most one surface handle. Every load bumps `generation`;
/// events carrying an older generation are dropped, so late callbacks from a
/// replaced page can never act on the new one.
#[derive(Debug)]
pub struct TileSession {
    id: TileId,
    channel: Channel,
    state: TileState,
    surface: Option<SurfaceId>,
    generation: u64,
    last_observed_position: f64,
    stall_tick_count: u32,
    settings: WatchdogSettings,
    timer: PollTimer,
    muted: bool,
    paused: bool,
    load_count: u64,
    forced_reloads: u64,
    last_position: Option<f64>,
    buffered_fraction: Option<f64>,
}

impl TileSession {
    pub fn new(id: TileId, channel: Channel, settings: WatchdogSettings) -> Self {
        Self {
            id,
            channel,
            state: TileState::Loading,
            surface: None,
            generation: 0,
            last_observed_position: -1.0,
            stall_tick_count: 0,
            settings,
            timer: PollTimer::default(),
            muted: true,
            paused: false,
            load_count: 0,
            forced_reloads: 0,
            last_position: None,
            buffered_fraction: None,
        }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn state(&self) -> TileState {
        self.state
    }

    pub fn is_live(&self) -> bool {
        self.state.is_live()
    }

    pub fn surface(&self) -> Option<SurfaceId> {
        self.surface
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn stall_tick_count(&self) -> u32 {
        self.stall_tick_count
    }

    pub fn last_observed_position(&self) -> f64 {
        self.last_observed_position
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of `load()` calls over the session's life, reloads included.
    pub fn load_count(&self) -> u64 {
        self.load_count
    }

    pub fn forced_reloads(&self) -> u64 {
        self.forced_reloads
    }

    /// Latest informational stats pushed by the player.
    pub fn stats(&self) -> (Option<f64>, Option<f64>) {
        (self.last_position, self.buffered_fraction)
    }

    pub fn next_poll_due(&self) -> Option<Instant> {
        self.timer.next_due
    }

    pub fn is_poll_due(&self, now: Instant) -> bool {
        self.is_live() && self.timer.next_due.is_some_and(|due| due <= now)
    }

    /// Take new watchdog settings. The poll timer restarts from `now`.
    pub fn reconfigure(&mut self, settings: WatchdogSettings, now: Instant) {
        self.settings = settings;
        if self.is_live() {
            self.timer.next_due = Some(now + settings.poll_interval);
        }
    }

    pub fn settings(&self) -> WatchdogSettings {
        self.settings
    }
}
