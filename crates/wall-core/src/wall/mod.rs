//! The wall orchestrator: owns every live tile session and applies page,
//! filter, config, activation, focus and detach operations to them.

mod control;
mod execute;
mod presentation;
mod pump;
mod rebuild;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use wall_common::{Channel, ChannelId, GroupFilter, SurfaceId, TileId};

use crate::activation::{ActivationCoordinator, Sessions};
use crate::config::{GridConfig, MAX_DETACHED};
use crate::detach::DetachController;
use crate::events::WallEvent;
use crate::focus::FocusController;
use crate::grid::GridLayout;
use crate::session::TileSession;
use crate::source::{ChannelSource, StaticChannelSource};
use crate::surface::SurfaceHost;

pub use presentation::{FocusView, Presentation, PresentationMode, SurfacePlacement};

/// A wall of live tiles.
///
/// All methods run on one coordinating thread. Surface callbacks are only
/// applied from [`Wall::tick`], so a rebuild always completes before any
/// callback sees the new session map.
pub struct Wall<H: SurfaceHost, S: ChannelSource> {
    host: H,
    source: S,
    config: GridConfig,
    filter: GroupFilter,
    /// Snapshot of the filtered channel list from the last rebuild.
    channels: Vec<Channel>,
    grid: GridLayout,
    sessions: Sessions,
    by_channel: HashMap<ChannelId, TileId>,
    activation: ActivationCoordinator,
    focus: FocusController,
    detach: DetachController,
    events: Vec<WallEvent>,
    next_tile: u64,
    started: bool,
}

impl<H: SurfaceHost, S: ChannelSource> Wall<H, S> {
    pub fn new(host: H, source: S, config: GridConfig) -> Self {
        let grid = GridLayout::new(config.rows(), config.cols());
        Self {
            host,
            source,
            config,
            filter: GroupFilter::All,
            channels: Vec::new(),
            grid,
            sessions: Sessions::new(),
            by_channel: HashMap::new(),
            activation: ActivationCoordinator::new(),
            focus: FocusController::new(),
            detach: DetachController::new(MAX_DETACHED),
            events: Vec::new(),
            next_tile: 0,
            started: false,
        }
    }

    /// Cap on simultaneously detached tiles. Never below one.
    pub fn with_max_detached(mut self, max: usize) -> Self {
        self.detach.set_max(max.max(1));
        self
    }

    /// Change the detach cap. Lowering it below the current count returns
    /// the most recently detached tiles to the grid until the cap holds.
    pub fn set_max_detached(&mut self, max: usize, now: std::time::Instant) {
        let max = max.max(1);
        self.detach.set_max(max);
        while self.detach.count() > max {
            let Some(newest) = self.detach.surfaces().last().map(|d| d.tile) else {
                break;
            };
            tracing::info!(tile = %newest, max, "detach cap lowered, returning tile to grid");
            if self.reattach(newest, now).is_err() {
                break;
            }
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn filter(&self) -> &GroupFilter {
        &self.filter
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn grid(&self) -> &GridLayout {
        &self.grid
    }

    pub fn page(&self) -> usize {
        self.grid.page()
    }

    pub fn page_count(&self) -> usize {
        self.grid.page_count()
    }

    pub fn active(&self) -> Option<TileId> {
        self.activation.active()
    }

    pub fn global_mute(&self) -> bool {
        self.activation.global_mute()
    }

    pub fn focused(&self) -> Option<TileId> {
        self.focus.focused()
    }

    pub fn detached(&self) -> &DetachController {
        &self.detach
    }

    pub fn session(&self, tile: TileId) -> Option<&TileSession> {
        self.sessions.get(&tile)
    }

    pub fn sessions(&self) -> impl Iterator<Item = &TileSession> {
        self.sessions.values()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn tile_for_channel(&self, channel: &ChannelId) -> Option<TileId> {
        self.by_channel.get(channel).copied()
    }

    pub fn tile_for_surface(&self, surface: SurfaceId) -> Option<TileId> {
        self.sessions
            .values()
            .find(|s| s.surface() == Some(surface))
            .map(TileSession::id)
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Take the events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<WallEvent> {
        std::mem::take(&mut self.events)
    }

    fn channel_of(&self, tile: TileId) -> Option<ChannelId> {
        self.sessions.get(&tile).map(|s| s.channel().id.clone())
    }
}

impl<H: SurfaceHost> Wall<H, StaticChannelSource> {
    /// Replace the channel list and run a fresh reconciliation pass.
    pub fn set_channels(&mut self, channels: Vec<Channel>, now: std::time::Instant) {
        self.update_source(now, |source| source.replace(channels));
    }

    /// Distinct group names of the configured channels.
    pub fn groups(&self) -> Vec<String> {
        self.source.groups()
    }
}
