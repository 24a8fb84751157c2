//! Page selection, reconciliation and config changes.

use std::collections::HashMap;
use std::time::Instant;

use wall_common::{Channel, ChannelId, GroupFilter, TileId};

use crate::config::GridConfig;
use crate::events::WallEvent;
use crate::grid::{self, Assignment, GridLayout, LiveTile, Slot};
use crate::session::TileSession;
use crate::source::ChannelSource;
use crate::surface::SurfaceHost;

use super::Wall;

impl<H: SurfaceHost, S: ChannelSource> Wall<H, S> {
    /// Build page 0 for the first time.
    pub fn start(&mut self, now: Instant) {
        self.rebuild(0, false, now);
        self.started = true;
        tracing::info!(
            channels = self.channels.len(),
            rows = self.config.rows(),
            cols = self.config.cols(),
            "wall started"
        );
    }

    /// Show `page`, clamped into the available range.
    pub fn load_page(&mut self, page: i64, now: Instant) {
        self.leave_focus();
        self.rebuild(page, false, now);
    }

    pub fn next_page(&mut self, now: Instant) {
        self.load_page(self.grid.page() as i64 + 1, now);
    }

    pub fn prev_page(&mut self, now: Instant) {
        self.load_page(self.grid.page() as i64 - 1, now);
    }

    /// Switch the group filter and go back to page 0.
    pub fn set_group_filter(&mut self, filter: GroupFilter, now: Instant) {
        tracing::info!(%filter, "group filter changed");
        self.filter = filter;
        self.load_page(0, now);
    }

    /// Re-query the channel source and reconcile the current page.
    pub fn refresh(&mut self, now: Instant) {
        self.load_page(self.grid.page() as i64, now);
    }

    /// Mutate the channel source, then run a fresh reconciliation pass.
    pub fn update_source(&mut self, now: Instant, f: impl FnOnce(&mut S)) {
        f(&mut self.source);
        self.refresh(now);
    }

    /// Apply a new grid config.
    ///
    /// Shape, poll interval and stall threshold changes rebuild the slot
    /// matrix; sessions whose channel stays on the page survive. Toggling
    /// native controls reloads every live session.
    pub fn apply_config(&mut self, config: GridConfig, now: Instant) {
        if config == self.config {
            return;
        }
        let structural = self.config.is_structural_change(&config);
        let controls_changed = self.config.show_native_controls() != config.show_native_controls();
        self.config = config;

        if !self.started {
            self.grid = GridLayout::new(self.config.rows(), self.config.cols());
            return;
        }

        let settings = self.config.watchdog();
        let existing: Vec<TileId> = self.sessions.keys().copied().collect();
        for s in self.sessions.values_mut() {
            s.reconfigure(settings, now);
        }

        if structural {
            tracing::info!(
                rows = self.config.rows(),
                cols = self.config.cols(),
                "grid config changed, rebuilding"
            );
            self.leave_focus();
            self.rebuild(self.grid.page() as i64, true, now);
        }

        if controls_changed {
            for tile in existing {
                self.reload_tile(tile, now);
            }
        }
    }

    /// Grow (positive) or shrink (negative) both grid dimensions.
    pub fn resize_grid(&mut self, delta: i64, now: Instant) {
        let resized = self.config.resized(delta);
        self.apply_config(resized, now);
    }

    pub fn toggle_native_controls(&mut self, now: Instant) {
        let flipped = self
            .config
            .clone()
            .with_show_native_controls(!self.config.show_native_controls());
        self.apply_config(flipped, now);
    }

    /// Dispose every session, detached ones included.
    pub fn shutdown(&mut self) {
        let tiles: Vec<TileId> = self.sessions.keys().copied().collect();
        for tile in tiles {
            self.dispose_tile(tile);
        }
        self.focus.exit();
        let rows = self.config.rows();
        let cols = self.config.cols();
        self.grid = GridLayout::new(rows, cols);
        tracing::info!("wall shut down");
    }

    /// Reconcile the (clamped) page against the live sessions.
    ///
    /// Runs to completion before any surface event is looked at again.
    pub(super) fn rebuild(&mut self, requested_page: i64, structural: bool, now: Instant) {
        let page_before = (self.grid.page(), self.grid.page_count());
        let active_before = self.activation.active();

        self.channels = self.source.list_enabled_channels(&self.filter);
        let per_page = self.config.per_page();
        let len = self.channels.len();
        let page_count = grid::page_count(len, per_page);
        let page = grid::clamp_page(requested_page, len, per_page);
        let range = grid::page_range(page, len, per_page);

        let live: HashMap<ChannelId, LiveTile> = self
            .by_channel
            .iter()
            .map(|(channel, tile)| {
                (
                    channel.clone(),
                    LiveTile {
                        tile: *tile,
                        detached: self.detach.is_detached(*tile),
                    },
                )
            })
            .collect();
        let plan = grid::plan(&self.channels[range], per_page, &live);
        tracing::debug!(
            page,
            page_count,
            creates = plan.creates(),
            disposals = plan.dispose.len(),
            "reconciling page"
        );

        if structural {
            self.grid = GridLayout::new(self.config.rows(), self.config.cols());
        }

        let mut slots = Vec::with_capacity(per_page);
        for assignment in plan.assignments {
            let slot = match assignment {
                Assignment::Empty => Slot::Empty,
                Assignment::Reuse(tile) => Slot::Tile(tile),
                Assignment::Detached(tile) => Slot::Detached(tile),
                Assignment::Create(channel) => Slot::Tile(self.spawn(channel, now)),
            };
            slots.push(slot);
        }
        for tile in plan.dispose {
            self.dispose_tile(tile);
        }
        self.grid.set_assignment(page, page_count, slots);

        if !self.started || page_before != (page, page_count) {
            self.events.push(WallEvent::PageChanged { page, page_count });
        }
        self.settle_active(active_before);
    }

    /// Keep the active tile if it survived, else activate the first slot.
    /// Then make sure only the active tile is audible.
    fn settle_active(&mut self, before: Option<TileId>) {
        let survivor = self
            .activation
            .active()
            .filter(|t| self.sessions.contains_key(t));
        if survivor.is_none() {
            if let Some(first) = self.grid.first_tile() {
                self.activation
                    .set_active(first, &mut self.sessions, &mut self.host);
            }
        }
        self.activation.enforce(&mut self.sessions, &mut self.host);
        self.note_active(before);
    }

    pub(super) fn note_active(&mut self, before: Option<TileId>) {
        let after = self.activation.active();
        if after != before {
            let channel = after.and_then(|t| self.channel_of(t));
            tracing::debug!(tile = ?after, channel = ?channel, "active tile changed");
            self.events.push(WallEvent::ActiveChanged {
                tile: after,
                channel,
            });
        }
    }

    fn spawn(&mut self, channel: Channel, now: Instant) -> TileId {
        self.next_tile += 1;
        let id = TileId(self.next_tile);
        let mut session = TileSession::new(id, channel, self.config.watchdog());
        session.load(&mut self.host, now);
        self.by_channel.insert(session.channel().id.clone(), id);
        self.sessions.insert(id, session);
        id
    }

    pub(super) fn dispose_tile(&mut self, tile: TileId) {
        let Some(mut session) = self.sessions.remove(&tile) else {
            return;
        };
        session.dispose(&mut self.host);
        if self.by_channel.get(&session.channel().id) == Some(&tile) {
            self.by_channel.remove(&session.channel().id);
        }
        self.activation.clear(tile);
        self.focus.remove(tile);
        let _ = self.detach.unregister(tile);
    }
}
