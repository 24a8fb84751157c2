//! Activation, mute, reload, focus and detach operations.

use std::time::Instant;

use wall_common::{DetachError, Direction, FloatId, TileId};

use crate::events::WallEvent;
use crate::focus::FocusRemoval;
use crate::source::ChannelSource;
use crate::surface::SurfaceHost;

use super::{PresentationMode, Wall};

impl<H: SurfaceHost, S: ChannelSource> Wall<H, S> {
    pub fn activate(&mut self, tile: TileId) {
        let before = self.activation.active();
        self.activation
            .set_active(tile, &mut self.sessions, &mut self.host);
        self.note_active(before);
    }

    /// Activate the tile in slot `index` of the current page, if any.
    pub fn activate_slot(&mut self, index: usize) {
        if let Some(tile) = self.grid.slots().get(index).and_then(|s| s.tile()) {
            self.activate(tile);
        }
    }

    /// Move the active tile one step across the slot matrix. Moving onto an
    /// empty slot, or with no active tile on the page, does nothing.
    pub fn move_active(&mut self, direction: Direction) {
        let Some(index) = self.activation.active().and_then(|t| self.grid.index_of(t)) else {
            return;
        };
        let (dx, dy) = direction.delta();
        if let Some(target) = self.grid.neighbour(index, dx, dy) {
            self.activate(target);
        }
    }

    pub fn set_global_mute(&mut self, on: bool) {
        let before = self.activation.global_mute();
        self.activation
            .set_global_mute(on, &mut self.sessions, &mut self.host);
        if before != on {
            tracing::info!(muted = on, "global mute changed");
            self.events.push(WallEvent::GlobalMuteChanged(on));
        }
    }

    pub fn toggle_global_mute(&mut self) {
        self.set_global_mute(!self.activation.global_mute());
    }

    /// Clear global mute and listen to the active tile only.
    pub fn unmute_active(&mut self) {
        let was_muted = self.activation.global_mute();
        self.activation
            .unmute_active(&mut self.sessions, &mut self.host);
        if was_muted {
            self.events.push(WallEvent::GlobalMuteChanged(false));
        }
    }

    /// Explicit reload of one tile. Restarts its poll timer.
    pub fn reload_tile(&mut self, tile: TileId, now: Instant) {
        let Some(session) = self.sessions.get_mut(&tile) else {
            return;
        };
        session.load(&mut self.host, now);
        tracing::info!(%tile, channel = %session.channel().id, "tile reloaded");
        self.events.push(WallEvent::TileReloading {
            tile,
            channel: session.channel().id.clone(),
            forced: false,
        });
    }

    pub fn reload_active(&mut self, now: Instant) {
        if let Some(tile) = self.activation.active() {
            self.reload_tile(tile, now);
        }
    }

    pub fn reload_all(&mut self, now: Instant) {
        let tiles: Vec<TileId> = self.sessions.keys().copied().collect();
        for tile in tiles {
            self.reload_tile(tile, now);
        }
    }

    /// Focus `tile`, or leave focus mode if already focused.
    pub fn toggle_focus(&mut self, tile: TileId, now: Instant) {
        if self.focus.is_focused() {
            self.exit_focus(now);
        } else {
            self.enter_focus(tile, now);
        }
    }

    /// Enlarge `tile` and move every other grid tile into the side list.
    /// Any previous focus is exited first. Detached tiles cannot be focused.
    pub fn enter_focus(&mut self, tile: TileId, now: Instant) {
        if !self.sessions.contains_key(&tile) || self.detach.is_detached(tile) {
            tracing::debug!(%tile, "cannot focus tile");
            return;
        }
        if self.focus.focused() == Some(tile) {
            return;
        }
        if self.focus.is_focused() {
            self.exit_focus(now);
        }
        let mode_before = self.mode();
        let side = self.grid.tiles().filter(|t| *t != tile).collect();
        self.focus.enter(tile, side);
        self.activate(tile);
        self.events.push(WallEvent::FocusChanged {
            tile: Some(tile),
            channel: self.channel_of(tile),
        });
        self.note_mode(mode_before);
    }

    /// Back to the grid, reconciling the current page.
    pub fn exit_focus(&mut self, now: Instant) {
        if !self.focus.is_focused() {
            return;
        }
        self.leave_focus();
        self.rebuild(self.grid.page() as i64, false, now);
    }

    /// Detach, or reattach if already detached.
    pub fn toggle_detach(&mut self, tile: TileId, now: Instant) -> Result<(), DetachError> {
        if self.detach.is_detached(tile) {
            self.reattach(tile, now)
        } else {
            self.detach(tile, now).map(|_| ())
        }
    }

    /// Move `tile` into a floating surface. Playback continues.
    ///
    /// Refusals leave everything unchanged.
    pub fn detach(&mut self, tile: TileId, now: Instant) -> Result<FloatId, DetachError> {
        let checked = if self.sessions.contains_key(&tile) {
            self.detach.check(tile)
        } else {
            Err(DetachError::UnknownTile(tile))
        };
        if let Err(reason) = checked {
            tracing::warn!(%tile, error = %reason, "detach refused");
            self.events.push(WallEvent::DetachRefused {
                tile,
                reason: reason.clone(),
            });
            return Err(reason);
        }

        let mode_before = self.mode();
        let removal = self.focus.remove(tile);
        let float = self.detach.register(tile)?;
        self.grid.mark_detached(tile);

        if let Some(channel) = self.channel_of(tile) {
            tracing::info!(%tile, %float, %channel, "tile detached");
            self.events.push(WallEvent::Detached {
                tile,
                float,
                channel,
            });
        }

        if removal == FocusRemoval::WasMain {
            self.events.push(WallEvent::FocusChanged {
                tile: None,
                channel: None,
            });
            self.rebuild(self.grid.page() as i64, false, now);
        }
        self.note_mode(mode_before);
        Ok(float)
    }

    /// Close the floating surface and let the grid take the tile back.
    pub fn reattach(&mut self, tile: TileId, now: Instant) -> Result<(), DetachError> {
        let mode_before = self.mode();
        let float = self.detach.unregister(tile)?;
        if let Some(channel) = self.channel_of(tile) {
            tracing::info!(%tile, %float, %channel, "tile reattached");
            self.events.push(WallEvent::Reattached { tile, channel });
        }
        self.return_to_grid(tile, now);
        self.note_mode(mode_before);
        Ok(())
    }

    /// The floating surface's own close action: pause, close, unregister.
    /// If the channel is still on the page the tile takes its slot back and
    /// stays paused until it is activated again, otherwise the rebuild
    /// disposes it.
    pub fn close_detached(&mut self, tile: TileId, now: Instant) -> Result<(), DetachError> {
        if !self.detach.is_detached(tile) {
            return Err(DetachError::NotDetached(tile));
        }
        if let Some(session) = self.sessions.get_mut(&tile) {
            session.pause(&mut self.host);
        }
        let mode_before = self.mode();
        let float = self.detach.unregister(tile)?;
        if let Some(channel) = self.channel_of(tile) {
            tracing::info!(%tile, %float, %channel, "floating surface closed");
            self.events.push(WallEvent::Reattached { tile, channel });
        }
        self.return_to_grid(tile, now);
        self.note_mode(mode_before);
        Ok(())
    }

    fn return_to_grid(&mut self, tile: TileId, now: Instant) {
        self.rebuild(self.grid.page() as i64, false, now);
        if self.focus.is_focused() && self.grid.tiles().any(|t| t == tile) {
            self.focus.add_side(tile);
        }
    }

    /// Drop focus state without rebuilding. Callers rebuild afterwards.
    pub(super) fn leave_focus(&mut self) {
        let mode_before = self.mode();
        if self.focus.exit().is_some() {
            self.events.push(WallEvent::FocusChanged {
                tile: None,
                channel: None,
            });
            self.note_mode(mode_before);
        }
    }

    pub fn mode(&self) -> PresentationMode {
        if self.focus.is_focused() {
            PresentationMode::Focus
        } else if self.detach.count() > 0 {
            PresentationMode::DetachedOverlay
        } else {
            PresentationMode::Grid
        }
    }

    fn note_mode(&mut self, before: PresentationMode) {
        let after = self.mode();
        if after != before {
            tracing::debug!(?after, "presentation mode changed");
            self.events.push(WallEvent::ModeChanged(after));
        }
    }
}
