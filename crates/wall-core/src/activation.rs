//! Keeps at most one tile audible.
//!
//! The coordinator only decides who should be muted; the sessions carry the
//! resulting intent and forward it to their surfaces.

use std::collections::BTreeMap;

use wall_common::TileId;

use crate::session::TileSession;
use crate::surface::SurfaceHost;

pub type Sessions = BTreeMap<TileId, TileSession>;

#[derive(Debug, Clone, Default)]
pub struct ActivationCoordinator {
    active: Option<TileId>,
    global_mute: bool,
}

impl ActivationCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<TileId> {
        self.active
    }

    pub fn global_mute(&self) -> bool {
        self.global_mute
    }

    /// Make `tile` the active tile: mute the previous one, then unmute
    /// (unless globally muted) and play the new one.
    pub fn set_active(&mut self, tile: TileId, sessions: &mut Sessions, host: &mut dyn SurfaceHost) {
        if !sessions.get(&tile).is_some_and(TileSession::is_live) {
            tracing::debug!(%tile, "ignoring activation of unknown tile");
            return;
        }
        if let Some(prev) = self.active.filter(|p| *p != tile) {
            if let Some(s) = sessions.get_mut(&prev) {
                s.set_muted(host, true);
            }
        }
        self.active = Some(tile);
        self.assert_active(sessions, host);
    }

    pub fn set_global_mute(&mut self, on: bool, sessions: &mut Sessions, host: &mut dyn SurfaceHost) {
        self.global_mute = on;
        if on {
            for s in sessions.values_mut().filter(|s| !s.is_muted()) {
                s.set_muted(host, true);
            }
        } else {
            self.enforce(sessions, host);
        }
    }

    /// Clear global mute and make sure only the active tile is audible.
    pub fn unmute_active(&mut self, sessions: &mut Sessions, host: &mut dyn SurfaceHost) {
        self.global_mute = false;
        self.enforce(sessions, host);
        self.assert_active(sessions, host);
    }

    /// A tile became ready. Its player starts muted, so the active tile
    /// needs its unmute and play re-sent.
    pub fn on_ready(&mut self, tile: TileId, sessions: &mut Sessions, host: &mut dyn SurfaceHost) {
        if self.active == Some(tile) && !self.global_mute {
            self.assert_active(sessions, host);
        }
    }

    /// Forget `tile` if it was active.
    pub fn clear(&mut self, tile: TileId) -> bool {
        if self.active == Some(tile) {
            self.active = None;
            return true;
        }
        false
    }

    /// Mute every non-active session and unmute the active one if allowed.
    /// Only sessions whose intent differs receive a command.
    pub fn enforce(&mut self, sessions: &mut Sessions, host: &mut dyn SurfaceHost) {
        for (id, s) in sessions.iter_mut() {
            let want_muted = self.global_mute || Some(*id) != self.active;
            if s.is_live() && s.is_muted() != want_muted {
                s.set_muted(host, want_muted);
            }
        }
    }

    fn assert_active(&self, sessions: &mut Sessions, host: &mut dyn SurfaceHost) {
        let Some(s) = self.active.and_then(|t| sessions.get_mut(&t)) else {
            return;
        };
        if !self.global_mute {
            s.set_muted(host, false);
        }
        s.play(host);
    }
}
