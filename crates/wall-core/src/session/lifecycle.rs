use std::time::Instant;

use crate::surface::{SurfaceCommand, SurfaceHost};

use super::{TileSession, TileState};

impl TileSession {
    /// Load (or reload) the channel into the surface, creating the surface
    /// first if needed. Bumps the generation and restarts the poll timer.
    ///
    /// Surface failures are logged and absorbed; the watchdog will retry.
    pub fn load(&mut self, host: &mut dyn SurfaceHost, now: Instant) {
        if !self.is_live() {
            return;
        }

        self.generation += 1;
        self.load_count += 1;
        self.state = TileState::Loading;
        self.last_observed_position = -1.0;
        self.stall_tick_count = 0;
        self.timer.awaiting = None;
        self.timer.next_due = Some(now + self.settings.poll_interval);
        self.muted = true;
        self.paused = false;

        if self.surface.is_none() {
            match host.create(self.id, &self.channel) {
                Ok(surface) => self.surface = Some(surface),
                Err(e) => {
                    tracing::warn!(tile = %self.id, channel = %self.channel.id, error = %e, "surface create failed");
                    return;
                }
            }
        }

        let cmd = SurfaceCommand::Load {
            generation: self.generation,
            show_controls: self.settings.show_controls,
        };
        self.send(host, cmd);
        tracing::debug!(tile = %self.id, channel = %self.channel.id, generation = self.generation, "tile loading");
    }

    /// Forced reload from the watchdog: passes through `Reloading`.
    pub(super) fn force_reload(&mut self, host: &mut dyn SurfaceHost, now: Instant) {
        tracing::info!(
            tile = %self.id,
            channel = %self.channel.id,
            stall_ticks = self.stall_tick_count,
            "playback stalled, reloading"
        );
        self.state = TileState::Reloading;
        self.stall_tick_count = 0;
        self.forced_reloads += 1;
        self.load(host, now);
    }

    pub fn play(&mut self, host: &mut dyn SurfaceHost) {
        if !self.is_live() {
            return;
        }
        self.paused = false;
        if self.state == TileState::Ready {
            self.state = TileState::Playing;
        }
        self.send(host, SurfaceCommand::Play);
    }

    pub fn pause(&mut self, host: &mut dyn SurfaceHost) {
        if !self.is_live() {
            return;
        }
        self.paused = true;
        self.send(host, SurfaceCommand::Pause);
    }

    pub fn set_muted(&mut self, host: &mut dyn SurfaceHost, muted: bool) {
        if !self.is_live() {
            return;
        }
        self.muted = muted;
        self.send(host, SurfaceCommand::Mute(muted));
    }

    /// Handle the player's ready signal. Returns false for stale signals.
    pub fn on_ready(&mut self, generation: u64) -> bool {
        if !self.is_live() || generation != self.generation {
            return false;
        }
        if matches!(self.state, TileState::Loading | TileState::Reloading) {
            // The player autoplays on ready unless it was paused meanwhile.
            self.state = if self.paused {
                TileState::Ready
            } else {
                TileState::Playing
            };
            tracing::debug!(tile = %self.id, channel = %self.channel.id, "tile ready");
        }
        true
    }

    /// Record informational stats. Returns false for stale reports.
    pub fn on_stats(&mut self, generation: u64, position: f64, buffered_fraction: f64) -> bool {
        if !self.is_live() || generation != self.generation {
            return false;
        }
        self.last_position = Some(position);
        self.buffered_fraction = Some(buffered_fraction);
        true
    }

    /// Stop timers and release the surface. Idempotent.
    pub fn dispose(&mut self, host: &mut dyn SurfaceHost) {
        if !self.is_live() {
            return;
        }
        self.timer.next_due = None;
        self.timer.awaiting = None;
        // Anything still in flight for the old generation is now stale.
        self.generation += 1;
        if let Some(surface) = self.surface.take() {
            host.destroy(surface);
        }
        self.state = TileState::Disposed;
        tracing::debug!(tile = %self.id, channel = %self.channel.id, "tile disposed");
    }

    fn send(&self, host: &mut dyn SurfaceHost, cmd: SurfaceCommand) {
        let Some(surface) = self.surface else {
            return;
        };
        if let Err(e) = host.command(surface, cmd) {
            tracing::debug!(tile = %self.id, ?cmd, error = %e, "surface command failed");
        }
    }
}
