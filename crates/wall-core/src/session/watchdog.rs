use std::time::Instant;

use crate::surface::{PollTicket, SurfaceHost};

use super::{PollOutcome, TileSession, TileState};

impl TileSession {
    /// Run one watchdog tick if it is due. Paused sessions are not sampled.
    ///
    /// A query that was never answered since the previous tick counts as an
    /// unavailable sample. Then a fresh query goes out; a query that cannot
    /// even be issued also counts as unavailable.
    pub fn poll(&mut self, host: &mut dyn SurfaceHost, now: Instant) -> PollOutcome {
        if !self.is_poll_due(now) {
            return PollOutcome::Ignored;
        }
        self.timer.next_due = Some(now + self.settings.poll_interval);

        // Paused players hold their position.
        if self.paused {
            self.timer.awaiting = None;
            self.stall_tick_count = 0;
            return PollOutcome::Ignored;
        }

        if self.timer.awaiting.take().is_some() {
            tracing::debug!(tile = %self.id, "position query timed out");
            let outcome = self.record_sample(None, host, now);
            if outcome == PollOutcome::Reloaded {
                return outcome;
            }
        }

        self.timer.seq += 1;
        let ticket = PollTicket {
            generation: self.generation,
            seq: self.timer.seq,
        };
        let issued = match self.surface {
            Some(surface) => match host.query_position(surface, ticket) {
                Ok(()) => true,
                Err(e) => {
                    tracing::debug!(tile = %self.id, error = %e, "position query failed");
                    false
                }
            },
            None => false,
        };

        if issued {
            self.timer.awaiting = Some(ticket.seq);
            PollOutcome::Queried
        } else {
            self.record_sample(None, host, now)
        }
    }

    /// Handle the answer to a position query. Stale answers are dropped.
    pub fn on_position(
        &mut self,
        generation: u64,
        seq: u64,
        position: Option<f64>,
        host: &mut dyn SurfaceHost,
        now: Instant,
    ) -> PollOutcome {
        if !self.is_live() || generation != self.generation || self.timer.awaiting != Some(seq) {
            tracing::trace!(tile = %self.id, generation, seq, "stale position reply");
            return PollOutcome::Ignored;
        }
        self.timer.awaiting = None;
        self.record_sample(position, host, now)
    }

    fn record_sample(
        &mut self,
        position: Option<f64>,
        host: &mut dyn SurfaceHost,
        now: Instant,
    ) -> PollOutcome {
        let usable = position.filter(|p| p.is_finite() && *p >= 0.0);
        match usable {
            Some(p) if p != self.last_observed_position => {
                self.stall_tick_count = 0;
                self.last_observed_position = p;
                if self.state == TileState::Stalled {
                    self.state = TileState::Playing;
                }
                PollOutcome::Healthy
            }
            _ => {
                self.stall_tick_count += 1;
                if self.state == TileState::Playing {
                    self.state = TileState::Stalled;
                }
                if self.stall_tick_count >= self.settings.stall_ticks_threshold {
                    self.force_reload(host, now);
                    PollOutcome::Reloaded
                } else {
                    PollOutcome::Stalled
                }
            }
        }
    }
}
