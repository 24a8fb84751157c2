//! Timer and surface-event processing on the coordinating thread.

use std::time::Instant;

use wall_common::TileId;

use crate::events::WallEvent;
use crate::session::PollOutcome;
use crate::source::ChannelSource;
use crate::surface::{SurfaceEvent, SurfaceEventKind, SurfaceHost};

use super::Wall;

impl<H: SurfaceHost, S: ChannelSource> Wall<H, S> {
    /// Apply queued surface events, then run every watchdog tick that is
    /// due at `now`, then apply whatever those ticks produced.
    pub fn tick(&mut self, now: Instant) {
        self.pump_surface_events(now);

        let due: Vec<TileId> = self
            .sessions
            .values()
            .filter(|s| s.is_poll_due(now))
            .map(|s| s.id())
            .collect();
        for tile in due {
            let Some(session) = self.sessions.get_mut(&tile) else {
                continue;
            };
            let outcome = session.poll(&mut self.host, now);
            self.after_poll(tile, outcome);
        }

        self.pump_surface_events(now);
    }

    /// Earliest instant at which [`Wall::tick`] has watchdog work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.sessions
            .values()
            .filter_map(|s| s.next_poll_due())
            .min()
    }

    fn pump_surface_events(&mut self, now: Instant) {
        for event in self.host.drain_events() {
            self.handle_surface_event(event, now);
        }
    }

    fn handle_surface_event(&mut self, event: SurfaceEvent, now: Instant) {
        let Some(tile) = self.tile_for_surface(event.surface) else {
            tracing::debug!(surface = %event.surface, "event for released surface dropped");
            return;
        };
        let Some(session) = self.sessions.get_mut(&tile) else {
            return;
        };

        match event.kind {
            SurfaceEventKind::Ready => {
                if !session.on_ready(event.generation) {
                    tracing::debug!(%tile, generation = event.generation, "stale ready dropped");
                    return;
                }
                let channel = session.channel().id.clone();
                self.activation
                    .on_ready(tile, &mut self.sessions, &mut self.host);
                self.events.push(WallEvent::TileReady { tile, channel });
            }
            SurfaceEventKind::Stats {
                position,
                buffered_fraction,
            } => {
                if session.on_stats(event.generation, position, buffered_fraction) {
                    self.events.push(WallEvent::TileStats {
                        tile,
                        position,
                        buffered_fraction,
                    });
                }
            }
            SurfaceEventKind::Position { seq, position } => {
                let outcome =
                    session.on_position(event.generation, seq, position, &mut self.host, now);
                self.after_poll(tile, outcome);
            }
        }
    }

    fn after_poll(&mut self, tile: TileId, outcome: PollOutcome) {
        if outcome != PollOutcome::Reloaded {
            return;
        }
        if let Some(channel) = self.channel_of(tile) {
            self.events.push(WallEvent::TileReloading {
                tile,
                channel,
                forced: true,
            });
        }
    }
}
