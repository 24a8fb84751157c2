//! A recording [`SurfaceHost`] for unit tests.

use std::collections::{HashMap, VecDeque};

use wall_common::{Channel, ChannelId, SurfaceError, SurfaceId, TileId};

use crate::surface::{PollTicket, SurfaceCommand, SurfaceEvent, SurfaceEventKind, SurfaceHost};

#[derive(Debug, Clone)]
pub struct MockSurface {
    pub tile: TileId,
    pub channel: ChannelId,
    pub alive: bool,
    pub generation: u64,
    pub muted: bool,
    pub paused: bool,
    pub loads: usize,
}

/// Records every call and answers position queries from per-channel scripts.
///
/// A query for a channel with no scripted value left gets no reply at all,
/// which the watchdog must treat as "unavailable" on its next tick.
#[derive(Debug, Default)]
pub struct RecordingHost {
    next_surface: u64,
    pub surfaces: HashMap<SurfaceId, MockSurface>,
    pub commands: Vec<(SurfaceId, SurfaceCommand)>,
    pub queries: Vec<(SurfaceId, PollTicket)>,
    pub destroyed: Vec<SurfaceId>,
    pub scripts: HashMap<ChannelId, VecDeque<Option<f64>>>,
    pub fail_create: bool,
    pub fail_queries: bool,
    events: Vec<SurfaceEvent>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue position replies for a channel, consumed one per query.
    pub fn script(&mut self, channel: &str, replies: &[Option<f64>]) {
        self.scripts
            .entry(ChannelId::from(channel))
            .or_default()
            .extend(replies.iter().copied());
    }

    /// Push a ready event for every live surface at its current generation.
    pub fn ready_all(&mut self) {
        let mut ready: Vec<(SurfaceId, u64)> = self
            .surfaces
            .iter()
            .filter(|(_, s)| s.alive)
            .map(|(id, s)| (*id, s.generation))
            .collect();
        ready.sort_by_key(|(id, _)| id.0);
        for (surface, generation) in ready {
            self.push(surface, generation, SurfaceEventKind::Ready);
        }
    }

    pub fn push(&mut self, surface: SurfaceId, generation: u64, kind: SurfaceEventKind) {
        self.events.push(SurfaceEvent {
            surface,
            generation,
            kind,
        });
    }

    pub fn surface_for(&self, channel: &str) -> Option<SurfaceId> {
        self.surfaces
            .iter()
            .find(|(_, s)| s.alive && s.channel.as_str() == channel)
            .map(|(id, _)| *id)
    }

    pub fn state(&self, channel: &str) -> Option<&MockSurface> {
        self.surface_for(channel).and_then(|id| self.surfaces.get(&id))
    }

    /// Total `Load` commands sent for a channel across all its surfaces.
    pub fn loads_for(&self, channel: &str) -> usize {
        self.surfaces
            .values()
            .filter(|s| s.channel.as_str() == channel)
            .map(|s| s.loads)
            .sum()
    }

    pub fn alive_count(&self) -> usize {
        self.surfaces.values().filter(|s| s.alive).count()
    }

    /// Channels whose live surface is currently unmuted.
    pub fn unmuted(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .surfaces
            .values()
            .filter(|s| s.alive && !s.muted)
            .map(|s| s.channel.as_str().to_string())
            .collect();
        out.sort();
        out
    }

    pub fn clear_log(&mut self) {
        self.commands.clear();
        self.queries.clear();
    }
}

impl SurfaceHost for RecordingHost {
    fn create(&mut self, tile: TileId, channel: &Channel) -> Result<SurfaceId, SurfaceError> {
        if self.fail_create {
            return Err(SurfaceError::Unavailable("no window".into()));
        }
        self.next_surface += 1;
        let id = SurfaceId(self.next_surface);
        self.surfaces.insert(
            id,
            MockSurface {
                tile,
                channel: channel.id.clone(),
                alive: true,
                generation: 0,
                muted: true,
                paused: false,
                loads: 0,
            },
        );
        Ok(id)
    }

    fn destroy(&mut self, surface: SurfaceId) {
        if let Some(s) = self.surfaces.get_mut(&surface) {
            s.alive = false;
        }
        self.destroyed.push(surface);
    }

    fn command(&mut self, surface: SurfaceId, command: SurfaceCommand) -> Result<(), SurfaceError> {
        let s = self
            .surfaces
            .get_mut(&surface)
            .filter(|s| s.alive)
            .ok_or(SurfaceError::NotFound(surface))?;
        match command {
            SurfaceCommand::Load { generation, .. } => {
                s.generation = generation;
                s.loads += 1;
                s.muted = true;
                s.paused = false;
            }
            SurfaceCommand::Play => s.paused = false,
            SurfaceCommand::Pause => s.paused = true,
            SurfaceCommand::Mute(m) => s.muted = m,
        }
        self.commands.push((surface, command));
        Ok(())
    }

    fn query_position(&mut self, surface: SurfaceId, ticket: PollTicket) -> Result<(), SurfaceError> {
        if self.fail_queries {
            return Err(SurfaceError::Backend("script eval failed".into()));
        }
        let channel = self
            .surfaces
            .get(&surface)
            .filter(|s| s.alive)
            .map(|s| s.channel.clone())
            .ok_or(SurfaceError::NotFound(surface))?;
        self.queries.push((surface, ticket));
        let reply = self.scripts.get_mut(&channel).and_then(|q| q.pop_front());
        if let Some(position) = reply {
            self.push(
                surface,
                ticket.generation,
                SurfaceEventKind::Position {
                    seq: ticket.seq,
                    position,
                },
            );
        }
        Ok(())
    }

    fn drain_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }
}

pub fn channels(ids: &[&str]) -> Vec<Channel> {
    ids.iter()
        .map(|id| Channel::new(id.to_uppercase(), format!("https://www.youtube.com/watch?v={id}")).with_id(*id))
        .collect()
}
