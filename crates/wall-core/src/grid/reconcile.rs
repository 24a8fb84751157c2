use std::collections::{HashMap, HashSet};

use wall_common::{Channel, ChannelId, TileId};

/// A session that exists before a reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveTile {
    pub tile: TileId,
    pub detached: bool,
}

/// What to put in one slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Assignment {
    Empty,
    /// Move an existing session into the slot without reloading it.
    Reuse(TileId),
    /// The channel is live in a floating surface; the slot shows a placeholder.
    Detached(TileId),
    /// No session exists for the channel yet.
    Create(Channel),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconcilePlan {
    pub assignments: Vec<Assignment>,
    /// Grid sessions whose channel left the page.
    pub dispose: Vec<TileId>,
}

impl ReconcilePlan {
    pub fn creates(&self) -> usize {
        self.assignments
            .iter()
            .filter(|a| matches!(a, Assignment::Create(_)))
            .count()
    }
}

/// Map a page slice onto `slot_count` slots, reusing live sessions by
/// channel id.
///
/// Detached sessions are never scheduled for disposal. A channel id that
/// appears twice in the slice only gets the first slot.
pub fn plan(
    slice: &[Channel],
    slot_count: usize,
    live: &HashMap<ChannelId, LiveTile>,
) -> ReconcilePlan {
    let mut seen: HashSet<&ChannelId> = HashSet::new();
    let mut assignments = Vec::with_capacity(slot_count);

    for channel in slice.iter().take(slot_count) {
        if !seen.insert(&channel.id) {
            tracing::warn!(channel = %channel.id, "duplicate channel id on page, slot left empty");
            assignments.push(Assignment::Empty);
            continue;
        }
        let assignment = match live.get(&channel.id) {
            Some(t) if t.detached => Assignment::Detached(t.tile),
            Some(t) => Assignment::Reuse(t.tile),
            None => Assignment::Create(channel.clone()),
        };
        assignments.push(assignment);
    }
    assignments.resize(slot_count, Assignment::Empty);

    let mut dispose: Vec<TileId> = live
        .iter()
        .filter(|(id, t)| !t.detached && !seen.contains(id))
        .map(|(_, t)| t.tile)
        .collect();
    dispose.sort();

    ReconcilePlan {
        assignments,
        dispose,
    }
}
