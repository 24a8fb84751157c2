//! Where channel lists come from.

use wall_common::{Channel, GroupFilter};

/// Supplies ordered snapshots of the enabled channels.
pub trait ChannelSource {
    /// Enabled channels matching `filter`, in display order.
    fn list_enabled_channels(&self, filter: &GroupFilter) -> Vec<Channel>;
}

/// An in-memory channel list, typically built from the config file.
#[derive(Debug, Clone, Default)]
pub struct StaticChannelSource {
    channels: Vec<Channel>,
}

impl StaticChannelSource {
    pub fn new(channels: Vec<Channel>) -> Self {
        Self { channels }
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Replace the whole list. Callers must trigger a wall refresh afterwards.
    pub fn replace(&mut self, channels: Vec<Channel>) {
        self.channels = channels;
    }

    /// Distinct non-empty group names, in first-seen order.
    pub fn groups(&self) -> Vec<String> {
        let mut groups: Vec<String> = Vec::new();
        for ch in &self.channels {
            if ch.group.is_empty() {
                continue;
            }
            if !groups.iter().any(|g| g.eq_ignore_ascii_case(&ch.group)) {
                groups.push(ch.group.clone());
            }
        }
        groups
    }
}

impl ChannelSource for StaticChannelSource {
    fn list_enabled_channels(&self, filter: &GroupFilter) -> Vec<Channel> {
        self.channels
            .iter()
            .filter(|ch| ch.enabled && filter.matches(ch))
            .cloned()
            .collect()
    }
}
