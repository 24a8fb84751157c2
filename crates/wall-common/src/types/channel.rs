use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::ChannelId;

/// One stream on the wall. Immutable once handed to a tile session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub title: String,
    pub url: String,
    pub enabled: bool,
    pub group: String,
}

impl Channel {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: ChannelId::new(),
            title: title.into(),
            url: url.into(),
            enabled: true,
            group: String::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<ChannelId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Which channel group the wall currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GroupFilter {
    #[default]
    All,
    Group(String),
}

impl GroupFilter {
    /// Group names compare case-insensitively.
    pub fn matches(&self, channel: &Channel) -> bool {
        match self {
            GroupFilter::All => true,
            GroupFilter::Group(name) => channel.group.eq_ignore_ascii_case(name),
        }
    }
}

impl fmt::Display for GroupFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupFilter::All => write!(f, "All"),
            GroupFilter::Group(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_channel_is_enabled_and_ungrouped() {
        let ch = Channel::new("Sky News", "https://www.youtube.com/watch?v=9Auq9mYxFEE");
        assert!(ch.enabled);
        assert!(ch.group.is_empty());
    }

    #[test]
    fn builder_helpers() {
        let ch = Channel::new("DW", "https://example.com/dw")
            .with_id("dw")
            .with_group("World")
            .disabled();
        assert_eq!(ch.id.as_str(), "dw");
        assert_eq!(ch.group, "World");
        assert!(!ch.enabled);
    }

    #[test]
    fn group_filter_all_matches_everything() {
        let ch = Channel::new("A", "u").with_group("Tech");
        assert!(GroupFilter::All.matches(&ch));
    }

    #[test]
    fn group_filter_is_case_insensitive() {
        let ch = Channel::new("A", "u").with_group("Finance");
        assert!(GroupFilter::Group("finance".into()).matches(&ch));
        assert!(!GroupFilter::Group("World".into()).matches(&ch));
    }

    #[test]
    fn group_filter_display() {
        assert_eq!(GroupFilter::All.to_string(), "All");
        assert_eq!(GroupFilter::Group("Tech".into()).to_string(), "Tech");
    }
}
