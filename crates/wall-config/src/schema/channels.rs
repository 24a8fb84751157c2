//! Channel list entries and the built-in seed list.

use serde::{Deserialize, Serialize};
use wall_common::{Channel, ChannelId};

/// One `[[channels]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelEntry {
    /// Stable identity. Defaults to the url so edits to the title or group
    /// do not restart the stream.
    pub id: Option<String>,
    pub title: String,
    pub url: String,
    pub enabled: bool,
    /// Empty string means ungrouped.
    pub group: String,
}

impl Default for ChannelEntry {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            url: String::new(),
            enabled: true,
            group: String::new(),
        }
    }
}

impl ChannelEntry {
    pub fn to_channel(&self) -> Channel {
        let id = match &self.id {
            Some(id) if !id.trim().is_empty() => ChannelId::from(id.trim()),
            _ => ChannelId::from(self.url.as_str()),
        };
        Channel {
            id,
            title: self.title.clone(),
            url: self.url.clone(),
            enabled: self.enabled,
            group: self.group.clone(),
        }
    }
}

const SEED: &[(&str, &str, &str)] = &[
    ("Sky News", "9Auq9mYxFEE", "World"),
    ("Al Jazeera English", "gCNeDWCI0vo", "World"),
    ("BBC News", "pSa4yQr2fdQ", "World"),
    ("DW News", "NiRIbKwAejk", "World"),
    ("France 24 English", "l8PMl7tUDIE", "World"),
    ("NBC News NOW", "iEpJwprxDdk", "Finance"),
    ("ABC News Live", "bNyUyrR0PHo", "Finance"),
    ("CBS News 24/7", "f39oHo6vFLg", "Finance"),
    ("Bloomberg Television", "dp8PhLsUcFE", "Finance"),
    ("CNBC Television", "9NyxcX3rhQs", "Finance"),
    ("WION", "b6R9-7KZ8YM", "World"),
    ("CNA", "XWq5kBlakcQ", "World"),
    ("Euronews", "pykpO5kQJ98", "Tech"),
];

/// Curated 24/7 live news streams used when the config lists no channels.
pub fn seed_channels() -> Vec<Channel> {
    SEED.iter()
        .map(|(title, video, group)| {
            Channel::new(*title, format!("https://www.youtube.com/watch?v={video}"))
                .with_id(*video)
                .with_group(*group)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_without_id_uses_url() {
        let entry = ChannelEntry {
            title: "Sky".into(),
            url: "https://example.com/sky".into(),
            ..Default::default()
        };
        let ch = entry.to_channel();
        assert_eq!(ch.id.as_str(), "https://example.com/sky");
        assert!(ch.enabled);
    }

    #[test]
    fn blank_id_falls_back_to_url() {
        let entry = ChannelEntry {
            id: Some("  ".into()),
            url: "u".into(),
            ..Default::default()
        };
        assert_eq!(entry.to_channel().id.as_str(), "u");
    }

    #[test]
    fn explicit_id_is_kept() {
        let entry = ChannelEntry {
            id: Some("bbc".into()),
            url: "u".into(),
            group: "World".into(),
            enabled: false,
            ..Default::default()
        };
        let ch = entry.to_channel();
        assert_eq!(ch.id.as_str(), "bbc");
        assert_eq!(ch.group, "World");
        assert!(!ch.enabled);
    }

    #[test]
    fn seed_ids_are_unique() {
        let seed = seed_channels();
        let mut ids: Vec<_> = seed.iter().map(|c| c.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), seed.len());
        assert!(seed.iter().all(|c| c.enabled));
    }
}
