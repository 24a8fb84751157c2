use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::id::ChannelId;

/// Application-wide events for consumers outside the wall core, such as
/// an audio transcription pipeline that follows the active channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    ConfigReloaded,
    PageChanged { page: usize, page_count: usize },
    ActiveChannelChanged(Option<ChannelId>),
    GlobalMuteChanged(bool),
    TileReloaded(ChannelId),
    FocusChanged(Option<ChannelId>),
    TileDetached(ChannelId),
    TileReattached(ChannelId),
    Notification(String),
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}
