use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Severity level for in-app notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
}

/// A short-lived status message shown in the window title.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub text: String,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Notification {
    /// Creates an info notification with a 3-second TTL.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            text: text.into(),
            created_at: Instant::now(),
            ttl: Duration::from_secs(3),
        }
    }

    /// Creates a warning notification with a 6-second TTL.
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            text: text.into(),
            created_at: Instant::now(),
            ttl: Duration::from_secs(6),
        }
    }

    /// Returns `true` if this notification has exceeded its TTL at `now`.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= self.ttl
    }
}

/// A bounded queue of notifications that evicts expired entries.
#[derive(Debug)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationQueue {
    /// Creates a new queue with the given maximum capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Pushes a notification. At capacity, the oldest entry is dropped.
    pub fn push(&mut self, notification: Notification) {
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    /// The newest notification still visible at `now`.
    pub fn latest(&mut self, now: Instant) -> Option<&Notification> {
        self.items.retain(|n| !n.is_expired_at(now));
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(8)
    }
}
