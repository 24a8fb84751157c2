//! Forwarding wall events to the event bus and the notification queue.

use wall_common::{Event, Notification};
use wall_core::WallEvent;

use super::core::NewsWallApp;

/// The bus event for a wall event, for the ones outside consumers follow.
pub(super) fn bus_event(event: &WallEvent) -> Option<Event> {
    let bus = match event {
        WallEvent::ActiveChanged { channel, .. } => Event::ActiveChannelChanged(channel.clone()),
        WallEvent::GlobalMuteChanged(on) => Event::GlobalMuteChanged(*on),
        WallEvent::PageChanged { page, page_count } => Event::PageChanged {
            page: *page,
            page_count: *page_count,
        },
        WallEvent::TileReloading { channel, .. } => Event::TileReloaded(channel.clone()),
        WallEvent::FocusChanged { channel, .. } => Event::FocusChanged(channel.clone()),
        WallEvent::Detached { channel, .. } => Event::TileDetached(channel.clone()),
        WallEvent::Reattached { channel, .. } => Event::TileReattached(channel.clone()),
        WallEvent::DetachRefused { reason, .. } => Event::Notification(reason.to_string()),
        WallEvent::TileReady { .. } | WallEvent::TileStats { .. } | WallEvent::ModeChanged(_) => {
            return None
        }
    };
    Some(bus)
}

impl NewsWallApp {
    /// Drain the wall's events onto the bus. Refusals also become warnings.
    pub(super) fn forward_wall_events(&mut self) {
        let Some(wall) = self.wall.as_mut() else {
            return;
        };
        for event in wall.drain_events() {
            match &event {
                WallEvent::DetachRefused { reason, .. } => {
                    self.notifications.push(Notification::warning(reason.to_string()));
                }
                WallEvent::TileReloading {
                    tile,
                    channel,
                    forced: true,
                } => {
                    tracing::debug!(%tile, %channel, "watchdog reload");
                }
                WallEvent::TileReady { tile, channel } => {
                    tracing::debug!(%tile, %channel, "tile ready");
                }
                _ => {}
            }
            if let Some(bus) = bus_event(&event) {
                self.event_bus.publish(bus);
            }
        }
    }
}
