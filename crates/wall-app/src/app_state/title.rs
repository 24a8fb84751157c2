//! Window title: page, group filter, mute state, and the latest notification.

use std::time::Instant;

use wall_common::GroupFilter;

use super::core::NewsWallApp;

/// Format: "News Wall | 2/5 | World | muted | {notification}".
pub(super) fn title_text(
    page: usize,
    page_count: usize,
    filter: &GroupFilter,
    muted: bool,
    notification: Option<&str>,
) -> String {
    let mut title = format!("News Wall | {}/{} | {filter}", page + 1, page_count.max(1));
    if muted {
        title.push_str(" | muted");
    }
    if let Some(text) = notification {
        title.push_str(" | ");
        title.push_str(text);
    }
    title
}

impl NewsWallApp {
    pub(super) fn update_window_title(&mut self) {
        let Some(window) = self.window.clone() else {
            return;
        };

        let (page, page_count, filter, muted) = match &self.wall {
            Some(w) => (w.page(), w.page_count(), w.filter().clone(), w.global_mute()),
            None => (0, 1, GroupFilter::All, true),
        };
        let note = self
            .notifications
            .latest(Instant::now())
            .map(|n| n.text.clone());

        let title = title_text(page, page_count, &filter, muted, note.as_deref());
        if title != self.last_title {
            window.set_title(&title);
            self.last_title = title;
        }
    }
}
