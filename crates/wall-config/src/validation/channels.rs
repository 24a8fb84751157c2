//! Channel list validation.

use std::collections::HashSet;

use crate::schema::WallConfig;

/// Every channel needs a url, and resolved ids must be unique.
pub(crate) fn validate_channels(errors: &mut Vec<String>, config: &WallConfig) {
    let mut seen = HashSet::new();
    for (index, entry) in config.channels.iter().enumerate() {
        if entry.url.trim().is_empty() {
            errors.push(format!("channels[{index}] ('{}') has no url", entry.title));
            continue;
        }
        let id = entry.to_channel().id;
        if !seen.insert(id.clone()) {
            errors.push(format!("channels[{index}] duplicates channel id '{id}'"));
        }
    }
}
