//! Configuration validation and normalisation.
//!
//! `normalize` clamps out-of-range numbers in place and logs each clamp.
//! `validate` reports what cannot be repaired: duplicate keybinds and
//! broken channel entries.

mod channels;
mod helpers;
mod ranges;


use crate::keybinds;
use crate::schema::WallConfig;
use tracing::warn;
use wall_common::ConfigError;

pub use ranges::{MAX_DETACHED_LIMIT, MAX_GRID_DIM, MIN_POLL_INTERVAL_SECS};

/// Clamp every numeric setting into its valid range.
///
/// Returns one note per adjusted field; each is also logged at `warn`.
pub fn normalize(config: &mut WallConfig) -> Vec<String> {
    let mut notes: Vec<String> = Vec::new();

    ranges::normalize_grid(&mut notes, &mut config.grid);
    ranges::normalize_wall(&mut notes, &mut config.wall);

    for note in &notes {
        warn!("config adjusted: {note}");
    }
    notes
}

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WallConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    channels::validate_channels(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
