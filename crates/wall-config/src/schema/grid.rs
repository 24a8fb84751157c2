//! Grid shape and tile health settings.

use serde::{Deserialize, Serialize};

/// `[grid]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSection {
    /// Rows per page (clamped to 1-5).
    pub rows: i64,
    /// Columns per page (clamped to 1-5).
    pub cols: i64,
    /// Show the embedded player's own controls.
    pub show_native_controls: bool,
    /// Seconds between health polls (minimum 0.5).
    pub health_poll_interval_secs: f64,
    /// Consecutive non-advancing polls before a tile is reloaded (minimum 1).
    pub stall_ticks_threshold: i64,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            show_native_controls: false,
            health_poll_interval_secs: 6.0,
            stall_ticks_threshold: 4,
        }
    }
}
