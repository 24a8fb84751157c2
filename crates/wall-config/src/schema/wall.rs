//! Presentation settings: detach capacity, spacing, and group names.

use serde::{Deserialize, Serialize};

/// `[wall]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallSection {
    /// Maximum number of simultaneously detached tiles (1-16).
    pub max_detached: i64,
    /// Gap between grid cells in pixels.
    pub gap: u32,
    /// Padding around the grid in pixels.
    pub outer_padding: u32,
    /// Share of the width given to the focus side list (0.05-0.5).
    pub focus_side_fraction: f64,
    pub detached_width: u32,
    pub detached_height: u32,
    /// Group names in digit-key order: `1` selects the first entry.
    pub groups: Vec<String>,
}

impl Default for WallSection {
    fn default() -> Self {
        Self {
            max_detached: 4,
            gap: 6,
            outer_padding: 8,
            focus_side_fraction: 0.22,
            detached_width: 480,
            detached_height: 270,
            groups: vec![
                "Finance".into(),
                "World".into(),
                "Tech".into(),
                "Arabic".into(),
            ],
        }
    }
}

impl WallSection {
    /// Group bound to digit `n` (1-based). `None` for 0 or unbound digits.
    pub fn group_for_digit(&self, n: u32) -> Option<&str> {
        let index = (n as usize).checked_sub(1)?;
        self.groups.get(index).map(String::as_str)
    }
}
