//! Numeric range normalisation for the `[grid]` and `[wall]` sections.

use super::helpers::{clamp_f64, clamp_i64};
use crate::schema::{GridSection, WallSection};

/// Largest rows or cols value a page may have.
pub const MAX_GRID_DIM: i64 = 5;
/// Shortest allowed health poll interval.
pub const MIN_POLL_INTERVAL_SECS: f64 = 0.5;
/// Upper bound on simultaneously detached tiles.
pub const MAX_DETACHED_LIMIT: i64 = 16;

const MAX_POLL_INTERVAL_SECS: f64 = 86_400.0;

pub(crate) fn normalize_grid(notes: &mut Vec<String>, grid: &mut GridSection) {
    clamp_i64(notes, "grid.rows", &mut grid.rows, 1, MAX_GRID_DIM);
    clamp_i64(notes, "grid.cols", &mut grid.cols, 1, MAX_GRID_DIM);
    clamp_f64(
        notes,
        "grid.health_poll_interval_secs",
        &mut grid.health_poll_interval_secs,
        MIN_POLL_INTERVAL_SECS,
        MAX_POLL_INTERVAL_SECS,
    );
    clamp_i64(
        notes,
        "grid.stall_ticks_threshold",
        &mut grid.stall_ticks_threshold,
        1,
        i64::MAX,
    );
}

pub(crate) fn normalize_wall(notes: &mut Vec<String>, wall: &mut WallSection) {
    clamp_i64(
        notes,
        "wall.max_detached",
        &mut wall.max_detached,
        1,
        MAX_DETACHED_LIMIT,
    );
    clamp_f64(
        notes,
        "wall.focus_side_fraction",
        &mut wall.focus_side_fraction,
        0.05,
        0.5,
    );
    if wall.detached_width == 0 {
        notes.push("wall.detached_width = 0 clamped to 1".into());
        wall.detached_width = 1;
    }
    if wall.detached_height == 0 {
        notes.push("wall.detached_height = 0 clamped to 1".into());
        wall.detached_height = 1;
    }
}
