//! Validated runtime settings for the wall core.
//!
//! Out-of-range values never fail. They are clamped into range, so a bad
//! settings file degrades to the nearest valid wall instead of an error.

use std::time::Duration;

/// Largest number of rows or columns in the grid.
pub const MAX_GRID_DIM: usize = 5;

/// Default cap on simultaneously detached tiles.
pub const MAX_DETACHED: usize = 4;

/// Shortest health poll interval accepted.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(500);

pub const DEFAULT_ROWS: usize = 4;
pub const DEFAULT_COLS: usize = 4;
pub const DEFAULT_POLL_INTERVAL_SECS: f64 = 6.0;
pub const DEFAULT_STALL_TICKS: u32 = 4;

/// Per-session watchdog parameters, copied into every tile session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchdogSettings {
    pub poll_interval: Duration,
    pub stall_ticks_threshold: u32,
    pub show_controls: bool,
}

impl Default for WatchdogSettings {
    fn default() -> Self {
        GridConfig::default().watchdog()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    rows: usize,
    cols: usize,
    show_native_controls: bool,
    health_poll_interval: Duration,
    stall_ticks_threshold: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            show_native_controls: false,
            health_poll_interval: Duration::from_secs_f64(DEFAULT_POLL_INTERVAL_SECS),
            stall_ticks_threshold: DEFAULT_STALL_TICKS,
        }
    }
}

impl GridConfig {
    /// A grid of `rows` x `cols`, each clamped to `1..=MAX_GRID_DIM`.
    pub fn new(rows: i64, cols: i64) -> Self {
        Self {
            rows: clamp_dim(rows),
            cols: clamp_dim(cols),
            ..Self::default()
        }
    }

    pub fn with_show_native_controls(mut self, show: bool) -> Self {
        self.show_native_controls = show;
        self
    }

    /// Non-finite or too-small intervals clamp to [`MIN_POLL_INTERVAL`].
    pub fn with_health_poll_interval_secs(mut self, secs: f64) -> Self {
        self.health_poll_interval = clamp_interval(secs);
        self
    }

    /// Thresholds below one clamp to one.
    pub fn with_stall_ticks_threshold(mut self, ticks: i64) -> Self {
        self.stall_ticks_threshold = ticks.clamp(1, i64::from(u32::MAX)) as u32;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn per_page(&self) -> usize {
        self.rows * self.cols
    }

    pub fn show_native_controls(&self) -> bool {
        self.show_native_controls
    }

    pub fn health_poll_interval(&self) -> Duration {
        self.health_poll_interval
    }

    pub fn stall_ticks_threshold(&self) -> u32 {
        self.stall_ticks_threshold
    }

    /// Same config with one more (or one fewer) row and column, clamped.
    pub fn resized(&self, delta: i64) -> Self {
        Self {
            rows: clamp_dim(self.rows as i64 + delta),
            cols: clamp_dim(self.cols as i64 + delta),
            ..self.clone()
        }
    }

    pub fn watchdog(&self) -> WatchdogSettings {
        WatchdogSettings {
            poll_interval: self.health_poll_interval,
            stall_ticks_threshold: self.stall_ticks_threshold,
            show_controls: self.show_native_controls,
        }
    }

    /// True when switching to `other` requires rebuilding the slot matrix.
    pub fn is_structural_change(&self, other: &GridConfig) -> bool {
        self.rows != other.rows
            || self.cols != other.cols
            || self.health_poll_interval != other.health_poll_interval
            || self.stall_ticks_threshold != other.stall_ticks_threshold
    }
}

fn clamp_dim(value: i64) -> usize {
    value.clamp(1, MAX_GRID_DIM as i64) as usize
}

fn clamp_interval(secs: f64) -> Duration {
    if !secs.is_finite() || secs < MIN_POLL_INTERVAL.as_secs_f64() {
        return MIN_POLL_INTERVAL;
    }
    // Anything beyond a day is treated as a day.
    Duration::from_secs_f64(secs.min(86_400.0))
}
