//! File watcher for live config reload.
//!
//! Uses the `notify` crate to watch the config file's directory, coalescing
//! bursts of events inside a 500ms window into a single reload signal.

mod config_watcher;


pub use config_watcher::{ConfigWatcher, DEBOUNCE};
