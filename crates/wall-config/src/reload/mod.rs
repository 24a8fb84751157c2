//! Live config reload manager.
//!
//! Combines the file watcher with config loading so that edits to the
//! config file reach the running wall as whole new configs.

mod manager;


pub use manager::ReloadManager;
