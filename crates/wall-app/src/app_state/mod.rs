//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the wall window, one window per floating tile, the wall,
//! and the config reload channel, and routes keyboard and pointer input into
//! wall commands.

mod bounds;
mod config_reload;
mod core;
mod dispatch;
mod event_handler;
mod events;
mod floating;
mod init;
mod polling;
mod shutdown;
mod title;

pub use core::NewsWallApp;
