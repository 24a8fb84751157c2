//! The wall core: tile sessions with a health watchdog, grid reconciliation,
//! the single-active-tile invariant, and grid/focus/detached presentation.
//!
//! Everything here runs on one coordinating thread. Asynchronous results from
//! embedded surfaces are queued by the [`SurfaceHost`] and drained by
//! [`Wall::tick`], so no callback ever observes a half-applied rebuild.

pub mod activation;
pub mod commands;
pub mod config;
pub mod detach;
pub mod events;
pub mod focus;
pub mod grid;
pub mod layout;
pub mod session;
pub mod source;
pub mod surface;
pub mod wall;

#[cfg(test)]
pub(crate) mod testing;

pub use activation::ActivationCoordinator;
pub use commands::WallCommand;
pub use config::{GridConfig, MAX_DETACHED, MAX_GRID_DIM};
pub use detach::{DetachController, DetachedSurface};
pub use events::WallEvent;
pub use focus::FocusController;
pub use grid::{GridLayout, Slot};
pub use layout::LayoutEngine;
pub use session::{TileSession, TileState};
pub use source::{ChannelSource, StaticChannelSource};
pub use surface::{PollTicket, SurfaceCommand, SurfaceEvent, SurfaceEventKind, SurfaceHost};
pub use wall::{FocusView, Presentation, PresentationMode, SurfacePlacement, Wall};
