//! Configuration schema types for the news wall.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod channels;
mod grid;
mod keybind_config;
mod system;
mod wall;

pub use channels::*;
pub use grid::*;
pub use keybind_config::*;
pub use system::*;
pub use wall::*;

use serde::{Deserialize, Serialize};
use wall_common::Channel;

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change; an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WallConfig {
    pub grid: GridSection,
    pub wall: WallSection,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
    pub channels: Vec<ChannelEntry>,
}

impl WallConfig {
    /// The channel list the wall should show: the configured entries, or the
    /// built-in seed list when none are configured.
    pub fn channel_list(&self) -> Vec<Channel> {
        if self.channels.is_empty() {
            return seed_channels();
        }
        self.channels.iter().map(ChannelEntry::to_channel).collect()
    }
}
