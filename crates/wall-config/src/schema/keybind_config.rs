//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: "Modifier+Key" where Modifier is one of: Cmd, Option, Control, Shift.
/// Multiple modifiers: "Cmd+Shift+R". An empty string unbinds the action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub move_left: String,
    pub move_right: String,
    pub move_up: String,
    pub move_down: String,
    pub next_page: String,
    pub prev_page: String,
    pub unmute_active: String,
    pub toggle_mute: String,
    pub reload_active: String,
    pub reload_all: String,
    pub toggle_focus: String,
    pub exit_focus: String,
    pub toggle_detach: String,
    pub close_detached: String,
    pub grow_grid: String,
    pub shrink_grid: String,
    pub toggle_native_controls: String,
    pub show_all_groups: String,
    pub show_group_1: String,
    pub show_group_2: String,
    pub show_group_3: String,
    pub show_group_4: String,
    pub toggle_fullscreen: String,
    pub reload_config: String,
    pub quit: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            move_left: "Left".into(),
            move_right: "Right".into(),
            move_up: "Up".into(),
            move_down: "Down".into(),
            next_page: "Cmd+Right".into(),
            prev_page: "Cmd+Left".into(),
            unmute_active: "Space".into(),
            toggle_mute: "M".into(),
            reload_active: "R".into(),
            reload_all: "Shift+R".into(),
            toggle_focus: "F".into(),
            exit_focus: "Escape".into(),
            toggle_detach: "D".into(),
            close_detached: "Shift+D".into(),
            grow_grid: "=".into(),
            shrink_grid: "-".into(),
            toggle_native_controls: "C".into(),
            show_all_groups: "0".into(),
            show_group_1: "1".into(),
            show_group_2: "2".into(),
            show_group_3: "3".into(),
            show_group_4: "4".into(),
            toggle_fullscreen: "Cmd+F".into(),
            reload_config: "Cmd+Shift+R".into(),
            quit: "Cmd+Q".into(),
        }
    }
}
