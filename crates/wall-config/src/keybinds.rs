//! Keybind validation utilities and action mapping.

use crate::schema::KeybindConfig;
use std::collections::HashMap;
use wall_common::{Action, ConfigError, Direction};

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("move_left", &config.move_left),
        ("move_right", &config.move_right),
        ("move_up", &config.move_up),
        ("move_down", &config.move_down),
        ("next_page", &config.next_page),
        ("prev_page", &config.prev_page),
        ("unmute_active", &config.unmute_active),
        ("toggle_mute", &config.toggle_mute),
        ("reload_active", &config.reload_active),
        ("reload_all", &config.reload_all),
        ("toggle_focus", &config.toggle_focus),
        ("exit_focus", &config.exit_focus),
        ("toggle_detach", &config.toggle_detach),
        ("close_detached", &config.close_detached),
        ("grow_grid", &config.grow_grid),
        ("shrink_grid", &config.shrink_grid),
        ("toggle_native_controls", &config.toggle_native_controls),
        ("show_all_groups", &config.show_all_groups),
        ("show_group_1", &config.show_group_1),
        ("show_group_2", &config.show_group_2),
        ("show_group_3", &config.show_group_3),
        ("show_group_4", &config.show_group_4),
        ("toggle_fullscreen", &config.toggle_fullscreen),
        ("reload_config", &config.reload_config),
        ("quit", &config.quit),
    ]
    .into_iter()
    .map(|(name, binding)| (name, binding.as_str()))
    .collect()
}

/// The action a keybind name triggers.
pub fn action_for(name: &str) -> Option<Action> {
    let action = match name {
        "move_left" => Action::MoveActive(Direction::Left),
        "move_right" => Action::MoveActive(Direction::Right),
        "move_up" => Action::MoveActive(Direction::Up),
        "move_down" => Action::MoveActive(Direction::Down),
        "next_page" => Action::NextPage,
        "prev_page" => Action::PrevPage,
        "unmute_active" => Action::UnmuteActive,
        "toggle_mute" => Action::ToggleGlobalMute,
        "reload_active" => Action::ReloadActive,
        "reload_all" => Action::ReloadAll,
        "toggle_focus" => Action::ToggleFocus,
        "exit_focus" => Action::ExitFocus,
        "toggle_detach" => Action::ToggleDetach,
        "close_detached" => Action::CloseDetached,
        "grow_grid" => Action::GrowGrid,
        "shrink_grid" => Action::ShrinkGrid,
        "toggle_native_controls" => Action::ToggleNativeControls,
        "show_all_groups" => Action::SetGroup(0),
        "show_group_1" => Action::SetGroup(1),
        "show_group_2" => Action::SetGroup(2),
        "show_group_3" => Action::SetGroup(3),
        "show_group_4" => Action::SetGroup(4),
        "toggle_fullscreen" => Action::ToggleFullscreen,
        "reload_config" => Action::ReloadConfig,
        "quit" => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Every non-empty binding paired with its action.
pub fn bound_actions(config: &KeybindConfig) -> Vec<(Action, &str)> {
    all_keybinds(config)
        .into_iter()
        .filter(|(_, binding)| !binding.trim().is_empty())
        .filter_map(|(name, binding)| action_for(name).map(|action| (action, binding)))
        .collect()
}

/// Validate that no two keybinds are mapped to the same key combination.
///
/// Bindings compare case-insensitively; empty bindings are ignored.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let binds = all_keybinds(config);
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (name, binding) in &binds {
        if binding.trim().is_empty() {
            continue;
        }
        let key = binding.trim().to_ascii_lowercase();
        if let Some(existing_name) = seen.get(&key) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(key, name);
    }

    Ok(())
}
