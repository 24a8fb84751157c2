//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# News Wall Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# Edits are picked up while the wall is running.

[grid]
# rows = 4                         # 1-5
# cols = 4                         # 1-5
# show_native_controls = false
# health_poll_interval_secs = 6.0  # >= 0.5
# stall_ticks_threshold = 4        # >= 1

[wall]
# max_detached = 4                 # 1-16
# gap = 6
# outer_padding = 8
# focus_side_fraction = 0.22       # 0.05-0.5
# detached_width = 480
# detached_height = 270
# groups = ["Finance", "World", "Tech", "Arabic"]   # bound to keys 1-4

[keybinds]
# move_left = "Left"
# move_right = "Right"
# move_up = "Up"
# move_down = "Down"
# next_page = "Cmd+Right"
# prev_page = "Cmd+Left"
# unmute_active = "Space"
# toggle_mute = "M"
# reload_active = "R"
# reload_all = "Shift+R"
# toggle_focus = "F"
# exit_focus = "Escape"
# toggle_detach = "D"
# close_detached = "Shift+D"
# grow_grid = "="
# shrink_grid = "-"
# toggle_native_controls = "C"
# show_all_groups = "0"
# show_group_1 = "1"
# show_group_2 = "2"
# show_group_3 = "3"
# show_group_4 = "4"
# toggle_fullscreen = "Cmd+F"
# reload_config = "Cmd+Shift+R"
# quit = "Cmd+Q"

[logging]
# level = "info"                   # trace, debug, info, warn, error

# Channels. With none listed, a built-in list of 24/7 news streams is used.
# `id` defaults to the url.
#
# [[channels]]
# title = "Sky News"
# url = "https://www.youtube.com/watch?v=9Auq9mYxFEE"
# group = "World"
# enabled = true
"##
    .to_string()
}
