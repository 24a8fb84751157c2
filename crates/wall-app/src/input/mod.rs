//! Keyboard input: keybind parsing, key combinations, and the action registry.

mod key_combo;
mod keymap;
mod registry;
mod winit_keys;

pub use key_combo::KeyCombo;
pub use keymap::{parse_keybind, KeyBind, Modifier};
pub use registry::KeybindRegistry;
pub use winit_keys::normalize_winit_key;
