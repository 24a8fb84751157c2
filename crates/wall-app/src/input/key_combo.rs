use super::keymap::{KeyBind, Modifier};

const MOD_CTRL: u8 = 0b0001;
const MOD_ALT: u8 = 0b0010;
const MOD_SHIFT: u8 = 0b0100;
const MOD_SUPER: u8 = 0b1000;

/// A hashable key combination used for registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub mods: u8,
    pub key: String,
}

impl KeyCombo {
    pub fn from_keybind(kb: &KeyBind) -> Self {
        let mods = kb.modifiers.iter().fold(0u8, |acc, m| {
            acc | match m {
                Modifier::Ctrl => MOD_CTRL,
                Modifier::Alt => MOD_ALT,
                Modifier::Shift => MOD_SHIFT,
                Modifier::Super => MOD_SUPER,
            }
        });
        Self {
            mods,
            key: kb.key.clone(),
        }
    }

    /// Build a combo from live modifier state and a normalized key name.
    pub fn from_winit(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: String) -> Self {
        let mut mods = 0u8;
        if ctrl {
            mods |= MOD_CTRL;
        }
        if alt {
            mods |= MOD_ALT;
        }
        if shift {
            mods |= MOD_SHIFT;
        }
        if super_key {
            mods |= MOD_SUPER;
        }
        Self { mods, key }
    }
}
