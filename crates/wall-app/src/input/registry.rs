use std::collections::HashMap;

use wall_common::Action;
use wall_config::keybinds::bound_actions;
use wall_config::schema::KeybindConfig;

use super::key_combo::KeyCombo;
use super::keymap::parse_keybind;

/// Maps key combinations to [`Action`]s.
///
/// Built from [`KeybindConfig`] at startup and rebuilt on config reload.
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeybindRegistry {
    /// Invalid keybind strings are logged and skipped. Empty ones are unbound.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mut bindings = HashMap::new();

        for (action, binding) in bound_actions(config) {
            match parse_keybind(binding) {
                Ok(kb) => {
                    bindings.insert(KeyCombo::from_keybind(&kb), action);
                }
                Err(e) => {
                    tracing::warn!("invalid keybind '{binding}': {e}");
                }
            }
        }

        Self { bindings }
    }

    pub fn lookup(&self, combo: &KeyCombo) -> Option<&Action> {
        self.bindings.get(combo)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wall_common::Direction;

    fn combo(shift: bool, key: &str) -> KeyCombo {
        KeyCombo::from_winit(false, false, shift, false, key.into())
    }

    #[test]
    fn defaults_bind_every_action() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        assert_eq!(registry.len(), 25);
    }

    #[test]
    fn default_lookups() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        assert_eq!(
            registry.lookup(&combo(false, "Left")),
            Some(&Action::MoveActive(Direction::Left))
        );
        assert_eq!(registry.lookup(&combo(false, "R")), Some(&Action::ReloadActive));
        assert_eq!(registry.lookup(&combo(true, "R")), Some(&Action::ReloadAll));
        assert_eq!(registry.lookup(&combo(false, "Space")), Some(&Action::UnmuteActive));
        assert_eq!(registry.lookup(&combo(false, "0")), Some(&Action::SetGroup(0)));
        assert_eq!(registry.lookup(&combo(false, "3")), Some(&Action::SetGroup(3)));
        assert_eq!(registry.lookup(&combo(false, "=")), Some(&Action::GrowGrid));
    }

    #[test]
    fn invalid_and_empty_bindings_are_skipped() {
        let config = KeybindConfig {
            quit: "Hyper+Q".into(),
            reload_config: String::new(),
            ..Default::default()
        };
        let registry = KeybindRegistry::from_config(&config);
        assert_eq!(registry.len(), 23);
    }

    #[test]
    fn unbound_combo_misses() {
        let registry = KeybindRegistry::from_config(&KeybindConfig::default());
        assert!(registry.lookup(&combo(true, "Z")).is_none());
    }
}
