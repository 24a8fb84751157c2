//! Human-readable keybind strings such as `"Cmd+Right"` or `"Shift+R"`.

use wall_common::ConfigError;

/// A keyboard modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Ctrl,
    /// Alt key (Option on macOS).
    Alt,
    Shift,
    /// Cmd on macOS, Win on Windows, Super on Linux.
    Super,
}

/// A key binding: zero or more modifiers and a key name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBind {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}

/// Parse a keybind string into a [`KeyBind`].
///
/// `Cmd`/`Command` map to `Super` on macOS and `Ctrl` elsewhere, so the
/// default bindings work on every platform. The last token is the key.
pub fn parse_keybind(s: &str) -> Result<KeyBind, ConfigError> {
    let tokens: Vec<&str> = s.split('+').map(str::trim).collect();

    let Some((last, mods)) = tokens.split_last() else {
        return Err(ConfigError::ValidationError("empty keybind string".into()));
    };
    if last.is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "keybind '{s}' has no key component"
        )));
    }

    let mut modifiers = Vec::new();
    for token in mods {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            ConfigError::ValidationError(format!("unrecognized modifier: {token}"))
        })?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(last),
    })
}

fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" => {
            if cfg!(target_os = "macos") {
                Some(Modifier::Super)
            } else {
                Some(Modifier::Ctrl)
            }
        }
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "period" => ".".into(),
        "comma" => ",".into(),
        "minus" => "-".into(),
        "equal" | "equals" => "=".into(),
        "space" => "Space".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "up" => "Up".into(),
        "down" => "Down".into(),
        "left" => "Left".into(),
        "right" => "Right".into(),
        "home" => "Home".into(),
        "end" => "End".into(),
        "pageup" => "PageUp".into(),
        "pagedown" => "PageDown".into(),
        _ => {
            if token.chars().count() == 1 {
                token.to_uppercase()
            } else {
                let mut chars = lower.chars();
                match chars.next() {
                    Some(c) => {
                        let upper: String = c.to_uppercase().collect();
                        format!("{upper}{}", chars.as_str())
                    }
                    None => lower,
                }
            }
        }
    }
}
