/// Convert a winit key name to the normalized string used by [`KeyCombo`].
///
/// Winit reports named keys by their `Debug` name (`"ArrowUp"`) and
/// characters as typed (`"r"`, `" "`).
///
/// [`KeyCombo`]: super::KeyCombo
pub fn normalize_winit_key(key: &str) -> String {
    match key {
        "ArrowUp" => "Up".to_string(),
        "ArrowDown" => "Down".to_string(),
        "ArrowLeft" => "Left".to_string(),
        "ArrowRight" => "Right".to_string(),
        " " => "Space".to_string(),
        _ => {
            if key.chars().count() == 1 {
                key.to_uppercase()
            } else {
                key.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys() {
        assert_eq!(normalize_winit_key("ArrowUp"), "Up");
        assert_eq!(normalize_winit_key("ArrowDown"), "Down");
        assert_eq!(normalize_winit_key("ArrowLeft"), "Left");
        assert_eq!(normalize_winit_key("ArrowRight"), "Right");
    }

    #[test]
    fn space_both_ways() {
        assert_eq!(normalize_winit_key(" "), "Space");
        assert_eq!(normalize_winit_key("Space"), "Space");
    }

    #[test]
    fn characters_are_uppercased() {
        assert_eq!(normalize_winit_key("r"), "R");
        assert_eq!(normalize_winit_key("="), "=");
        assert_eq!(normalize_winit_key("1"), "1");
    }

    #[test]
    fn named_keys_pass_through() {
        assert_eq!(normalize_winit_key("Escape"), "Escape");
        assert_eq!(normalize_winit_key("F5"), "F5");
    }
}
