//! Palette of directive colors keyed by a single lowercase letter

use crate::assets::Lookup;
use crate::foundation::color::Color;

/// Palette keys in table order
pub const KEYS: [char; 10] = ['b', 'l', 'c', 'a', 'g', 'm', 'r', 'w', 'y', 'o'];

/// Color named by `key`, if any
pub fn color_for(key: char) -> Option<Color> {
    let color = match key {
        'b' => Color::black(),
        'l' => Color::blue(),
        'c' => Color::cyan(),
        'a' => Color::gray(),
        'g' => Color::green(),
        'm' => Color::magenta(),
        'r' => Color::red(),
        'w' => Color::white(),
        'y' => Color::yellow(),
        'o' => Color::orange(),
        _ => return None,
    };
    Some(color)
}

/// Resolve a directive value to a color
///
/// A missing or unknown value yields white as a fallback.
pub fn resolve(value: Option<char>) -> Lookup<Color> {
    match value.and_then(color_for) {
        Some(color) => Lookup::Found(color),
        None => {
            log::warn!("Unknown color {}", describe(value));
            Lookup::Fallback(Color::default())
        }
    }
}

pub(crate) fn describe(value: Option<char>) -> String {
    value.map_or_else(|| "<none>".to_string(), |c| format!("'{c}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        assert_eq!(resolve(Some('b')), Lookup::Found(Color::black()));
        assert_eq!(resolve(Some('o')), Lookup::Found(Color::rgb(1.0, 0.5, 0.0)));
        for key in KEYS {
            assert!(resolve(Some(key)).is_found(), "palette key {key} should resolve");
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_white() {
        let lookup = resolve(Some('x'));
        assert!(!lookup.is_found());
        assert_eq!(lookup.into_inner(), Color::white());

        assert_eq!(resolve(None), Lookup::Fallback(Color::white()));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        assert!(!resolve(Some('B')).is_found());
    }

    #[test]
    fn test_resolution_is_stable() {
        assert_eq!(resolve(Some('m')), resolve(Some('m')));
    }
}
