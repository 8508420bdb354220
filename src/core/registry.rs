//! Process-wide level name and color registry
//!
//! Names and colors resolve in three tiers:
//! 1. a per-instance override map (carried by a `FormatterConfig`),
//! 2. this global registry,
//! 3. the hard-coded fallback: `"print"` for [`Level::PRINT`], `"unknown"`
//!    otherwise (colors fall back to none).
//!
//! Readers take a read lock; mutations take the write lock and are visible
//! to every formatter without an override for that level.

use super::level::Level;
use colored::Color;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;

struct LevelRegistry {
    names: HashMap<Level, String>,
    colors: HashMap<Level, Color>,
}

impl LevelRegistry {
    fn builtin() -> Self {
        let names = Level::builtin()
            .into_iter()
            .map(|(name, level)| (level, name.to_string()))
            .collect();

        let colors = HashMap::from([
            (Level::DEBUG, Color::Blue),
            (Level::INFO, Color::Green),
            (Level::WARN, Color::Yellow),
            (Level::ERROR, Color::Red),
            (Level::FATAL, Color::Magenta),
        ]);

        Self { names, colors }
    }
}

static REGISTRY: Lazy<RwLock<LevelRegistry>> = Lazy::new(|| RwLock::new(LevelRegistry::builtin()));

/// Register a name for `level`. An empty name removes the mapping.
pub fn set_level_name(level: Level, name: impl Into<String>) {
    let name = name.into();
    let mut registry = REGISTRY.write();
    if name.is_empty() {
        registry.names.remove(&level);
    } else {
        registry.names.insert(level, name);
    }
}

/// Register the console color for `level`
pub fn set_level_color(level: Level, color: Color) {
    REGISTRY.write().colors.insert(level, color);
}

/// Remove the console color for `level`; it renders uncolored afterwards
pub fn remove_level_color(level: Level) {
    REGISTRY.write().colors.remove(&level);
}

/// Restore the built-in names and colors, dropping every custom mapping
pub fn reset_levels() {
    *REGISTRY.write() = LevelRegistry::builtin();
}

/// Resolve the display name of `level`
pub fn level_name(level: Level, overrides: Option<&HashMap<Level, String>>) -> String {
    if let Some(name) = overrides.and_then(|names| names.get(&level)) {
        return name.clone();
    }

    if let Some(name) = REGISTRY.read().names.get(&level) {
        return name.clone();
    }

    if level == Level::PRINT {
        "print".to_string()
    } else {
        "unknown".to_string()
    }
}

/// Resolve the console color of `level`
pub fn level_color(level: Level, overrides: Option<&HashMap<Level, Color>>) -> Option<Color> {
    if let Some(color) = overrides.and_then(|colors| colors.get(&level)) {
        return Some(*color);
    }

    REGISTRY.read().colors.get(&level).copied()
}

/// Reverse lookup of a registered name, compared after `to_lowercase`
pub(crate) fn level_by_name(name: &str) -> Option<Level> {
    let wanted = name.to_lowercase();
    REGISTRY
        .read()
        .names
        .iter()
        .find(|(_, registered)| registered.to_lowercase() == wanted)
        .map(|(level, _)| *level)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVEL_APPLE: Level = Level::new(100);
    const LEVEL_BANANA: Level = Level::new(101);

    #[test]
    fn test_builtin_names() {
        let _guard = crate::global_state_lock();

        assert_eq!(level_name(Level::DEBUG, None), "debug");
        assert_eq!(level_name(Level::INFO, None), "info");
        assert_eq!(level_name(Level::WARN, None), "warn");
        assert_eq!(level_name(Level::ERROR, None), "error");
        assert_eq!(level_name(Level::FATAL, None), "fatal");
        assert_eq!(level_name(Level::PRINT, None), "print");
        assert_eq!(level_name(Level::new(42), None), "unknown");
    }

    #[test]
    fn test_register_and_unregister_name() {
        let _guard = crate::global_state_lock();

        set_level_name(LEVEL_APPLE, "apple");
        assert_eq!(LEVEL_APPLE.name(), "apple");
        assert_eq!("apple".parse::<Level>().unwrap(), LEVEL_APPLE);

        set_level_name(LEVEL_APPLE, "");
        assert_eq!(LEVEL_APPLE.name(), "unknown");
        assert!("apple".parse::<Level>().is_err());
    }

    #[test]
    fn test_non_ascii_name_parses_back() {
        let _guard = crate::global_state_lock();

        set_level_name(LEVEL_APPLE, "ÄPFEL");
        assert_eq!("äpfel".parse::<Level>().unwrap(), LEVEL_APPLE);
        assert_eq!("Äpfel".parse::<Level>().unwrap(), LEVEL_APPLE);

        set_level_name(LEVEL_APPLE, "");
    }

    #[test]
    fn test_print_falls_back_when_unregistered() {
        let _guard = crate::global_state_lock();

        set_level_name(Level::PRINT, "");
        assert_eq!(Level::PRINT.name(), "print");
        reset_levels();
        assert_eq!(Level::PRINT.name(), "print");
    }

    #[test]
    fn test_override_takes_precedence() {
        let _guard = crate::global_state_lock();
        set_level_name(LEVEL_BANANA, "banana");

        let overrides = HashMap::from([(Level::INFO, "information".to_string())]);
        assert_eq!(level_name(Level::INFO, Some(&overrides)), "information");
        // Falls through to the global registry, then to the fallback
        assert_eq!(level_name(LEVEL_BANANA, Some(&overrides)), "banana");
        assert_eq!(level_name(Level::new(7), Some(&overrides)), "unknown");

        set_level_name(LEVEL_BANANA, "");
    }

    #[test]
    fn test_colors() {
        let _guard = crate::global_state_lock();

        assert_eq!(level_color(Level::INFO, None), Some(Color::Green));
        assert_eq!(level_color(Level::PRINT, None), None);

        set_level_color(LEVEL_APPLE, Color::Cyan);
        assert_eq!(LEVEL_APPLE.color(), Some(Color::Cyan));

        let overrides = HashMap::from([(LEVEL_APPLE, Color::White)]);
        assert_eq!(level_color(LEVEL_APPLE, Some(&overrides)), Some(Color::White));

        remove_level_color(LEVEL_APPLE);
        assert_eq!(LEVEL_APPLE.color(), None);
    }

    #[test]
    fn test_reset_restores_builtin() {
        let _guard = crate::global_state_lock();

        set_level_name(LEVEL_BANANA, "banana");
        set_level_color(LEVEL_BANANA, Color::White);
        reset_levels();

        assert_eq!(LEVEL_BANANA.name(), "unknown");
        assert_eq!(LEVEL_BANANA.color(), None);
        assert_eq!(Level::INFO.color(), Some(Color::Green));
    }
}
