//! Formatter trait and shared formatter configuration

use super::level::Level;
use super::log_entry::Entry;
use super::registry;
use super::timestamp::{Clock, TimestampFormat};
use colored::Color;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Renders one entry at one level into a single line (without newline).
///
/// Implementations must not panic; serialization problems are rendered
/// into the line instead.
pub trait Formatter: Send + Sync {
    fn format(&self, level: Level, entry: &Entry<'_>) -> String;
}

impl<F: Formatter + ?Sized> Formatter for Box<F> {
    fn format(&self, level: Level, entry: &Entry<'_>) -> String {
        (**self).format(level, entry)
    }
}

impl<F: Formatter + ?Sized> Formatter for Arc<F> {
    fn format(&self, level: Level, entry: &Entry<'_>) -> String {
        (**self).format(level, entry)
    }
}

/// Configuration shared by the built-in formatters
///
/// Carries the clock and optional per-instance level names and colors that
/// take precedence over the global registry.
///
/// # Examples
///
/// ```
/// use logos::{FormatterConfig, Level};
///
/// let config = FormatterConfig::new()
///     .with_clock(|| "2020-01-01T00:00:00".to_string())
///     .with_level_name(Level::WARN, "warning");
///
/// assert_eq!(config.timestamp(), "2020-01-01T00:00:00");
/// assert_eq!(config.level_name(Level::WARN), "warning");
/// assert_eq!(config.level_name(Level::INFO), "info");
/// ```
#[derive(Clone)]
pub struct FormatterConfig {
    clock: Clock,
    level_names: Option<HashMap<Level, String>>,
    level_colors: Option<HashMap<Level, Color>>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            clock: TimestampFormat::default().clock(),
            level_names: None,
            level_colors: None,
        }
    }
}

impl fmt::Debug for FormatterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterConfig")
            .field("level_names", &self.level_names)
            .field("level_colors", &self.level_colors)
            .finish_non_exhaustive()
    }
}

impl FormatterConfig {
    /// Create a new formatter configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject the timestamp producer
    #[must_use]
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    /// Use one of the built-in timestamp layouts
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.clock = format.clock();
        self
    }

    /// Override the name of `level` for formatters using this config only
    #[must_use]
    pub fn with_level_name(mut self, level: Level, name: impl Into<String>) -> Self {
        self.level_names
            .get_or_insert_with(HashMap::new)
            .insert(level, name.into());
        self
    }

    /// Override the color of `level` for formatters using this config only
    #[must_use]
    pub fn with_level_color(mut self, level: Level, color: Color) -> Self {
        self.level_colors
            .get_or_insert_with(HashMap::new)
            .insert(level, color);
        self
    }

    /// Current timestamp from the configured clock
    pub fn timestamp(&self) -> String {
        (self.clock)()
    }

    /// Name of `level`: override, then global registry, then fallback
    pub fn level_name(&self, level: Level) -> String {
        registry::level_name(level, self.level_names.as_ref())
    }

    /// Color of `level`: override, then global registry
    pub fn level_color(&self, level: Level) -> Option<Color> {
        registry::level_color(level, self.level_colors.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::Fields;

    struct Upper;

    impl Formatter for Upper {
        fn format(&self, _level: Level, entry: &Entry<'_>) -> String {
            entry.message.to_uppercase()
        }
    }

    #[test]
    fn test_boxed_and_shared_formatters_forward() {
        let fields = Fields::new();
        let entry = Entry::new("hi", &fields);

        let boxed: Box<dyn Formatter> = Box::new(Upper);
        let shared: Arc<dyn Formatter> = Arc::new(Upper);
        assert_eq!(boxed.format(Level::INFO, &entry), "HI");
        assert_eq!(shared.format(Level::INFO, &entry), "HI");
    }

    #[test]
    fn test_fixed_clock() {
        let config = FormatterConfig::new().with_clock(|| "static".to_string());
        assert_eq!(config.timestamp(), "static");
        assert_eq!(config.clone().timestamp(), "static");
    }

    #[test]
    fn test_overrides_do_not_touch_registry() {
        let config = FormatterConfig::new()
            .with_level_name(Level::ERROR, "err")
            .with_level_color(Level::ERROR, Color::BrightRed);

        assert_eq!(config.level_name(Level::ERROR), "err");
        assert_eq!(config.level_color(Level::ERROR), Some(Color::BrightRed));
        assert_eq!(Level::ERROR.name(), "error");
        assert_eq!(Level::ERROR.color(), Some(Color::Red));
    }
}
