//! Colored console formatter

use super::{join_tuples, paint, render_tuples, sanitize_message};
use crate::core::{Entry, Formatter, FormatterConfig, Level};

/// Same layout as [`TextFormatter`](super::TextFormatter), with the level name
/// and the attached error wrapped in the level's ANSI color.
#[derive(Debug, Clone, Default)]
pub struct ConsoleFormatter {
    config: FormatterConfig,
}

impl ConsoleFormatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }
}

impl Formatter for ConsoleFormatter {
    fn format(&self, level: Level, entry: &Entry<'_>) -> String {
        let color = self.config.level_color(level);
        let tuples = render_tuples(entry, color);
        format!(
            "{}\t{}\t{}{}",
            self.config.timestamp(),
            paint(&self.config.level_name(level), color),
            join_tuples(&tuples),
            sanitize_message(entry.message)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldValue, Fields};
    use colored::Color;
    use std::io;

    fn formatter() -> ConsoleFormatter {
        ConsoleFormatter::new(FormatterConfig::new().with_clock(|| "T".to_string()))
    }

    #[test]
    fn test_level_is_colored() {
        let fields = Fields::new();
        let line = formatter().format(Level::ERROR, &Entry::new("oops", &fields));
        assert_eq!(line, "T\t\x1b[31merror\x1b[0m\toops");
    }

    #[test]
    fn test_error_is_colored() {
        let mut fields = Fields::new();
        fields.insert("host".to_string(), FieldValue::from("db"));
        let err = io::Error::new(io::ErrorKind::Other, "timeout");
        let entry = Entry::new("connect", &fields).with_error(&err);

        let line = formatter().format(Level::WARN, &entry);
        assert_eq!(
            line,
            "T\t\x1b[33mwarn\x1b[0m\terror=\x1b[33m\"timeout\"\x1b[0m host=\"db\"\tconnect"
        );
    }

    #[test]
    fn test_print_is_uncolored() {
        let _guard = crate::global_state_lock();
        let fields = Fields::new();
        let line = formatter().format(Level::PRINT, &Entry::new("banner", &fields));
        assert_eq!(line, "T\tprint\tbanner");
    }

    #[test]
    fn test_config_color_override() {
        let formatter = ConsoleFormatter::new(
            FormatterConfig::new()
                .with_clock(|| "T".to_string())
                .with_level_color(Level::INFO, Color::Cyan),
        );
        let fields = Fields::new();
        let line = formatter.format(Level::INFO, &Entry::new("m", &fields));
        assert_eq!(line, "T\t\x1b[36minfo\x1b[0m\tm");
    }
}
