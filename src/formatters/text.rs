//! Plain text formatter

use super::{join_tuples, render_tuples, sanitize_message};
use crate::core::{Entry, Formatter, FormatterConfig, Level};

/// Tab-separated `timestamp, level, key=value tuples, message`, uncolored.
///
/// Example: `2025-01-08T10:30:45	info	user="alice"	login`
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    config: FormatterConfig,
}

impl TextFormatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }
}

impl Formatter for TextFormatter {
    fn format(&self, level: Level, entry: &Entry<'_>) -> String {
        let tuples = render_tuples(entry, None);
        format!(
            "{}\t{}\t{}{}",
            self.config.timestamp(),
            self.config.level_name(level),
            join_tuples(&tuples),
            sanitize_message(entry.message)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldValue, Fields};
    use std::io;

    fn formatter() -> TextFormatter {
        TextFormatter::new(FormatterConfig::new().with_clock(|| "2020-01-01T00:00:00".to_string()))
    }

    #[test]
    fn test_message_only() {
        let fields = Fields::new();
        let line = formatter().format(Level::INFO, &Entry::new("hello", &fields));
        assert_eq!(line, "2020-01-01T00:00:00\tinfo\thello");
    }

    #[test]
    fn test_fields_and_error() {
        let mut fields = Fields::new();
        fields.insert("user".to_string(), FieldValue::from("alice"));
        fields.insert("attempt".to_string(), FieldValue::from(2));
        let err = io::Error::new(io::ErrorKind::Other, "bad password");
        let entry = Entry::new("login failed", &fields).with_error(&err);

        let line = formatter().format(Level::WARN, &entry);
        assert_eq!(
            line,
            "2020-01-01T00:00:00\twarn\tattempt=2 error=\"bad password\" user=\"alice\"\tlogin failed"
        );
    }

    #[test]
    fn test_no_color_codes() {
        let fields = Fields::new();
        let line = formatter().format(Level::ERROR, &Entry::new("x", &fields));
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn test_message_stays_on_one_line() {
        let fields = Fields::new();
        let line = formatter().format(Level::INFO, &Entry::new("a\nfake entry", &fields));
        assert!(!line.contains('\n'));
        assert!(line.ends_with("a\\nfake entry"));
    }

    #[test]
    fn test_config_level_name_override() {
        let formatter = TextFormatter::new(
            FormatterConfig::new()
                .with_clock(String::new)
                .with_level_name(Level::INFO, "INFO"),
        );
        let fields = Fields::new();
        let line = formatter.format(Level::INFO, &Entry::new("m", &fields));
        assert_eq!(line, "\tINFO\tm");
    }
}
