//! Built-in formatter implementations

pub mod console;
pub mod json;
pub mod text;

pub use console::ConsoleFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

// Re-export trait for convenience
pub use crate::core::Formatter;

use crate::core::Entry;
use colored::Color;
use std::borrow::Cow;

/// Rendered in place of a field value that failed to serialize
pub const MARSHAL_ERROR_MARKER: &str = "<marshal_error>";

const ANSI_RESET: &str = "\x1b[0m";

/// `key=value` tuples for the text layouts, sorted by key.
///
/// Keys have line breaks and tabs escaped and values are JSON-encoded; the
/// attached error renders as a quoted `error` tuple, wrapped in `error_color`
/// when given.
pub(crate) fn render_tuples(entry: &Entry<'_>, error_color: Option<Color>) -> Vec<String> {
    let mut tuples: Vec<(&str, String)> = Vec::with_capacity(entry.fields.len() + 1);

    if entry.error.is_some() {
        let quoted = quote(&entry.error_chain().join(": "));
        tuples.push(("error", format!("error={}", paint(&quoted, error_color))));
    }

    for (key, value) in entry.fields {
        let rendered = value
            .to_json_value()
            .and_then(|json| serde_json::to_string(&json))
            .unwrap_or_else(|_| MARSHAL_ERROR_MARKER.to_string());
        tuples.push((key.as_str(), format!("{}={}", sanitize_message(key), rendered)));
    }

    // Stable: the error tuple stays ahead of a field that is also named "error"
    tuples.sort_by(|a, b| a.0.cmp(b.0));
    tuples.into_iter().map(|(_, tuple)| tuple).collect()
}

/// Space-joined tuples followed by a tab, or nothing when there are none
pub(crate) fn join_tuples(tuples: &[String]) -> String {
    if tuples.is_empty() {
        String::new()
    } else {
        format!("{}\t", tuples.join(" "))
    }
}

/// Escape line breaks and tabs so one entry always stays on one line
pub(crate) fn sanitize_message(message: &str) -> Cow<'_, str> {
    if message.contains(['\n', '\r', '\t']) {
        Cow::Owned(
            message
                .replace('\n', "\\n")
                .replace('\r', "\\r")
                .replace('\t', "\\t"),
        )
    } else {
        Cow::Borrowed(message)
    }
}

/// Wrap `text` in an ANSI foreground color followed by a reset
pub(crate) fn paint(text: &str, color: Option<Color>) -> String {
    match color {
        Some(color) => format!("\x1b[{}m{}{}", color.to_fg_str(), text, ANSI_RESET),
        None => text.to_string(),
    }
}

fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldValue, Fields};
    use std::collections::HashMap;
    use std::io;

    #[test]
    fn test_tuples_sorted_and_json_encoded() {
        let mut fields = Fields::new();
        fields.insert("zeta".to_string(), FieldValue::from(1));
        fields.insert("alpha".to_string(), FieldValue::from("a b"));
        let err = io::Error::new(io::ErrorKind::Other, "boom");
        let entry = Entry::new("msg", &fields).with_error(&err);

        let tuples = render_tuples(&entry, None);
        assert_eq!(tuples, vec!["alpha=\"a b\"", "error=\"boom\"", "zeta=1"]);
        assert_eq!(join_tuples(&tuples), "alpha=\"a b\" error=\"boom\" zeta=1\t");
    }

    #[test]
    fn test_marshal_failure_marker() {
        let mut fields = Fields::new();
        let bad: HashMap<(i32, i32), i32> = HashMap::from([((0, 0), 0)]);
        fields.insert("bad".to_string(), FieldValue::structured(bad));
        fields.insert("good".to_string(), FieldValue::from(true));
        let entry = Entry::new("msg", &fields);

        let tuples = render_tuples(&entry, None);
        assert_eq!(tuples, vec!["bad=<marshal_error>", "good=true"]);
    }

    #[test]
    fn test_keys_cannot_break_the_line() {
        let mut fields = Fields::new();
        fields.insert("user\nT\terror\tforged".to_string(), FieldValue::from(1));
        let entry = Entry::new("real", &fields);

        let tuples = render_tuples(&entry, None);
        assert_eq!(tuples, vec!["user\\nT\\terror\\tforged=1"]);
        assert!(!join_tuples(&tuples).trim_end_matches('\t').contains(['\n', '\t']));
    }

    #[test]
    fn test_empty_tuples_join_to_nothing() {
        assert_eq!(join_tuples(&[]), "");
    }

    #[test]
    fn test_sanitize_message() {
        assert_eq!(sanitize_message("plain"), "plain");
        assert_eq!(sanitize_message("a\nb\tc\r"), "a\\nb\\tc\\r");
    }

    #[test]
    fn test_paint() {
        assert_eq!(paint("info", Some(Color::Green)), "\x1b[32minfo\x1b[0m");
        assert_eq!(paint("print", None), "print");
    }
}
