//! JSON formatter for structured logging

use crate::core::{Entry, Formatter, FormatterConfig, Level, LoggerError};
use serde::Serialize;
use serde_json::{Map, Value};

/// Returned when even the fallback record cannot be serialized
const CATASTROPHIC_FALLBACK: &str =
    r#"{"level":"error","msg":"[LOG ERROR: catastrophic marshal failure]"}"#;

/// One JSON object per line
///
/// Example: `{"level":"info","timestamp":"2025-01-08T10:30:45","fields":{"user":"alice"},"msg":"login"}`
///
/// If any field fails to serialize, the whole line is replaced by an
/// error record describing the failure, so the output is always valid JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    config: FormatterConfig,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    level: &'a str,
    timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    fields: Map<String, Value>,
    msg: &'a str,
}

impl JsonFormatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// A single error renders as a string, a chained error as a list of messages
    fn error_value(entry: &Entry<'_>) -> Option<Value> {
        if entry.error.is_none() {
            return None;
        }
        let mut chain = entry.error_chain();
        if chain.len() == 1 {
            chain.pop().map(Value::String)
        } else {
            Some(Value::Array(chain.into_iter().map(Value::String).collect()))
        }
    }

    fn fields_object(entry: &Entry<'_>) -> crate::Result<Map<String, Value>> {
        let mut object = Map::new();
        for (key, value) in entry.fields {
            object.insert(key.clone(), value.to_json_value()?);
        }
        Ok(object)
    }

    fn render(&self, level: Level, entry: &Entry<'_>) -> crate::Result<String> {
        let level_name = self.config.level_name(level);
        let line = JsonLine {
            level: &level_name,
            timestamp: self.config.timestamp(),
            error: Self::error_value(entry),
            fields: Self::fields_object(entry)?,
            msg: entry.message,
        };
        Ok(serde_json::to_string(&line)?)
    }

    fn fallback(&self, cause: LoggerError) -> String {
        let error = LoggerError::formatter(
            "JSON",
            format!("failed to marshal log entry: {}", cause),
        );
        let line = JsonLine {
            level: "error",
            timestamp: self.config.timestamp(),
            error: Some(Value::String(error.to_string())),
            fields: Map::new(),
            msg: "[LOG ERROR: failed to marshal entry]",
        };
        serde_json::to_string(&line).unwrap_or_else(|_| CATASTROPHIC_FALLBACK.to_string())
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, level: Level, entry: &Entry<'_>) -> String {
        self.render(level, entry)
            .unwrap_or_else(|cause| self.fallback(cause))
    }
}
