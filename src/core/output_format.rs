//! Output format selection
//!
//! Provides the three built-in formats:
//! - Json: one JSON object per line
//! - Text: tab-separated plain text
//! - Console: tab-separated text with ANSI colors (default)

use super::error::LoggerError;
use super::formatter::{Formatter, FormatterConfig};
use crate::formatters::{ConsoleFormatter, JsonFormatter, TextFormatter};
use std::fmt;
use std::str::FromStr;

/// Output format for log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// Example: `{"level":"info","timestamp":"2025-01-08T10:30:45","msg":"Request processed"}`
    Json,

    /// Example: `2025-01-08T10:30:45	info	Request processed`
    Text,

    /// Same as `Text` with the level colored
    #[default]
    Console,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Json, Format::Text, Format::Console];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Text => "TEXT",
            Format::Console => "CONSOLE",
        }
    }

    /// Build the formatter for this format
    pub fn formatter(self, config: FormatterConfig) -> Box<dyn Formatter> {
        match self {
            Format::Json => Box::new(JsonFormatter::new(config)),
            Format::Text => Box::new(TextFormatter::new(config)),
            Format::Console => Box::new(ConsoleFormatter::new(config)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "text" => Ok(Format::Text),
            "console" => Ok(Format::Console),
            _ => Err(LoggerError::UnknownFormat(s.to_string())),
        }
    }
}
