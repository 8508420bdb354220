//! Timestamp formatting utilities
//!
//! Provides the built-in clock layouts a [`FormatterConfig`](super::formatter::FormatterConfig)
//! can use. Anything else can be injected as a plain closure.

use chrono::{DateTime, Local, TimeZone, Utc};
use std::sync::Arc;

/// Layout of the default timestamp, in local time
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Zero-argument timestamp producer
pub type Clock = Arc<dyn Fn() -> String + Send + Sync>;

/// Built-in timestamp layouts
///
/// # Examples
///
/// ```
/// use logos::TimestampFormat;
///
/// let timestamp = TimestampFormat::Iso8601.now();
/// assert!(timestamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// Local time without offset: `2025-01-08T10:30:45`
    #[default]
    Local,

    /// ISO 8601 UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 local time with offset: `2025-01-08T10:30:45.123456+02:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format, rendered in local time
    Custom(String),
}

impl TimestampFormat {
    /// Format a datetime according to this format
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        match self {
            TimestampFormat::Local => datetime
                .with_timezone(&Local)
                .format(DEFAULT_TIMESTAMP_FORMAT)
                .to_string(),
            TimestampFormat::Iso8601 => datetime
                .with_timezone(&Utc)
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
            TimestampFormat::Rfc3339 => datetime.with_timezone(&Local).to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime
                .with_timezone(&Local)
                .format(format_str)
                .to_string(),
        }
    }

    /// Format the current time
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Utc::now())
    }

    /// A clock producing the current time in this format
    #[must_use]
    pub fn clock(self) -> Clock {
        Arc::new(move || self.now())
    }
}
