//! # logos
//!
//! Structured, leveled logging built around an immutable logger value.
//!
//! ## Features
//!
//! - **Immutable loggers**: `with_field`, `with_error`, `with_level` and `tee`
//!   return new loggers and never change their source
//! - **Three formats**: JSON lines, tab-separated text and colored console output
//! - **Tee fan-out**: one emission reaches several loggers, each with its own
//!   threshold, format and sink
//! - **Custom levels**: register names and colors for any integer level
//! - **Default logger**: process-wide logger configured from `LOGOS_LEVEL`
//!   and `LOGOS_FORMAT`
//! - **Context propagation**: carry a logger through a call chain or a tokio task
//!
//! ## Example
//!
//! ```
//! use logos::prelude::*;
//!
//! let buffer = SharedBuffer::new();
//! let logger = Logger::builder()
//!     .level(Level::INFO)
//!     .format(Format::Json)
//!     .sink(buffer.clone())
//!     .build();
//!
//! let request = logger.with_field("request_id", "r-7");
//! request.debug("filtered");
//! request.with_error("timeout").error("upstream failed");
//!
//! assert_eq!(buffer.lines().len(), 1);
//! ```

pub mod context;
pub mod core;
pub mod defaults;
pub mod formatters;
pub mod macros;

pub mod prelude {
    pub use crate::context::{from_context, with_logger, Context};
    pub use crate::core::{
        Entry, FieldValue, Fields, Format, Formatter, FormatterConfig, Level, Logger,
        LoggerBuilder, LoggerError, MultiWriter, Result, SharedBuffer, Sink, TimestampFormat,
    };
    pub use crate::formatters::{ConsoleFormatter, JsonFormatter, TextFormatter};
}

pub use crate::context::{from_context, with_logger, Context};
pub use crate::core::{
    level_color, level_name, remove_level_color, reset_levels, set_level_color, set_level_name,
    AttachedError, Clock, Entry, ErrorHandler, FieldValue, Fields, Format, Formatter,
    FormatterConfig, Level, Logger, LoggerBuilder, LoggerError, MultiWriter, Result,
    SharedBuffer, SharedError, Sink, StructuredValue, TimestampFormat, DEFAULT_TIMESTAMP_FORMAT,
};
pub use crate::formatters::{ConsoleFormatter, JsonFormatter, TextFormatter};
pub use colored::Color;

/// Serializes unit tests that touch the level registry, the default logger
/// or environment variables.
#[cfg(test)]
pub(crate) fn global_state_lock() -> parking_lot::MutexGuard<'static, ()> {
    static LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());
    LOCK.lock()
}
