//! Core logger types and traits

pub mod error;
pub mod field;
pub mod formatter;
pub mod level;
pub mod log_entry;
pub mod logger;
pub mod output_format;
pub mod registry;
pub mod sink;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use field::{FieldValue, Fields, StructuredValue};
pub use formatter::{Formatter, FormatterConfig};
pub use level::Level;
pub use log_entry::{AttachedError, Entry};
pub use logger::{ErrorHandler, Logger, LoggerBuilder, SharedError};
pub use output_format::Format;
pub use registry::{
    level_color, level_name, remove_level_color, reset_levels, set_level_color, set_level_name,
};
pub use sink::{MultiWriter, SharedBuffer, Sink};
pub use timestamp::{Clock, TimestampFormat, DEFAULT_TIMESTAMP_FORMAT};
