//! Process-wide default logger
//!
//! The default logger is built on first use from the environment:
//! - `LOGOS_LEVEL`: threshold name (unknown or unset: `debug`)
//! - `LOGOS_FORMAT`: `json`, `text` or `console` (unknown or unset: `console`)
//!
//! It always writes to stdout. The functions in this module delegate to a
//! snapshot of the current default logger; replacing the default never
//! affects loggers already derived from it.
//!
//! # Example
//!
//! ```
//! use logos::defaults;
//!
//! defaults::with_field("component", "startup").info("ready");
//! ```

use crate::core::{FieldValue, Format, Level, Logger, LoggerError};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::borrow::Borrow;
use std::env;
use std::error::Error as StdError;

/// Environment variable holding the default threshold name
pub const LEVEL_ENV_VAR: &str = "LOGOS_LEVEL";

/// Environment variable holding the default output format
pub const FORMAT_ENV_VAR: &str = "LOGOS_FORMAT";

static DEFAULT_LOGGER: Lazy<RwLock<Logger>> = Lazy::new(|| RwLock::new(logger_from_env()));

fn resolve_settings(level: Option<&str>, format: Option<&str>) -> (Level, Format) {
    let level = level
        .and_then(|name| name.parse::<Level>().ok())
        .unwrap_or(Level::DEBUG);
    let format = format
        .and_then(|name| name.parse::<Format>().ok())
        .unwrap_or_default();
    (level, format)
}

/// Stdout logger for the given level and format names.
///
/// Unknown or missing names fall back to `debug` and console output.
pub fn configured_logger(level: Option<&str>, format: Option<&str>) -> Logger {
    let (level, format) = resolve_settings(level, format);
    Logger::builder().level(level).format(format).build()
}

/// Stdout logger configured from `LOGOS_LEVEL` and `LOGOS_FORMAT`
pub fn logger_from_env() -> Logger {
    let level = env::var(LEVEL_ENV_VAR).ok();
    let format = env::var(FORMAT_ENV_VAR).ok();
    configured_logger(level.as_deref(), format.as_deref())
}

/// Snapshot of the current default logger
pub fn default_logger() -> Logger {
    DEFAULT_LOGGER.read().clone()
}

pub fn set_default_logger(logger: Logger) {
    *DEFAULT_LOGGER.write() = logger;
}

/// Replace the default logger with a copy using `level` as threshold
pub fn set_default_level(level: Level) {
    let mut default = DEFAULT_LOGGER.write();
    *default = default.with_level(level);
}

pub fn with_field<K, V>(key: K, value: V) -> Logger
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    default_logger().with_field(key, value)
}

pub fn with_fields<I, K, V>(fields: I) -> Logger
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<FieldValue>,
{
    default_logger().with_fields(fields)
}

pub fn with_error<E>(err: E) -> Logger
where
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    default_logger().with_error(err)
}

pub fn with_level(level: Level) -> Logger {
    default_logger().with_level(level)
}

pub fn tee<I>(loggers: I) -> Logger
where
    I: IntoIterator,
    I::Item: Borrow<Logger>,
{
    default_logger().tee(loggers)
}

pub fn is_level_enabled(level: Level) -> bool {
    DEFAULT_LOGGER.read().is_level_enabled(level)
}

pub fn log(level: Level, message: impl AsRef<str>) {
    default_logger().log(level, message);
}

pub fn log_fn<F>(level: Level, message: F)
where
    F: FnOnce() -> String,
{
    default_logger().log_fn(level, message);
}

pub fn log_if<F>(level: Level, log: F)
where
    F: FnOnce(),
{
    default_logger().log_if(level, log);
}

pub fn print(message: impl AsRef<str>) {
    default_logger().print(message);
}

pub fn debug(message: impl AsRef<str>) {
    default_logger().debug(message);
}

pub fn info(message: impl AsRef<str>) {
    default_logger().info(message);
}

pub fn warn(message: impl AsRef<str>) {
    default_logger().warn(message);
}

pub fn error(message: impl AsRef<str>) {
    default_logger().error(message);
}

#[must_use = "the fatal outcome must be propagated to abort the caller"]
pub fn fatal(message: impl Into<String>) -> LoggerError {
    default_logger().fatal(message)
}
