//! Logging macros for ergonomic log message formatting.
//!
//! These macros take an explicit logger followed by `format!` arguments.
//! The message is only formatted when some destination would write it.
//!
//! # Examples
//!
//! ```
//! use logos::{info, Level, Logger, SharedBuffer, TextFormatter};
//!
//! let buffer = SharedBuffer::new();
//! let logger = Logger::new(Level::DEBUG, TextFormatter::default(), buffer.clone());
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! assert!(buffer.contents().contains("Server listening on port 8080"));
//! ```

/// Log a formatted message at an explicit level.
///
/// # Examples
///
/// ```
/// # use logos::{Level, Logger};
/// # let logger = Logger::default();
/// use logos::log;
/// log!(logger, Level::INFO, "Simple message");
/// log!(logger, Level::ERROR, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_fn($level, || format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::DEBUG, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::INFO, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::WARN, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::ERROR, $($arg)+)
    };
}

/// Log a fatal-level message and evaluate to the fatal [`LoggerError`](crate::LoggerError).
///
/// # Examples
///
/// ```
/// # use logos::{Level, Logger, LoggerError};
/// use logos::fatal;
///
/// fn start(logger: &Logger, port: u16) -> Result<(), LoggerError> {
///     Err(fatal!(logger, "cannot bind port {}", port))
/// }
///
/// assert!(start(&Logger::default(), 80).unwrap_err().is_fatal());
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format!($($arg)+))
    };
}
