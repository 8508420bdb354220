//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Level name not present in the built-in table or the registry
    #[error("Invalid log level: '{0}'")]
    UnknownLevel(String),

    /// Output format name not recognized
    #[error("Invalid output format: '{0}'")]
    UnknownFormat(String),

    /// Formatter error with format type
    #[error("Formatter error ({format_type}): {message}")]
    FormatterError {
        format_type: String,
        message: String,
    },

    /// Terminal outcome of a fatal-level emission.
    ///
    /// The entry has already been written when this value is produced; the
    /// caller is expected to propagate it to its top-level harness and abort.
    #[error("fatal: {message}")]
    Fatal { message: String },
}

impl LoggerError {
    /// Create a formatter error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FormatterError {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

    /// Create a fatal error carrying the rendered message
    pub fn fatal(message: impl Into<String>) -> Self {
        LoggerError::Fatal {
            message: message.into(),
        }
    }

    /// Whether this error is the terminal outcome of a fatal emission
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, LoggerError::Fatal { .. })
    }
}
