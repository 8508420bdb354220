//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    field::{FieldValue, Fields},
    formatter::{Formatter, FormatterConfig},
    level::Level,
    log_entry::{AttachedError, Entry},
    output_format::Format,
    sink::Sink,
};
use std::borrow::Borrow;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Error attached to a logger, shared between derived copies
pub type SharedError = Arc<AttachedError>;

/// Callback invoked when writing to a logger's own sink fails
pub type ErrorHandler = Arc<dyn Fn(&io::Error) + Send + Sync>;

/// Immutable structured logger.
///
/// Every `with_*` and `tee` call returns a new, independent logger; the
/// receiver is never changed. Derived loggers share the formatter and the
/// sink (including its write lock) with their source, while fields, the
/// attached error and the tee list belong to each value alone.
///
/// A `Logger::default()` has no threshold, formatter or sink, and emitting
/// through it does nothing.
///
/// # Example
///
/// ```
/// use logos::{JsonFormatter, Level, Logger, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::new(Level::DEBUG, JsonFormatter::default(), buffer.clone());
///
/// logger.with_field("user", "alice").info("login");
/// assert!(buffer.contents().contains(r#""msg":"login""#));
/// ```
#[derive(Clone, Default)]
pub struct Logger {
    level: Option<Level>,
    formatter: Option<Arc<dyn Formatter>>,
    sink: Option<Sink>,
    fields: Fields,
    error: Option<SharedError>,
    tees: Vec<Logger>,
    error_handler: Option<ErrorHandler>,
}

impl Logger {
    /// Create a root logger writing entries at or above `level` to `sink`
    #[must_use]
    pub fn new<F>(level: Level, formatter: F, sink: impl Into<Sink>) -> Self
    where
        F: Formatter + 'static,
    {
        Self {
            level: Some(level),
            formatter: Some(Arc::new(formatter)),
            sink: Some(sink.into()),
            ..Self::default()
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use logos::{Format, Level, Logger};
    ///
    /// let logger = Logger::builder()
    ///     .level(Level::INFO)
    ///     .format(Format::Json)
    ///     .field("service", "api")
    ///     .build();
    /// assert_eq!(logger.level(), Level::INFO);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Threshold of this logger; `INFO` when unset
    pub fn level(&self) -> Level {
        self.level.unwrap_or_default()
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn attached_error(&self) -> Option<&AttachedError> {
        self.error.as_deref()
    }

    pub fn tee_count(&self) -> usize {
        self.tees.len()
    }

    /// Whether threshold, formatter and sink are all present
    pub fn is_configured(&self) -> bool {
        self.level.is_some() && self.formatter.is_some() && self.sink.is_some()
    }

    /// Whether this logger's own threshold lets `level` through.
    ///
    /// Tee destinations are not consulted.
    pub fn is_level_enabled(&self, level: Level) -> bool {
        self.level.is_some_and(|threshold| threshold.allows(level))
    }

    /// Whether this logger or any tee destination, at any depth, would write `level`
    fn any_destination_enabled(&self, level: Level) -> bool {
        self.is_level_enabled(level)
            || self
                .tees
                .iter()
                .any(|tee| tee.any_destination_enabled(level))
    }

    // ------------------------------------------------------------------
    // Derivation
    // ------------------------------------------------------------------

    /// New logger with one more field
    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> Logger
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut logger = self.clone();
        logger.fields.insert(key.into(), value.into());
        logger
    }

    /// New logger with `fields` merged in; later keys overwrite earlier ones
    #[must_use]
    pub fn with_fields<I, K, V>(&self, fields: I) -> Logger
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut logger = self.clone();
        logger
            .fields
            .extend(fields.into_iter().map(|(k, v)| (k.into(), v.into())));
        logger
    }

    /// New logger with `err` attached.
    ///
    /// Replacing an already attached error is reported as a warning entry
    /// on this logger, carrying `old_error` and `new_error` fields.
    #[must_use]
    pub fn with_error<E>(&self, err: E) -> Logger
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        let new_error: SharedError = Arc::from(err.into());

        if let Some(old_error) = &self.error {
            self.with_field("old_error", old_error.to_string())
                .with_field("new_error", new_error.to_string())
                .warn("overwriting old error with new error");
        }

        let mut logger = self.clone();
        logger.error = Some(new_error);
        logger
    }

    /// New logger with its own threshold
    #[must_use]
    pub fn with_level(&self, level: Level) -> Logger {
        let mut logger = self.clone();
        logger.level = Some(level);
        logger
    }

    /// New logger that also sends every emission to copies of `loggers`.
    ///
    /// Each destination applies its own threshold, formatter, sink and error
    /// handler. With no loggers this is an unchanged copy of the receiver.
    #[must_use]
    pub fn tee<I>(&self, loggers: I) -> Logger
    where
        I: IntoIterator,
        I::Item: Borrow<Logger>,
    {
        let mut logger = self.clone();
        logger
            .tees
            .extend(loggers.into_iter().map(|tee| tee.borrow().clone()));
        logger
    }

    /// New logger whose own sink write failures are passed to `handler`.
    ///
    /// Tee destinations keep their own handlers.
    #[must_use]
    pub fn with_error_handler<F>(&self, handler: F) -> Logger
    where
        F: Fn(&io::Error) + Send + Sync + 'static,
    {
        let mut logger = self.clone();
        logger.error_handler = Some(Arc::new(handler));
        logger
    }

    // ------------------------------------------------------------------
    // Emission
    // ------------------------------------------------------------------

    /// Emit `message` at `level` to this logger and every tee destination
    pub fn log(&self, level: Level, message: impl AsRef<str>) {
        self.emit(level, message.as_ref());
    }

    /// Build the message only if some destination would write it
    pub fn log_fn<F>(&self, level: Level, message: F)
    where
        F: FnOnce() -> String,
    {
        if self.any_destination_enabled(level) {
            self.emit(level, &message());
        }
    }

    /// Run `log` only if some destination would write at `level`
    pub fn log_if<F>(&self, level: Level, log: F)
    where
        F: FnOnce(),
    {
        if self.any_destination_enabled(level) {
            log();
        }
    }

    /// Emit at [`Level::PRINT`], which passes every threshold
    #[inline]
    pub fn print(&self, message: impl AsRef<str>) {
        self.log(Level::PRINT, message);
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(Level::DEBUG, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Level::INFO, message);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(Level::WARN, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Level::ERROR, message);
    }

    /// Emit at [`Level::FATAL`] and return the fatal outcome.
    ///
    /// The entry is written first. The returned [`LoggerError::Fatal`] must be
    /// propagated so the caller's top-level harness can abort.
    ///
    /// ```
    /// use logos::{Level, Logger, LoggerError, SharedBuffer, TextFormatter};
    ///
    /// fn run(logger: &Logger) -> Result<(), LoggerError> {
    ///     return Err(logger.fatal("config missing"));
    /// }
    ///
    /// let logger = Logger::new(Level::DEBUG, TextFormatter::default(), SharedBuffer::new());
    /// assert!(run(&logger).unwrap_err().is_fatal());
    /// ```
    #[must_use = "the fatal outcome must be propagated to abort the caller"]
    pub fn fatal(&self, message: impl Into<String>) -> LoggerError {
        let message = message.into();
        self.emit(Level::FATAL, &message);
        LoggerError::fatal(message)
    }

    fn emit(&self, level: Level, message: &str) {
        let (Some(threshold), Some(formatter), Some(sink)) =
            (self.level, self.formatter.as_ref(), self.sink.as_ref())
        else {
            return;
        };

        if threshold.allows(level) {
            let mut entry = Entry::new(message, &self.fields);
            if let Some(err) = self.error.as_deref() {
                entry = entry.with_error(err);
            }

            let mut line = formatter.format(level, &entry);
            line.push('\n');

            if let Err(err) = sink.write_all(line.as_bytes()) {
                if let Some(handler) = &self.error_handler {
                    handler(&err);
                }
            }
        }

        for tee in &self.tees {
            tee.emit(level, message);
        }
    }

    /// Flush this logger's sink and every tee destination
    pub fn flush(&self) -> Result<()> {
        if let Some(sink) = &self.sink {
            sink.flush()?;
        }
        for tee in &self.tees {
            tee.flush()?;
        }
        Ok(())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("fields", &self.fields)
            .field("error", &self.error.as_ref().map(|e| e.to_string()))
            .field("tees", &self.tees)
            .field("configured", &self.is_configured())
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Defaults: threshold `DEBUG`, console format, stdout.
///
/// # Example
/// ```
/// use logos::{Format, Level, Logger, SharedBuffer};
///
/// let audit = SharedBuffer::new();
/// let logger = Logger::builder()
///     .level(Level::WARN)
///     .format(Format::Text)
///     .sink(SharedBuffer::new())
///     .tee(Logger::builder().format(Format::Json).sink(audit.clone()).build())
///     .error_handler(|err| eprintln!("log write failed: {}", err))
///     .build();
///
/// logger.debug("audited only");
/// assert_eq!(audit.lines().len(), 1);
/// ```
pub struct LoggerBuilder {
    level: Level,
    format: Format,
    formatter_config: FormatterConfig,
    formatter: Option<Arc<dyn Formatter>>,
    sink: Option<Sink>,
    fields: Fields,
    error_handler: Option<ErrorHandler>,
    tees: Vec<Logger>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: Level::DEBUG,
            format: Format::default(),
            formatter_config: FormatterConfig::default(),
            formatter: None,
            sink: None,
            fields: Fields::new(),
            error_handler: None,
            tees: Vec::new(),
        }
    }

    /// Set the threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Use one of the built-in formats; ignored when `formatter` is set
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Configuration for the built-in format
    #[must_use = "builder methods return a new value"]
    pub fn formatter_config(mut self, config: FormatterConfig) -> Self {
        self.formatter_config = config;
        self
    }

    /// Use a custom formatter
    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: impl Into<Sink>) -> Self {
        self.sink = Some(sink.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&io::Error) + Send + Sync + 'static,
    {
        self.error_handler = Some(Arc::new(handler));
        self
    }

    /// Add a tee destination
    #[must_use = "builder methods return a new value"]
    pub fn tee(mut self, logger: Logger) -> Self {
        self.tees.push(logger);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let formatter = self
            .formatter
            .unwrap_or_else(|| Arc::from(self.format.formatter(self.formatter_config)));

        Logger {
            level: Some(self.level),
            formatter: Some(formatter),
            sink: Some(self.sink.unwrap_or_else(Sink::stdout)),
            fields: self.fields,
            error: None,
            tees: self.tees,
            error_handler: self.error_handler,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
