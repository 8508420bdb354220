//! Request-scoped logger propagation
//!
//! Two carriers are provided:
//! - [`Context`]: an explicit, immutable key-value carrier passed down a call chain
//! - [`scope`] / [`current`]: a tokio task-local logger (feature `task-context`)
//!
//! Both fall back to the process-wide default logger when nothing was stored.

use crate::core::Logger;
use crate::defaults::default_logger;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Key under which [`with_logger`] stores the logger
pub const LOGGER_KEY: &str = "logos.logger";

type ContextValue = Arc<dyn Any + Send + Sync>;

/// Immutable request-scoped key-value carrier.
///
/// `with_value` returns a new carrier; the receiver keeps its values.
#[derive(Clone, Default)]
pub struct Context {
    values: Arc<HashMap<String, ContextValue>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value<T>(&self, key: impl Into<String>, value: T) -> Context
    where
        T: Any + Send + Sync,
    {
        let mut values = HashMap::clone(&self.values);
        values.insert(key.into(), Arc::new(value));
        Context {
            values: Arc::new(values),
        }
    }

    /// Value stored under `key`, if present and of type `T`
    pub fn value<T: Any>(&self, key: &str) -> Option<&T> {
        self.values.get(key)?.downcast_ref::<T>()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.values.keys().collect();
        keys.sort();
        f.debug_struct("Context").field("keys", &keys).finish()
    }
}

/// Carrier derived from `ctx` (or an empty one) with `logger` stored in it
pub fn with_logger(ctx: Option<&Context>, logger: Logger) -> Context {
    ctx.cloned().unwrap_or_default().with_value(LOGGER_KEY, logger)
}

/// Logger stored in `ctx`, or the default logger when there is none
///
/// An unconfigured stored logger counts as none.
pub fn from_context(ctx: Option<&Context>) -> Logger {
    ctx.and_then(|ctx| ctx.value::<Logger>(LOGGER_KEY))
        .filter(|logger| logger.is_configured())
        .cloned()
        .unwrap_or_else(default_logger)
}

#[cfg(feature = "task-context")]
tokio::task_local! {
    static TASK_LOGGER: Logger;
}

/// Run `fut` with `logger` as the task-scoped logger
///
/// # Example
///
/// ```
/// use logos::{context, Level, Logger, SharedBuffer, TextFormatter};
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::new(Level::DEBUG, TextFormatter::default(), buffer.clone())
///     .with_field("request_id", "r-42");
///
/// let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// rt.block_on(context::scope(logger, async {
///     context::current().info("handled");
/// }));
/// assert!(buffer.contents().contains("request_id=\"r-42\""));
/// ```
#[cfg(feature = "task-context")]
pub async fn scope<F>(logger: Logger, fut: F) -> F::Output
where
    F: std::future::Future,
{
    TASK_LOGGER.scope(logger, fut).await
}

/// Task-scoped logger, or the default logger outside of [`scope`]
#[cfg(feature = "task-context")]
pub fn current() -> Logger {
    TASK_LOGGER
        .try_with(Logger::clone)
        .unwrap_or_else(|_| default_logger())
}
