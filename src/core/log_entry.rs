//! Log entry passed to formatters

use super::field::Fields;
use std::error::Error as StdError;

/// The attached error type carried by a logger
pub type AttachedError = dyn StdError + Send + Sync + 'static;

/// Per-emission bundle handed to a [`Formatter`](super::formatter::Formatter).
///
/// Borrowed from the emitting logger and discarded once formatted.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    pub message: &'a str,
    pub fields: &'a Fields,
    pub error: Option<&'a AttachedError>,
}

impl<'a> Entry<'a> {
    pub fn new(message: &'a str, fields: &'a Fields) -> Self {
        Self {
            message,
            fields,
            error: None,
        }
    }

    pub fn with_error(mut self, error: &'a AttachedError) -> Self {
        self.error = Some(error);
        self
    }

    /// Messages of the attached error and each of its sources, outermost first
    pub fn error_chain(&self) -> Vec<String> {
        let mut chain = Vec::new();
        let mut current: Option<&(dyn StdError + 'static)> = self.error.map(|e| e as _);
        while let Some(err) = current {
            chain.push(err.to_string());
            current = err.source();
        }
        chain
    }
}
