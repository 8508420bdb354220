//! Log level definitions

use super::error::LoggerError;
use super::registry;
use colored::Color;
use std::fmt;
use std::str::FromStr;

/// Severity of a log entry.
///
/// Levels are plain signed integers so applications can define their own in
/// between or beyond the built-in ones. Lower values are more verbose.
/// [`Level::PRINT`] is the largest representable value and therefore passes
/// every threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i32);

impl Level {
    pub const DEBUG: Level = Level(-1);
    pub const INFO: Level = Level(0);
    pub const WARN: Level = Level(1);
    pub const ERROR: Level = Level(2);
    pub const FATAL: Level = Level(3);
    /// Always emitted, regardless of threshold.
    pub const PRINT: Level = Level(i32::MAX);

    /// Create a custom level
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Level(value)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Whether an entry at `candidate` passes a threshold of `self`.
    ///
    /// A plain numeric comparison: `PRINT` passes because it is `i32::MAX`.
    #[inline]
    #[must_use]
    pub fn allows(self, candidate: Level) -> bool {
        candidate >= self
    }

    /// Name from the global registry
    #[must_use]
    pub fn name(self) -> String {
        registry::level_name(self, None)
    }

    /// Color from the global registry
    #[must_use]
    pub fn color(self) -> Option<Color> {
        registry::level_color(self, None)
    }

    /// Default name to level table used for parsing
    #[must_use]
    pub fn builtin() -> [(&'static str, Level); 6] {
        [
            ("debug", Level::DEBUG),
            ("info", Level::INFO),
            ("warn", Level::WARN),
            ("error", Level::ERROR),
            ("fatal", Level::FATAL),
            ("print", Level::PRINT),
        ]
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::INFO
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Level(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "warning" {
            return Ok(Level::WARN);
        }
        if let Some((_, level)) = Level::builtin().into_iter().find(|(name, _)| *name == wanted) {
            return Ok(level);
        }
        registry::level_by_name(&wanted).ok_or_else(|| LoggerError::UnknownLevel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_allows_at_or_above() {
        assert!(Level::INFO.allows(Level::INFO));
        assert!(Level::INFO.allows(Level::ERROR));
        assert!(!Level::INFO.allows(Level::DEBUG));
        assert!(!Level::FATAL.allows(Level::ERROR));
    }

    #[test]
    fn test_print_passes_every_threshold() {
        for threshold in [Level::DEBUG, Level::FATAL, Level::new(1_000), Level::PRINT] {
            assert!(threshold.allows(Level::PRINT));
        }
    }

    #[test]
    fn test_builtin_ordering() {
        assert!(Level::DEBUG < Level::INFO);
        assert!(Level::INFO < Level::WARN);
        assert!(Level::WARN < Level::ERROR);
        assert!(Level::ERROR < Level::FATAL);
        assert!(Level::FATAL < Level::PRINT);
    }

    #[test]
    fn test_parse_builtin_names() {
        assert_eq!("debug".parse::<Level>().unwrap(), Level::DEBUG);
        assert_eq!("INFO".parse::<Level>().unwrap(), Level::INFO);
        assert_eq!("Warning".parse::<Level>().unwrap(), Level::WARN);
        assert_eq!(" error ".parse::<Level>().unwrap(), Level::ERROR);
        assert_eq!("print".parse::<Level>().unwrap(), Level::PRINT);
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert!(matches!(err, LoggerError::UnknownLevel(ref name) if name == "verbose"));
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(Level::default(), Level::INFO);
    }
}
