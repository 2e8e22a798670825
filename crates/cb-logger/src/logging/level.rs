//! Record severity

use serde::{Deserialize, Serialize};
use tracing::Metadata;

/// Target attached to every event emitted by this crate.
pub(crate) const RECORD_TARGET: &str = "cb_logger";

/// Target used for fatal events. `tracing` tops out at ERROR, so fatal
/// records travel at ERROR level and are told apart by target.
pub(crate) const FATAL_TARGET: &str = "cb_logger::fatal";

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl Level {
    /// All levels, lowest first
    pub const ALL: [Level; 5] = [Level::Debug, Level::Info, Level::Warn, Level::Error, Level::Fatal];

    /// Upper-case label written into every record
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// The backend level this severity is dispatched at
    pub(crate) fn to_tracing(self) -> tracing::Level {
        match self {
            Level::Debug => tracing::Level::DEBUG,
            Level::Info => tracing::Level::INFO,
            Level::Warn => tracing::Level::WARN,
            Level::Error | Level::Fatal => tracing::Level::ERROR,
        }
    }

    /// Recover the severity of an event from its metadata.
    ///
    /// TRACE has no counterpart and folds into `Debug`.
    pub(crate) fn from_metadata(metadata: &Metadata<'_>) -> Self {
        if metadata.target() == FATAL_TARGET {
            return Level::Fatal;
        }
        match *metadata.level() {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::INFO => Level::Info,
            _ => Level::Debug,
        }
    }

    /// ANSI colour code for the level label
    pub(crate) fn ansi_color(&self) -> &'static str {
        match self {
            Level::Debug => "\x1b[35m",
            Level::Info => "\x1b[32m",
            Level::Warn => "\x1b[33m",
            Level::Error => "\x1b[31m",
            Level::Fatal => "\x1b[1;31m",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_levels() {
        assert!(Level::Info > Level::Debug);
        assert!(Level::Warn > Level::Info);
        assert!(Level::Error > Level::Warn);
        assert!(Level::Fatal > Level::Error);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = Level::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(labels, ["DEBUG", "INFO", "WARN", "ERROR", "FATAL"]);
        assert_eq!(format!("{:<5}|", Level::Info), "INFO |");
    }

    #[test]
    fn test_fatal_dispatches_at_error() {
        assert_eq!(Level::Fatal.to_tracing(), tracing::Level::ERROR);
        assert_eq!(Level::Debug.to_tracing(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Level::Warn).unwrap();
        assert_eq!(json, "\"warn\"");

        let level: Level = serde_json::from_str("\"fatal\"").unwrap();
        assert_eq!(level, Level::Fatal);
    }
}
