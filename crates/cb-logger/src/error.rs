//! Logger error types

use thiserror::Error;

/// Errors surfaced by the logging layer
///
/// Logging calls themselves never fail. This type covers sink construction
/// and the fatal path for callers that prefer to propagate a fatal request
/// instead of terminating the process in place.
#[derive(Error, Debug)]
pub enum LogError {
    /// A fatal record was emitted and the caller should stop
    #[error("fatal: {message}")]
    Fatal { message: String },

    /// Sink construction or write failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogError {
    /// Exit status used when a fatal record terminates the process
    pub const FATAL_EXIT_CODE: i32 = 1;

    /// Create a fatal error
    pub fn fatal(message: impl Into<String>) -> Self {
        Self::Fatal {
            message: message.into(),
        }
    }

    /// Whether this error is a fatal request
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal { .. })
    }
}

pub type LogResult<T> = Result<T, LogError>;
