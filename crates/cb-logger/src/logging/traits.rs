//! Logger trait definition

use std::sync::Arc;

use crate::error::LogError;

/// Logger abstraction handed to components that need to log
///
/// Implementations:
/// - `StructuredLogger`: tracing-backed sink built from a `LoggerConfig`
/// - `NoOpLogger`: Silent logger for testing
/// - `FacadeLogger`: Forwards to the process-wide facade
///
/// `fatal` records a fatal-severity message. It never terminates the process;
/// that decision belongs to the caller (see `LoggerExt::fatal_error`).
pub trait Logger: Send + Sync {
    /// Log a debug message
    fn debug(&self, message: &str);

    /// Log an info message
    fn info(&self, message: &str);

    /// Log a warning message
    fn warn(&self, message: &str);

    /// Log an error message
    fn error(&self, message: &str);

    /// Log a fatal message
    fn fatal(&self, message: &str);
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Extension trait for logging with format arguments
pub trait LoggerExt: Logger {
    /// Log a debug message with format arguments
    fn debug_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.debug(&args.to_string());
    }

    /// Log an info message with format arguments
    fn info_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.info(&args.to_string());
    }

    /// Log a warning message with format arguments
    fn warn_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.warn(&args.to_string());
    }

    /// Log an error message with format arguments
    fn error_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.error(&args.to_string());
    }

    /// Log a fatal message with format arguments
    fn fatal_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.fatal(&args.to_string());
    }

    /// Log a fatal message and hand back the matching error
    ///
    /// ```
    /// use cb_logger::{LogError, LogResult, LoggerExt, NoOpLogger};
    ///
    /// fn load(logger: &NoOpLogger) -> LogResult<()> {
    ///     Err(logger.fatal_error("config missing"))
    /// }
    ///
    /// let err = load(&NoOpLogger::new()).unwrap_err();
    /// assert!(err.is_fatal());
    /// ```
    fn fatal_error(&self, message: &str) -> LogError {
        self.fatal(message);
        LogError::fatal(message)
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}
