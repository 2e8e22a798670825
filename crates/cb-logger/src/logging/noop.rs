//! No-op logger implementation

use super::traits::Logger;

/// A logger that drops every record
///
/// Stand-in for components built without a configured sink, and for tests
/// that do not care about log output.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn fatal(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::traits::{LoggerExt, SharedLogger};
    use std::sync::Arc;

    #[test]
    fn test_noop_logger_through_shared_handle() {
        let logger: SharedLogger = Arc::new(NoOpLogger::new());

        logger.debug("debug message");
        logger.info("info message");
        logger.warn("warn message");
        logger.error("error message");
        logger.fatal("fatal message");

        let err = logger.fatal_error("still no exit");
        assert!(err.is_fatal());
    }
}
