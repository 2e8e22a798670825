//! Process-wide logging facade
//!
//! A global entry point for code that logs without holding a logger. The
//! first call to [`init`] configures the sink from `LOG_LEVEL`; until then
//! every logging call is silently dropped.
//!
//! ```no_run
//! cb_logger::init().expect("logger");
//!
//! cb_logger::info("service started");
//! cb_logger::infof!("listening on {}", 8080);
//! ```

use std::fmt;
use std::io::{self, Write};
use std::process;

use once_cell::sync::OnceCell;

use crate::config::LoggerConfig;
use crate::error::{LogError, LogResult};

use super::level::Level;
use super::structured::StructuredLogger;
use super::traits::Logger;

/// Banner reported by [`name`]
pub const NAME: &str = "Initializing cb-logger-lib!";

/// Global logger instance. Set once by `init`, never replaced.
static APP_LOGGER: OnceCell<StructuredLogger> = OnceCell::new();

/// Library banner
pub fn name() -> &'static str {
    NAME
}

/// Configure the global logger from `LOG_LEVEL`.
///
/// The first caller runs the configuration; concurrent callers block until it
/// finishes, and later calls are no-ops.
pub fn init() -> LogResult<()> {
    APP_LOGGER.get_or_try_init(configure)?;
    Ok(())
}

fn configure() -> LogResult<StructuredLogger> {
    StructuredLogger::new(LoggerConfig::from_env())
}

fn sink() -> Option<&'static StructuredLogger> {
    APP_LOGGER.get()
}

fn emit(level: Level, message: &dyn fmt::Display) {
    if let Some(logger) = sink() {
        logger.log(level, &message.to_string());
    }
}

fn emit_fatal(message: &dyn fmt::Display) {
    if let Some(logger) = sink() {
        logger.log(Level::Fatal, &message.to_string());
        let _ = io::stdout().flush();
        process::exit(LogError::FATAL_EXIT_CODE);
    }
}

/// Log a debug message
pub fn debug(message: impl fmt::Display) {
    emit(Level::Debug, &message);
}

/// Log a debug message with format arguments, see [`debugf!`](crate::debugf!)
pub fn debugf(args: fmt::Arguments<'_>) {
    emit(Level::Debug, &args);
}

/// Log an info message
pub fn info(message: impl fmt::Display) {
    emit(Level::Info, &message);
}

/// Log an info message with format arguments, see [`infof!`](crate::infof!)
pub fn infof(args: fmt::Arguments<'_>) {
    emit(Level::Info, &args);
}

/// Log a warning message
pub fn warn(message: impl fmt::Display) {
    emit(Level::Warn, &message);
}

/// Log a warning message with format arguments, see [`warnf!`](crate::warnf!)
pub fn warnf(args: fmt::Arguments<'_>) {
    emit(Level::Warn, &args);
}

/// Log an error message
pub fn error(message: impl fmt::Display) {
    emit(Level::Error, &message);
}

/// Log an error message with format arguments, see [`errorf!`](crate::errorf!)
pub fn errorf(args: fmt::Arguments<'_>) {
    emit(Level::Error, &args);
}

/// Log a fatal message and exit with status 1.
///
/// Before [`init`] this is a no-op like every other call and the process
/// keeps running.
pub fn fatal(message: impl fmt::Display) {
    emit_fatal(&message);
}

/// Log a fatal message with format arguments and exit, see [`fatalf!`](crate::fatalf!)
pub fn fatalf(args: fmt::Arguments<'_>) {
    emit_fatal(&args);
}

#[macro_export]
macro_rules! debugf {
    ($($arg:tt)*) => {
        $crate::debugf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! infof {
    ($($arg:tt)*) => {
        $crate::infof(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! warnf {
    ($($arg:tt)*) => {
        $crate::warnf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::errorf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)*) => {
        $crate::fatalf(format_args!($($arg)*))
    };
}

/// `Logger` view of the global facade
///
/// Lets code written against [`Logger`] share the process-wide sink. Its
/// `fatal` records the message without exiting.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacadeLogger;

impl Logger for FacadeLogger {
    fn debug(&self, message: &str) {
        emit(Level::Debug, &message);
    }

    fn info(&self, message: &str) {
        emit(Level::Info, &message);
    }

    fn warn(&self, message: &str) {
        emit(Level::Warn, &message);
    }

    fn error(&self, message: &str) {
        emit(Level::Error, &message);
    }

    fn fatal(&self, message: &str) {
        emit(Level::Fatal, &message);
    }
}

// Nothing in the unit test binary calls `init`; initialized behaviour is
// covered by tests/facade.rs in child processes.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::traits::LoggerExt;

    #[test]
    fn test_name() {
        assert_eq!(name(), "Initializing cb-logger-lib!");
    }

    #[test]
    fn test_logging_before_init_does_not_panic() {
        debug("debug");
        debugf(format_args!("debug {}", 1));
        info("info");
        crate::infof!("info {}", 2);
        warn("warn");
        crate::warnf!("warn {}", 3);
        error("error");
        crate::errorf!("error {}", 4);
        fatal("fatal");
        crate::fatalf!("fatal {}", 5);

        assert!(sink().is_none());
    }

    #[test]
    fn test_facade_logger_before_init() {
        let logger = FacadeLogger;
        logger.info("dropped");
        logger.fatal("dropped too");
        assert!(logger.fatal_error("still here").is_fatal());
    }
}
