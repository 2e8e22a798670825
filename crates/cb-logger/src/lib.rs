//! cb-logger
//!
//! Process-wide structured logging for cb services. Call [`init`] once near
//! the top of `main`, then log from anywhere:
//!
//! ```no_run
//! use cb_logger::{info, infof, warn};
//!
//! cb_logger::init().expect("logger");
//! info("starting");
//! infof!("user {} signed in", 42);
//! warn("cache cold");
//! ```
//!
//! The sink and level come from `LOG_LEVEL`:
//! - `host`, `dev`: stdout, debug and above
//! - `prod`, `test`: output discarded, info and above
//! - anything else: stdout, info and above
//!
//! ## Injectable loggers
//!
//! Components that prefer an explicit handle take a [`SharedLogger`]. The
//! composition root builds a [`StructuredLogger`] from a [`LoggerConfig`];
//! tests build their own against a [`MemoryWriter`] or use [`NoOpLogger`].
//!
//! ```rust
//! use std::sync::Arc;
//! use cb_logger::{
//!     Level, Logger, LoggerConfig, MemoryWriter, OutputTarget, SharedLogger, StructuredLogger,
//! };
//!
//! let out = MemoryWriter::new();
//! let config = LoggerConfig::new(OutputTarget::Stdout, Level::Debug).with_ansi(false);
//! let logger: SharedLogger = Arc::new(StructuredLogger::with_writer(config, out.clone()));
//!
//! logger.debug("wired");
//! assert!(out.contents().contains("wired"));
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub use config::{LoggerConfig, OutputTarget, Selector, SELECTOR_ENV, SERVICE_TAG};

pub use error::{LogError, LogResult};

pub use logging::{
    strip_ansi, BoxedLogger, FacadeLogger, Level, Logger, LoggerExt, MemoryWriter, NoOpLogger,
    SharedLogger, StructuredLogger,
};

pub use logging::facade::{
    debug, debugf, error, errorf, fatal, fatalf, info, infof, init, name, warn, warnf,
};
