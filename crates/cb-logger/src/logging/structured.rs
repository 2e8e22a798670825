//! Structured logger backed by `tracing`
//!
//! Each `StructuredLogger` owns a private `tracing` dispatcher made of a
//! registry and one fmt layer. Nothing is installed as the global default, so
//! any number of instances can live side by side in one process.

use std::io;

use tracing::{Dispatch, Metadata};
use tracing_subscriber::filter::{filter_fn, LevelFilter};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Layer;

use crate::config::{LoggerConfig, OutputTarget};
use crate::error::LogResult;

use super::format::RecordFormat;
use super::level::{Level, FATAL_TARGET, RECORD_TARGET};
use super::traits::Logger;

/// A configured logger handle
///
/// Records carry a timestamp, the level and the service tag. Records below
/// the minimum level are rejected by the layer filter before formatting.
///
/// Cloning is cheap and clones write through the same sink.
#[derive(Clone)]
pub struct StructuredLogger {
    dispatch: Dispatch,
    service: String,
    min_level: Level,
}

impl std::fmt::Debug for StructuredLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StructuredLogger")
            .field("service", &self.service)
            .field("min_level", &self.min_level)
            .finish()
    }
}

impl StructuredLogger {
    /// Build a logger writing to the configured output target
    pub fn new(config: LoggerConfig) -> LogResult<Self> {
        let writer = match config.target {
            OutputTarget::Stdout => BoxMakeWriter::new(io::stdout),
            OutputTarget::Discard => BoxMakeWriter::new(io::sink),
        };
        Ok(Self::with_writer(config, writer))
    }

    /// Build a logger writing to `make_writer`, ignoring `config.target`
    pub fn with_writer<W>(config: LoggerConfig, make_writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let min_level = config.min_level;
        let filter = filter_fn(move |metadata: &Metadata<'_>| {
            Level::from_metadata(metadata) >= min_level
        })
        .with_max_level_hint(LevelFilter::from_level(min_level.to_tracing()));

        let layer = tracing_subscriber::fmt::layer()
            .event_format(RecordFormat::new(config.ansi))
            .with_writer(make_writer)
            .with_filter(filter);

        Self {
            dispatch: Dispatch::new(tracing_subscriber::registry().with(layer)),
            service: config.service,
            min_level,
        }
    }

    /// Minimum level this logger emits
    pub fn min_level(&self) -> Level {
        self.min_level
    }

    /// Service tag attached to every record
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Whether a record at `level` would be written
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /// Emit one record
    pub fn log(&self, level: Level, message: &str) {
        let service = self.service.as_str();
        tracing::dispatcher::with_default(&self.dispatch, || match level {
            Level::Debug => tracing::debug!(target: RECORD_TARGET, service, "{}", message),
            Level::Info => tracing::info!(target: RECORD_TARGET, service, "{}", message),
            Level::Warn => tracing::warn!(target: RECORD_TARGET, service, "{}", message),
            Level::Error => tracing::error!(target: RECORD_TARGET, service, "{}", message),
            Level::Fatal => tracing::error!(target: FATAL_TARGET, service, "{}", message),
        });
    }
}

impl Logger for StructuredLogger {
    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    fn fatal(&self, message: &str) {
        self.log(Level::Fatal, message);
    }
}
