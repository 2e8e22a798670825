//! Resolved logger settings

use std::io::IsTerminal;

use crate::logging::Level;

use super::selector::Selector;

/// Service identifier attached to every record
pub const SERVICE_TAG: &str = "cb-users-auth";

/// Where rendered records go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    /// Live console stream
    Stdout,
    /// Records are rendered and dropped
    Discard,
}

/// Configuration a `StructuredLogger` is built from
///
/// # Example
///
/// ```
/// use cb_logger::config::{LoggerConfig, OutputTarget};
/// use cb_logger::Level;
///
/// let config = LoggerConfig::from_selector("prod");
/// assert_eq!(config.target, OutputTarget::Discard);
/// assert_eq!(config.min_level, Level::Info);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub target: OutputTarget,
    pub min_level: Level,
    pub service: String,
    /// Colour the level label. Cosmetic only.
    pub ansi: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::for_selector(Selector::Other)
    }
}

impl LoggerConfig {
    /// Create a configuration with an explicit target and level
    pub fn new(target: OutputTarget, min_level: Level) -> Self {
        Self {
            target,
            min_level,
            service: SERVICE_TAG.to_string(),
            ansi: target == OutputTarget::Stdout && std::io::stdout().is_terminal(),
        }
    }

    /// Resolve the configuration for a selector
    pub fn for_selector(selector: Selector) -> Self {
        let target = if selector.discards_output() {
            OutputTarget::Discard
        } else {
            OutputTarget::Stdout
        };
        let min_level = if selector.is_verbose() {
            Level::Debug
        } else {
            Level::Info
        };
        Self::new(target, min_level)
    }

    /// Resolve the configuration for a raw selector value
    pub fn from_selector(value: &str) -> Self {
        Self::for_selector(Selector::parse(value))
    }

    /// Resolve the configuration from `LOG_LEVEL`
    pub fn from_env() -> Self {
        Self::for_selector(Selector::from_env())
    }

    /// Override the service tag
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    /// Enable or disable level colouring
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_selector() {
        let config = LoggerConfig::from_selector("dev");
        assert_eq!(config.target, OutputTarget::Stdout);
        assert_eq!(config.min_level, Level::Debug);
        assert_eq!(config.service, SERVICE_TAG);
    }

    #[test]
    fn test_host_selector() {
        let config = LoggerConfig::from_selector("HOST");
        assert_eq!(config.target, OutputTarget::Stdout);
        assert_eq!(config.min_level, Level::Debug);
    }

    #[test]
    fn test_prod_and_test_selectors_discard() {
        for value in ["prod", "test", "Prod"] {
            let config = LoggerConfig::from_selector(value);
            assert_eq!(config.target, OutputTarget::Discard, "selector {value}");
            assert_eq!(config.min_level, Level::Info, "selector {value}");
            assert!(!config.ansi);
        }
    }

    #[test]
    fn test_unset_selector_defaults() {
        let config = LoggerConfig::from_selector("");
        assert_eq!(config.target, OutputTarget::Stdout);
        assert_eq!(config.min_level, Level::Info);
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_builders() {
        let config = LoggerConfig::new(OutputTarget::Discard, Level::Warn)
            .with_service("billing")
            .with_ansi(true);
        assert_eq!(config.service, "billing");
        assert_eq!(config.min_level, Level::Warn);
        assert!(config.ansi);
    }
}
