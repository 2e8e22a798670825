//! Environment selector

use std::env;

use serde::{Deserialize, Serialize};

/// Environment variable holding the selector
pub const SELECTOR_ENV: &str = "LOG_LEVEL";

/// Deployment environment chosen through `LOG_LEVEL`
///
/// Matching is case-insensitive. Anything unrecognized, including an unset
/// or empty variable, is `Other`.
///
/// # Example
///
/// ```
/// use cb_logger::config::Selector;
///
/// assert_eq!(Selector::parse("DEV"), Selector::Dev);
/// assert_eq!(Selector::parse("staging"), Selector::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selector {
    Host,
    Dev,
    Prod,
    Test,
    #[default]
    #[serde(other)]
    Other,
}

impl Selector {
    /// Parse a selector value
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "host" => Selector::Host,
            "dev" => Selector::Dev,
            "prod" => Selector::Prod,
            "test" => Selector::Test,
            _ => Selector::Other,
        }
    }

    /// Read the selector from `LOG_LEVEL`
    pub fn from_env() -> Self {
        env::var(SELECTOR_ENV)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }

    /// Whether records are suppressed instead of written to the console
    pub fn discards_output(&self) -> bool {
        matches!(self, Selector::Prod | Selector::Test)
    }

    /// Whether debug records are let through
    pub fn is_verbose(&self) -> bool {
        matches!(self, Selector::Host | Selector::Dev)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Selector::Host => "host",
            Selector::Dev => "dev",
            Selector::Prod => "prod",
            Selector::Test => "test",
            Selector::Other => "other",
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!(Selector::parse("host"), Selector::Host);
        assert_eq!(Selector::parse("dev"), Selector::Dev);
        assert_eq!(Selector::parse("prod"), Selector::Prod);
        assert_eq!(Selector::parse("test"), Selector::Test);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Selector::parse("Dev"), Selector::Dev);
        assert_eq!(Selector::parse("PROD"), Selector::Prod);
        assert_eq!(Selector::parse("hOsT"), Selector::Host);
    }

    #[test]
    fn test_parse_fallback() {
        assert_eq!(Selector::parse(""), Selector::Other);
        assert_eq!(Selector::parse("staging"), Selector::Other);
        assert_eq!(Selector::parse(" dev"), Selector::Other);
    }

    #[test]
    fn test_flags() {
        assert!(Selector::Dev.is_verbose());
        assert!(!Selector::Dev.discards_output());
        assert!(Selector::Test.discards_output());
        assert!(!Selector::Other.discards_output());
        assert!(!Selector::Other.is_verbose());
    }

    #[test]
    fn test_serde_representation() {
        let json = serde_json::to_string(&Selector::Prod).unwrap();
        assert_eq!(json, "\"prod\"");

        let parsed: Selector = serde_json::from_str("\"host\"").unwrap();
        assert_eq!(parsed, Selector::Host);

        let unknown: Selector = serde_json::from_str("\"qa\"").unwrap();
        assert_eq!(unknown, Selector::Other);
    }
}
