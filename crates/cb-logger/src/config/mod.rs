//! Logger configuration
//!
//! Configuration comes from a single environment selector:
//! - `Selector`: the parsed value of `LOG_LEVEL`
//! - `LoggerConfig`: output target, minimum level and service tag derived from it

mod selector;
mod settings;

pub use selector::{Selector, SELECTOR_ENV};
pub use settings::{LoggerConfig, OutputTarget, SERVICE_TAG};
