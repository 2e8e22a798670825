//! Logging abstractions and the process-wide facade

mod traits;
mod level;
mod noop;
mod format;
mod memory;
mod structured;
pub mod facade;

pub use traits::{BoxedLogger, Logger, LoggerExt, SharedLogger};
pub use level::Level;
pub use noop::NoOpLogger;
pub use format::strip_ansi;
pub use memory::MemoryWriter;
pub use structured::StructuredLogger;
pub use facade::FacadeLogger;
