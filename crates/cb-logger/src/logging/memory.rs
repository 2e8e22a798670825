//! In-memory capture writer

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory writer for tests and diagnostics
///
/// Clones share one buffer, so a test can keep a handle while the logger owns
/// another. Each record arrives as one `write` call and is appended under the
/// lock, so records from concurrent threads never interleave.
///
/// # Example
///
/// ```
/// use cb_logger::{Level, Logger, LoggerConfig, MemoryWriter, OutputTarget, StructuredLogger};
///
/// let writer = MemoryWriter::new();
/// let config = LoggerConfig::new(OutputTarget::Stdout, Level::Info).with_ansi(false);
/// let logger = StructuredLogger::with_writer(config, writer.clone());
///
/// logger.info("captured");
/// assert!(writer.contents().contains("captured"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written output split into lines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Check if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Drop captured output
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl io::Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for MemoryWriter {
    type Writer = MemoryWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_clones_share_buffer() {
        let writer = MemoryWriter::new();
        let mut handle = writer.make_writer();
        handle.write_all(b"one\ntwo\n").unwrap();

        assert_eq!(writer.lines(), vec!["one", "two"]);
        assert!(!writer.is_empty());

        writer.clear();
        assert!(writer.is_empty());
    }
}
