//! Build log interface

use std::io;

/// Line-oriented destination for everything the runner prints.
///
/// A sink can be shared by concurrent invocations, so each call must write
/// the whole line atomically.
pub trait LogSink: Send + Sync {
    /// Write one line exactly as given, line terminator included
    fn write_line(&self, line: &[u8]) -> io::Result<()>;

    /// Write a message followed by a newline
    fn println(&self, message: &str) {
        let mut line = Vec::with_capacity(message.len() + 1);
        line.extend_from_slice(message.as_bytes());
        line.push(b'\n');
        if let Err(e) = self.write_line(&line) {
            tracing::warn!("Failed to write to build log: {e}");
        }
    }
}
