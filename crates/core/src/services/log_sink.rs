//! Log sink implementations

use crate::interfaces::LogSink;
use std::io::{self, Write};
use std::sync::Mutex;

/// Sink writing whole lines to any `Write` under a lock
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    inner: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        match self.inner.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut writer = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("log sink lock poisoned"))?;
        writer.write_all(line)?;
        writer.flush()
    }
}

/// Sink that keeps every line in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw lines in arrival order
    pub fn lines(&self) -> Vec<Vec<u8>> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Everything written so far, decoded lossily
    pub fn contents(&self) -> String {
        self.lines()
            .iter()
            .map(|l| String::from_utf8_lossy(l).into_owned())
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.contents().contains(needle)
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        self.lines
            .lock()
            .map_err(|_| io::Error::other("log sink lock poisoned"))?
            .push(line.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_writer_sink_writes_lines() {
        let sink = WriterSink::new(Vec::new());
        sink.write_line(b"first\n").unwrap();
        sink.println("second");
        assert_eq!(sink.into_inner(), b"first\nsecond\n");
    }

    #[test]
    fn test_memory_sink_keeps_lines_whole_under_contention() {
        let sink = Arc::new(MemorySink::new());
        let handles: Vec<_> = (0..4)
            .map(|n| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for i in 0..50 {
                        sink.println(&format!("worker {n} line {i}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let lines = sink.lines();
        assert_eq!(lines.len(), 200);
        for line in lines {
            let text = String::from_utf8(line).unwrap();
            assert!(text.starts_with("worker "));
            assert!(text.ends_with('\n'));
            assert_eq!(text.matches('\n').count(), 1);
        }
    }
}
