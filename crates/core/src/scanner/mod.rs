//! Streaming scan of console runner output
//!
//! [`OutputScanner`] sits on the child's stdout. Every complete line is
//! forwarded to the build log byte for byte; on the way through it watches
//! for the `Attachments:` header and records the first `.coverage` path
//! listed after it.

use crate::interfaces::LogSink;
use regex::Regex;
use std::io::{self, Write};
use std::sync::LazyLock;

static ATTACHMENTS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Attachments:\s*$").expect("valid attachments pattern"));

static COVERAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(.*\.coverage)$").expect("valid coverage pattern"));

const COVERAGE_GROUP: usize = 1;

/// Scan progress; both fields only ever move forward
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    pub in_attachments_section: bool,
    pub coverage_file: Option<String>,
}

impl ScanState {
    /// Advance the state with one line of output (terminator optional)
    pub fn observe(&mut self, line: &str) {
        let content = line.trim_end_matches(['\r', '\n']);

        if !self.in_attachments_section {
            if ATTACHMENTS_PATTERN.is_match(content) {
                self.in_attachments_section = true;
            }
            return;
        }

        if self.coverage_file.is_some() {
            return;
        }

        if let Some(caps) = COVERAGE_PATTERN.captures(content.trim_end()) {
            if let Some(path) = caps.get(COVERAGE_GROUP) {
                self.coverage_file = Some(path.as_str().to_string());
            }
        }
    }
}

/// Line-buffering writer that relays output to a [`LogSink`]
pub struct OutputScanner<'a> {
    sink: &'a dyn LogSink,
    buffer: Vec<u8>,
    state: ScanState,
}

impl<'a> OutputScanner<'a> {
    pub fn new(sink: &'a dyn LogSink) -> Self {
        Self {
            sink,
            buffer: Vec::new(),
            state: ScanState::default(),
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn coverage_file(&self) -> Option<&str> {
        self.state.coverage_file.as_deref()
    }

    pub fn into_coverage_file(self) -> Option<String> {
        self.state.coverage_file
    }

    /// Emit a trailing line that never got its terminator
    pub fn finish(&mut self) -> io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        self.eol()
    }

    fn eol(&mut self) -> io::Result<()> {
        let line = std::mem::take(&mut self.buffer);
        self.state.observe(&String::from_utf8_lossy(&line));
        self.sink.write_line(&line)
    }
}

impl Write for OutputScanner<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut rest = buf;
        while let Some(pos) = rest.iter().position(|&b| b == b'\n') {
            let (line, tail) = rest.split_at(pos + 1);
            self.buffer.extend_from_slice(line);
            self.eol()?;
            rest = tail;
        }
        self.buffer.extend_from_slice(rest);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
