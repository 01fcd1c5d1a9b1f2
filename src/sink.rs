//! Output sinks
//!
//! A sink accepts finished, encoded lines. Writes are infallible by
//! contract: I/O failures are swallowed so the logging path never errors
//! out of the caller (the buffered and file sinks drop bytes rather than
//! propagate).

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};

use crate::buffer::LineBuffer;

/// Capacity of the buffered sink's accumulation buffer.
pub const SINK_BUFFER_CAPACITY: usize = 1024;

/// Destination for finished log lines.
pub trait Sink: Send {
    /// Accept one encoded line (without a trailing newline).
    fn write_line(&mut self, line: &str);

    /// Push any accumulated output to the final destination.
    fn flush(&mut self) {}
}

/// Writes each line to stdout immediately.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn write_line(&mut self, line: &str) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
    }
}

/// Accumulates lines and forwards them to an inner sink in batches.
///
/// Flushes when an append would overflow the buffer or when the appended
/// text contains a line break, and always on drop so no output is lost
/// when the sink goes out of scope.
pub struct BufferedSink {
    inner: Box<dyn Sink>,
    buf: LineBuffer<SINK_BUFFER_CAPACITY>,
}

impl BufferedSink {
    /// Wrap `inner` with a bounded accumulation buffer.
    pub fn new(inner: Box<dyn Sink>) -> Self {
        Self {
            inner,
            buf: LineBuffer::new(),
        }
    }
}

impl Sink for BufferedSink {
    fn write_line(&mut self, line: &str) {
        // +1 for the newline separator between buffered lines
        if !self.buf.is_empty() && self.buf.len() + line.len() + 1 > self.buf.capacity() {
            self.flush();
        }
        if !self.buf.is_empty() {
            self.buf.push_char('\n');
        }
        self.buf.push_str(line);
        if line.contains('\n') {
            self.flush();
        }
    }

    fn flush(&mut self) {
        if !self.buf.is_empty() {
            self.inner.write_line(self.buf.as_str());
            self.buf.clear();
        }
    }
}

impl Drop for BufferedSink {
    fn drop(&mut self) {
        self.flush();
    }
}

/// Appends lines to a file.
pub struct FileSink {
    file: File,
}

impl FileSink {
    /// Open `path` for appending, creating it if needed.
    pub fn create(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        Ok(Self { file })
    }
}

impl Sink for FileSink {
    fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.file, "{}", line);
    }

    fn flush(&mut self) {
        let _ = self.file.flush();
    }
}

/// Collects lines into shared in-memory storage.
///
/// Useful in tests and for in-process inspection of recent output; the
/// handle returned by [`MemorySink::lines`] stays valid after the sink
/// itself has been moved into a logger.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the collected lines.
    pub fn lines(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.lines)
    }
}

impl Sink for MemorySink {
    fn write_line(&mut self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_collects_lines() {
        let sink = MemorySink::new();
        let lines = sink.lines();
        let mut sink = sink;
        sink.write_line("one");
        sink.write_line("two");
        assert_eq!(*lines.lock().unwrap(), vec!["one", "two"]);
    }

    #[test]
    fn test_buffered_sink_holds_until_flush() {
        let memory = MemorySink::new();
        let lines = memory.lines();
        let mut buffered = BufferedSink::new(Box::new(memory));
        buffered.write_line("alpha");
        buffered.write_line("beta");
        assert!(lines.lock().unwrap().is_empty());
        buffered.flush();
        assert_eq!(*lines.lock().unwrap(), vec!["alpha\nbeta"]);
    }

    #[test]
    fn test_buffered_sink_flushes_on_line_break() {
        let memory = MemorySink::new();
        let lines = memory.lines();
        let mut buffered = BufferedSink::new(Box::new(memory));
        buffered.write_line("first\nsecond");
        assert_eq!(*lines.lock().unwrap(), vec!["first\nsecond"]);
    }

    #[test]
    fn test_buffered_sink_flushes_on_capacity_pressure() {
        let memory = MemorySink::new();
        let lines = memory.lines();
        let mut buffered = BufferedSink::new(Box::new(memory));
        let chunk = "x".repeat(600);
        buffered.write_line(&chunk);
        assert!(lines.lock().unwrap().is_empty());
        // appending another 600 bytes would overflow 1024, so the first
        // chunk is flushed through before the second is buffered
        buffered.write_line(&chunk);
        assert_eq!(*lines.lock().unwrap(), vec![chunk.clone()]);
        buffered.flush();
        assert_eq!(*lines.lock().unwrap(), vec![chunk.clone(), chunk]);
    }

    #[test]
    fn test_buffered_sink_flushes_on_drop() {
        let memory = MemorySink::new();
        let lines = memory.lines();
        {
            let mut buffered = BufferedSink::new(Box::new(memory));
            buffered.write_line("scoped");
        }
        assert_eq!(*lines.lock().unwrap(), vec!["scoped"]);
    }

    #[test]
    fn test_file_sink_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");
        {
            let mut sink = FileSink::create(&path).unwrap();
            sink.write_line("first");
            sink.write_line("second");
            sink.flush();
        }
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }
}
