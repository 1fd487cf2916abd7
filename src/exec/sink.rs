// src/exec/sink.rs

//! Shared, line-atomic output.
//!
//! Every running command prints through a clone of the same [`LineSink`].
//! Each call to [`LineSink::write_line`] takes the lock once and writes the
//! whole formatted line with a single `write_all`, so lines from different
//! commands never interleave mid-line.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Format one output row as `"[name] row\n"`.
///
/// The row is copied byte for byte. A trailing `\n` on `row` is dropped
/// before the newline is added back, so rows read with their terminator and
/// rows without one look the same.
pub fn format_line(name: &str, row: &[u8]) -> Vec<u8> {
    let row = row.strip_suffix(b"\n").unwrap_or(row);
    let mut line = Vec::with_capacity(name.len() + row.len() + 4);
    line.push(b'[');
    line.extend_from_slice(name.as_bytes());
    line.extend_from_slice(b"] ");
    line.extend_from_slice(row);
    line.push(b'\n');
    line
}

/// Cloneable handle to a writer guarded by a mutex.
#[derive(Clone)]
pub struct LineSink {
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl fmt::Debug for LineSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSink").finish_non_exhaustive()
    }
}

impl LineSink {
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            inner: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Sink for live command output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Sink for the failure report.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Write `line` exactly as given, then flush.
    pub fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("output sink lock poisoned"))?;
        guard.write_all(line)?;
        guard.flush()
    }

    /// Write `row` prefixed with `"[name] "`.
    pub fn write_row(&self, name: &str, row: &[u8]) -> io::Result<()> {
        self.write_line(&format_line(name, row))
    }
}
