use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use upall::exec::LineSink;

/// In-memory writer whose contents can be inspected after the fact.
#[derive(Clone, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.lock().unwrap().clone()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock().unwrap()).into_owned()
    }

    /// Captured text split into lines (without terminators).
    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }

    /// Lines starting with `"[name] "`, prefix removed, in write order.
    pub fn lines_for(&self, name: &str) -> Vec<String> {
        let prefix = format!("[{name}] ");
        self.lines()
            .into_iter()
            .filter_map(|l| l.strip_prefix(&prefix).map(str::to_string))
            .collect()
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A `LineSink` backed by a fresh `CaptureBuffer`.
pub fn capture_sink() -> (LineSink, CaptureBuffer) {
    let buf = CaptureBuffer::default();
    (LineSink::new(buf.clone()), buf)
}

/// Writer standing in for a closed pipe (e.g. `upall | head -1`).
///
/// Every write fails with `BrokenPipe`; `attempts` counts how often one was
/// tried.
#[derive(Clone, Default)]
pub struct ClosedOutput {
    attempts: Arc<Mutex<usize>>,
}

impl ClosedOutput {
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

impl Write for ClosedOutput {
    fn write(&mut self, _data: &[u8]) -> io::Result<usize> {
        *self.attempts.lock().unwrap() += 1;
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A `LineSink` that rejects every write.
pub fn closed_sink() -> (LineSink, ClosedOutput) {
    let out = ClosedOutput::default();
    (LineSink::new(out.clone()), out)
}
