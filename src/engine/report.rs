// src/engine/report.rs

use std::io;

use crate::exec::sink::{LineSink, format_line};
use crate::types::RunResult;

/// Failures collected from one orchestrator run, in arrival order.
#[derive(Debug, Default)]
pub struct AggregatedReport {
    failures: Vec<RunResult>,
    launched: usize,
}

impl AggregatedReport {
    /// Build a report from every result received, keeping only failures.
    pub fn from_results(results: Vec<RunResult>) -> Self {
        let launched = results.len();
        let failures = results.into_iter().filter(RunResult::is_failure).collect();
        Self { failures, launched }
    }

    pub fn failures(&self) -> &[RunResult] {
        &self.failures
    }

    /// Number of commands that were actually started (skipped ones excluded).
    pub fn launched(&self) -> usize {
        self.launched
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.has_failures() { 1 } else { 0 }
    }

    /// The report as text: per failure, a blank line followed by every line
    /// of the failure text prefixed with `"[name] "`.
    pub fn render(&self) -> String {
        String::from_utf8_lossy(&self.lines().concat()).into_owned()
    }

    /// Print the report to `sink`, one line per write.
    pub fn write_to(&self, sink: &LineSink) -> io::Result<()> {
        for line in self.lines() {
            sink.write_line(&line)?;
        }
        Ok(())
    }

    fn lines(&self) -> Vec<Vec<u8>> {
        let mut out = Vec::new();
        for result in &self.failures {
            let Some(failure) = &result.failure else {
                continue;
            };
            out.push(b"\n".to_vec());
            for line in failure.report_text().lines() {
                out.push(format_line(&result.name, line.as_bytes()));
            }
        }
        out
    }
}
