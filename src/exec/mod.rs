// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`line_stream`] splits a pipe into rows (live print and accumulate
//!   modes).
//! - [`sink`] is the shared, line-atomic output writer.
//! - [`runner`] launches one command and reduces its output to a result.
//! - [`backend`] provides the `RunnerBackend` trait and the production
//!   `ProcessBackend`, which tests can replace with a fake.

pub mod backend;
pub mod line_stream;
pub mod runner;
pub mod sink;

pub use backend::{ProcessBackend, RunFuture, RunnerBackend};
pub use runner::{CommandRunner, resolve_executable};
pub use sink::{LineSink, format_line};
