// src/exec/backend.rs

//! Pluggable runner backend.
//!
//! The orchestrator talks to a `RunnerBackend` instead of spawning processes
//! itself, so tests can swap in a fake that returns scripted outcomes.
//!
//! - [`ProcessBackend`] is the production implementation; it wraps a
//!   [`CommandRunner`] per command.

use std::future::Future;
use std::pin::Pin;

use crate::errors::RunError;
use crate::exec::runner::CommandRunner;
use crate::exec::sink::LineSink;
use crate::types::{CommandSpec, RunOutcome};

/// Boxed future returned by [`RunnerBackend::execute`].
pub type RunFuture = Pin<Box<dyn Future<Output = Result<RunOutcome, RunError>> + Send + 'static>>;

/// Trait abstracting how one command is executed.
///
/// The returned future is spawned onto its own task, so it must own
/// everything it needs.
pub trait RunnerBackend: Send + Sync + 'static {
    fn execute(&self, spec: CommandSpec, stdout_sink: LineSink) -> RunFuture;
}

/// Runs commands as real OS processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessBackend;

impl RunnerBackend for ProcessBackend {
    fn execute(&self, spec: CommandSpec, stdout_sink: LineSink) -> RunFuture {
        Box::pin(async move { CommandRunner::new(spec, stdout_sink).run().await })
    }
}
