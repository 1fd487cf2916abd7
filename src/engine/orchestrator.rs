// src/engine/orchestrator.rs

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::engine::report::AggregatedReport;
use crate::errors::RunError;
use crate::exec::backend::RunnerBackend;
use crate::exec::sink::LineSink;
use crate::types::{CommandSpec, RunOutcome, RunResult};

/// Runs every command concurrently and aggregates their failures.
///
/// - One Tokio task per [`CommandSpec`].
/// - Each launched command sends exactly one [`RunResult`] into a channel
///   sized to the number of commands, so senders never wait.
/// - Skipped commands (executable not found) send nothing.
/// - All tasks are joined before the channel is drained.
pub struct Orchestrator<B: RunnerBackend> {
    specs: Vec<CommandSpec>,
    backend: Arc<B>,
    stdout_sink: LineSink,
}

impl<B: RunnerBackend> fmt::Debug for Orchestrator<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orchestrator")
            .field("specs", &self.specs)
            .finish_non_exhaustive()
    }
}

impl<B: RunnerBackend> Orchestrator<B> {
    pub fn new(specs: Vec<CommandSpec>, backend: B, stdout_sink: LineSink) -> Self {
        Self {
            specs,
            backend: Arc::new(backend),
            stdout_sink,
        }
    }

    pub async fn run(self) -> AggregatedReport {
        info!(commands = self.specs.len(), "launching commands");

        let (tx, mut rx) = mpsc::channel::<RunResult>(self.specs.len().max(1));
        let mut tasks = JoinSet::new();
        let mut names = HashMap::new();

        for spec in self.specs {
            let tx = tx.clone();
            let backend = Arc::clone(&self.backend);
            let sink = self.stdout_sink.clone();
            let name = spec.name.clone();

            let handle = tasks.spawn(async move {
                let name = spec.name.clone();
                let result = match backend.execute(spec, sink).await {
                    Ok(RunOutcome::Skipped) => return,
                    Ok(RunOutcome::Completed) => RunResult::success(name),
                    Err(err) => {
                        debug!(command = %name, error = %err, "command failed");
                        RunResult::failed(name, err)
                    }
                };
                if tx.send(result).await.is_err() {
                    debug!("result channel closed before command finished");
                }
            });
            names.insert(handle.id(), name);
        }
        drop(tx);

        // Barrier: every command task has finished after this loop.
        let mut panicked = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            if let Err(err) = joined {
                let name = names.remove(&err.id()).unwrap_or_default();
                error!(command = %name, error = %err, "command task did not complete");
                panicked.push(RunResult::failed(name, RunError::Panicked(err.to_string())));
            }
        }

        let mut results = Vec::new();
        while let Some(result) = rx.recv().await {
            results.push(result);
        }
        results.extend(panicked);

        let report = AggregatedReport::from_results(results);
        info!(
            launched = report.launched(),
            failed = report.failures().len(),
            "all commands finished"
        );
        report
    }
}
