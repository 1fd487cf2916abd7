// src/exec/runner.rs

//! Runs a single command process.

use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{RunError, StreamKind};
use crate::exec::line_stream::{collect_rows, print_rows};
use crate::exec::sink::LineSink;
use crate::types::{CommandSpec, RunOutcome};

/// Look `name` up on the search path.
///
/// `which` touches the filesystem, so it runs on the blocking pool.
pub async fn resolve_executable(name: &str) -> Option<PathBuf> {
    let name = name.to_string();
    tokio::task::spawn_blocking(move || which::which(name))
        .await
        .ok()
        .and_then(|result| result.ok())
}

/// Runs one [`CommandSpec`] and streams its output.
///
/// - stdout is printed live to `stdout_sink`, each row prefixed with
///   `"[name] "`.
/// - stderr is collected in full; any text there makes the run fail with
///   [`RunError::Diagnostic`], even when the process exits with status 0.
#[derive(Debug)]
pub struct CommandRunner {
    spec: CommandSpec,
    stdout_sink: LineSink,
}

impl CommandRunner {
    pub fn new(spec: CommandSpec, stdout_sink: LineSink) -> Self {
        Self { spec, stdout_sink }
    }

    /// Run the command to completion.
    ///
    /// Returns `Ok(RunOutcome::Skipped)` without launching anything when the
    /// executable cannot be found.
    pub async fn run(&self) -> Result<RunOutcome, RunError> {
        let name = self.spec.name.as_str();

        let Some(program) = resolve_executable(name).await else {
            debug!(command = %name, "executable not found on PATH; skipping");
            return Ok(RunOutcome::Skipped);
        };

        info!(
            command = %name,
            program = %program.display(),
            args = ?self.spec.args,
            "starting command"
        );

        let mut command = Command::new(&program);
        // Keep argv[0] as the bare name, as a shell would.
        #[cfg(unix)]
        command.arg0(name);

        let mut child = command
            .args(&self.spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(RunError::Spawn)?;

        debug!(command = %name, pid = ?child.id(), "process spawned");

        let stdout = child
            .stdout
            .take()
            .ok_or(RunError::MissingPipe(StreamKind::Stdout))?;
        let stderr = child
            .stderr
            .take()
            .ok_or(RunError::MissingPipe(StreamKind::Stderr))?;

        let print_stdout = async {
            print_rows(stdout, name, &self.stdout_sink)
                .await
                .map_err(|source| RunError::StreamRead {
                    stream: StreamKind::Stdout,
                    source,
                })
        };
        let collect_stderr = async {
            collect_rows(stderr)
                .await
                .map_err(|source| RunError::StreamRead {
                    stream: StreamKind::Stderr,
                    source,
                })
        };

        // On a read error the child is dropped here and killed.
        let ((), diagnostics) = tokio::try_join!(print_stdout, collect_stderr)?;

        let waited = child.wait().await;

        if !diagnostics.is_empty() {
            debug!(
                command = %name,
                status = ?waited,
                stderr_bytes = diagnostics.len(),
                "command wrote to stderr"
            );
            return Err(RunError::Diagnostic(diagnostics));
        }

        let status = waited.map_err(RunError::Wait)?;

        info!(
            command = %name,
            exit_code = ?status.code(),
            success = status.success(),
            "command exited"
        );

        if !status.success() {
            return Err(RunError::ExitStatus(status));
        }

        Ok(RunOutcome::Completed)
    }
}
