// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod types;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{default_commands, select_commands};
use crate::engine::Orchestrator;
use crate::exec::{LineSink, ProcessBackend, RunnerBackend, resolve_executable};
use crate::types::CommandSpec;

/// High-level entry point used by `main.rs`.
///
/// Selects commands from the built-in list, runs them all, prints the
/// failure report to stderr and returns the process exit code.
pub async fn run(args: CliArgs) -> Result<i32> {
    let specs = select_commands(default_commands(), &args.only, &args.skip)?;

    if args.dry_run {
        print_dry_run(&specs).await;
        return Ok(0);
    }

    run_commands(specs, ProcessBackend, LineSink::stdout(), LineSink::stderr()).await
}

/// Run `specs` concurrently through `backend` and report failures.
///
/// Live command output goes to `stdout_sink`; the failure report goes to
/// `report_sink` once every command has finished. Returns `0` when nothing
/// failed and `1` otherwise.
pub async fn run_commands<B: RunnerBackend>(
    specs: Vec<CommandSpec>,
    backend: B,
    stdout_sink: LineSink,
    report_sink: LineSink,
) -> Result<i32> {
    let report = Orchestrator::new(specs, backend, stdout_sink).run().await;

    report
        .write_to(&report_sink)
        .context("writing failure report")?;

    Ok(report.exit_code())
}

/// Simple dry-run output: every selected command and whether it would run.
async fn print_dry_run(specs: &[CommandSpec]) {
    println!("upall dry-run");
    println!();
    println!("commands ({}):", specs.len());
    for spec in specs {
        match resolve_executable(&spec.name).await {
            Some(path) => println!("  - {spec}\n      found: {}", path.display()),
            None => println!("  - {spec}\n      not installed; will be skipped"),
        }
    }

    debug!("dry-run complete (no execution)");
}
