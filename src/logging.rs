// src/logging.rs

//! Diagnostics for `upall` itself, via `tracing` + `tracing-subscriber`.
//!
//! STDOUT belongs to command output and STDERR to the failure report, so
//! logging stays quiet unless asked for. The filter comes from:
//! 1. `--log-level` (applies to every target),
//! 2. `UPALL_LOG`, which takes full filter directives such as
//!    `upall::exec=debug,warn`,
//! 3. otherwise [`DEFAULT_DIRECTIVES`].

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Environment variable read when `--log-level` is absent.
pub const LOG_ENV: &str = "UPALL_LOG";

/// Only warnings and errors by default; the report shares STDERR.
pub const DEFAULT_DIRECTIVES: &str = "warn";

/// Install the global subscriber. Call once, before any command starts.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = build_filter(cli_level, std::env::var(LOG_ENV).ok().as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))
}

fn build_filter(cli_level: Option<LogLevel>, env: Option<&str>) -> Result<EnvFilter> {
    let directives = match (cli_level, env) {
        (Some(level), _) => level.directive().to_string(),
        (None, Some(env)) if !env.trim().is_empty() => env.trim().to_string(),
        _ => DEFAULT_DIRECTIVES.to_string(),
    };

    EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid log filter {directives:?} (from --log-level or {LOG_ENV})"))
}
