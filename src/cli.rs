// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `upall`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "upall",
    version,
    about = "Run all installed package-manager updates in parallel.",
    long_about = None
)]
pub struct CliArgs {
    /// Run only commands with this executable name (repeatable).
    #[arg(long, value_name = "NAME")]
    pub only: Vec<String>,

    /// Do not run commands with this executable name (repeatable).
    #[arg(long, value_name = "NAME")]
    pub skip: Vec<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `UPALL_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the selected commands and whether they are installed, but don't
    /// execute anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Filter directive enabling this level for every target.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
