// src/errors.rs

//! Crate-wide error types.
//!
//! - [`RunError`] describes why a single command failed. It never escapes the
//!   command's own task; the orchestrator turns it into a report entry.
//! - [`UpallError`] is for setup problems that stop the whole program before
//!   any command runs (e.g. an unknown `--only` name).

use std::fmt;
use std::process::ExitStatus;

use thiserror::Error;

/// Which of the two output pipes of a child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Stdout,
    Stderr,
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamKind::Stdout => f.write_str("stdout"),
            StreamKind::Stderr => f.write_str("stderr"),
        }
    }
}

/// Failure of one command run.
#[derive(Error, Debug)]
pub enum RunError {
    /// The command wrote to stderr. Any output there counts as failure,
    /// whatever the exit status was. Holds the raw bytes it wrote.
    #[error("{}", String::from_utf8_lossy(.0))]
    Diagnostic(Vec<u8>),

    #[error("failed to read {stream}: {source}")]
    StreamRead {
        stream: StreamKind,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start process: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("{0} pipe was not captured")]
    MissingPipe(StreamKind),

    #[error("failed to wait for process: {0}")]
    Wait(#[source] std::io::Error),

    #[error("process exited with {0}")]
    ExitStatus(ExitStatus),

    #[error("command task panicked: {0}")]
    Panicked(String),
}

impl RunError {
    /// Text printed in the final report for this failure.
    ///
    /// Diagnostic output is decoded lossily; every other failure is rendered
    /// through its `Display` message.
    pub fn report_text(&self) -> String {
        match self {
            RunError::Diagnostic(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            other => other.to_string(),
        }
    }

    /// `true` for failures caused by the command's own stderr output, as
    /// opposed to I/O or process-management problems.
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, RunError::Diagnostic(_))
    }
}

/// Errors that abort the program before commands are launched.
#[derive(Error, Debug)]
pub enum UpallError {
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, UpallError>;
