use std::fmt;

use crate::errors::RunError;

/// One external program invocation: executable name plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// What a runner reports when nothing went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The executable is not on the search path; nothing was launched.
    Skipped,
    /// The process ran to completion without any failure signal.
    Completed,
}

/// Final outcome of one launched command.
///
/// `failure` is `None` when the command succeeded.
#[derive(Debug)]
pub struct RunResult {
    pub name: String,
    pub failure: Option<RunError>,
}

impl RunResult {
    pub fn success(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            failure: None,
        }
    }

    pub fn failed(name: impl Into<String>, error: RunError) -> Self {
        Self {
            name: name.into(),
            failure: Some(error),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}
