use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use upall::errors::RunError;
use upall::exec::{LineSink, RunFuture, RunnerBackend};
use upall::types::{CommandSpec, RunOutcome};

/// What the fake should do for a command name.
#[derive(Debug, Clone)]
pub enum Script {
    /// Print these rows, then succeed.
    Succeed(Vec<String>),
    /// Print these rows, then fail with the given stderr text.
    Diagnose(Vec<String>, String),
    /// Pretend the executable is not installed.
    Missing,
    /// Panic inside the command task.
    Panic,
}

/// A fake backend that:
/// - records which commands were executed
/// - prints scripted rows through the real `LineSink` formatting
/// - returns scripted outcomes, after an optional per-command delay.
///
/// Names without a script succeed silently.
#[derive(Clone, Default)]
pub struct FakeBackend {
    scripts: HashMap<String, Script>,
    delays: HashMap<String, Duration>,
    executed: Arc<Mutex<Vec<String>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(mut self, name: &str, script: Script) -> Self {
        self.scripts.insert(name.to_string(), script);
        self
    }

    pub fn delay(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.to_string(), delay);
        self
    }

    /// Shared handle to the list of executed command names.
    pub fn executed(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.executed)
    }
}

impl RunnerBackend for FakeBackend {
    fn execute(&self, spec: CommandSpec, stdout_sink: LineSink) -> RunFuture {
        let script = self
            .scripts
            .get(&spec.name)
            .cloned()
            .unwrap_or(Script::Succeed(vec![]));
        let delay = self.delays.get(&spec.name).copied();
        let executed = Arc::clone(&self.executed);

        Box::pin(run_script(spec, stdout_sink, script, delay, executed))
    }
}

async fn run_script(
    spec: CommandSpec,
    stdout_sink: LineSink,
    script: Script,
    delay: Option<Duration>,
    executed: Arc<Mutex<Vec<String>>>,
) -> Result<RunOutcome, RunError> {
    executed.lock().unwrap().push(spec.name.clone());

    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    // Mirrors live print mode: a closed output drops rows but never fails.
    let print = |rows: &[String]| {
        for row in rows {
            if stdout_sink.write_row(&spec.name, row.as_bytes()).is_err() {
                break;
            }
        }
    };

    match script {
        Script::Succeed(rows) => {
            print(&rows);
            Ok(RunOutcome::Completed)
        }
        Script::Diagnose(rows, stderr) => {
            print(&rows);
            Err(RunError::Diagnostic(stderr.into_bytes()))
        }
        Script::Missing => Ok(RunOutcome::Skipped),
        Script::Panic => panic!("scripted panic for {}", spec.name),
    }
}
