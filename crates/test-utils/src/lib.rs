//! Shared helpers for `upall` integration tests.
//!
//! - [`capture`]: in-memory and always-failing `LineSink`s.
//! - [`fake_backend`]: a `RunnerBackend` with scripted per-command outcomes.
//! - [`builders`]: `CommandSpec` shortcuts.

pub mod builders;
pub mod capture;
pub mod fake_backend;

use std::future::Future;
use std::sync::OnceLock;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

/// Upper bound for any single test scenario. Commands under test are short
/// `sh` scripts, so hitting this means something hangs.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(10);

static TRACING: OnceLock<()> = OnceLock::new();

/// Install a test-captured subscriber once per test binary.
///
/// `RUST_LOG` overrides the default of `upall=debug`, which shows process
/// lifecycle events in the output of failing tests.
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("upall=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Await `f`, failing the test if it takes longer than [`TEST_TIMEOUT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    match tokio::time::timeout(TEST_TIMEOUT, f).await {
        Ok(value) => value,
        Err(_) => panic!("test scenario exceeded {TEST_TIMEOUT:?}"),
    }
}
