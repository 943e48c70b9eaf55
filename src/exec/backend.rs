// src/exec/backend.rs

//! Pluggable backend abstraction.
//!
//! The solver talks to an `ExecutorBackend` instead of spawning processes
//! itself. Production code uses [`ProcessBackend`]; tests provide their own
//! implementation that returns canned output and records requests.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::time::Duration;

use tracing::debug;

use crate::errors::Result;
use crate::exec::runner::{self, RawOutput};
use crate::types::SolveRequest;

/// Default wall-clock budget for one backend run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Trait abstracting how one solve is executed.
pub trait ExecutorBackend: Send + Sync {
    /// Run the backend once for `request` and return its raw output.
    ///
    /// Implementations must not run two processes at once for one call.
    fn execute(
        &self,
        request: SolveRequest,
    ) -> Pin<Box<dyn Future<Output = Result<RawOutput>> + Send + '_>>;

    /// Short human-readable identity, used in log spans.
    fn describe(&self) -> String;
}

/// Real backend: the external executable run as a child process.
///
/// The executable is started with no arguments, so the request fields have
/// no effect on what it computes. They are only logged.
#[derive(Debug, Clone)]
pub struct ProcessBackend {
    executable: PathBuf,
    timeout: Duration,
}

impl ProcessBackend {
    pub fn new(executable: PathBuf, timeout: Duration) -> Self {
        Self {
            executable,
            timeout,
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }
}

impl ExecutorBackend for ProcessBackend {
    fn execute(
        &self,
        request: SolveRequest,
    ) -> Pin<Box<dyn Future<Output = Result<RawOutput>> + Send + '_>> {
        Box::pin(async move {
            debug!(
                t0 = request.t0(),
                tf = request.tf(),
                y0 = request.y0(),
                n_steps = request.n_steps(),
                "request parameters are not forwarded to the backend process"
            );
            runner::run(&self.executable, self.timeout).await
        })
    }

    fn describe(&self) -> String {
        self.executable.display().to_string()
    }
}
