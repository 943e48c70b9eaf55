use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ode_bridge::errors::{BridgeError, Result};
use ode_bridge::exec::{ExecutorBackend, RawOutput};
use ode_bridge::types::SolveRequest;

/// Failure a [`FakeBackend`] can be told to produce.
#[derive(Debug, Clone)]
pub enum FakeFailure {
    Timeout,
    ProcessFailure { exit_code: i32, stderr: String },
}

impl FakeFailure {
    fn into_error(self) -> BridgeError {
        match self {
            FakeFailure::Timeout => BridgeError::Timeout {
                timeout: Duration::from_secs(30),
            },
            FakeFailure::ProcessFailure { exit_code, stderr } => {
                BridgeError::ProcessFailure { exit_code, stderr }
            }
        }
    }
}

/// A fake backend that:
/// - records every request it was asked to execute
/// - returns the same canned stdout for each call
/// - optionally fails on one specific call (0-based)
#[derive(Debug, Clone)]
pub struct FakeBackend {
    stdout: String,
    fail_on: Option<(usize, FakeFailure)>,
    requests: Arc<Mutex<Vec<SolveRequest>>>,
}

impl FakeBackend {
    pub fn new(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            fail_on: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn fail_on(mut self, call: usize, failure: FakeFailure) -> Self {
        self.fail_on = Some((call, failure));
        self
    }

    /// Requests seen so far, in call order.
    pub fn requests(&self) -> Vec<SolveRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl ExecutorBackend for FakeBackend {
    fn execute(
        &self,
        request: SolveRequest,
    ) -> Pin<Box<dyn Future<Output = Result<RawOutput>> + Send + '_>> {
        let call = {
            let mut guard = self.requests.lock().unwrap();
            guard.push(request);
            guard.len() - 1
        };

        let outcome = match &self.fail_on {
            Some((n, failure)) if *n == call => Err(failure.clone().into_error()),
            _ => Ok(RawOutput {
                stdout: self.stdout.clone(),
                stderr: String::new(),
                exit_code: 0,
            }),
        };

        Box::pin(async move { outcome })
    }

    fn describe(&self) -> String {
        "fake".to_string()
    }
}
