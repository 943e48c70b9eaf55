// src/solver.rs

//! The solver handle: a resolved backend plus the parse/persist pipeline.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{Instrument, Span, debug, info, info_span};

use crate::config::SolverConfig;
use crate::errors::Result;
use crate::exec::{ExecutableLocator, ExecutorBackend, ProcessBackend};
use crate::fs::{FileSystem, RealFileSystem};
use crate::output::{parse_with_report, write_series};
use crate::types::{SampleSeries, SolveRequest};

/// Handle to one backend.
///
/// A `Solver<ProcessBackend>` can only be built for an executable that was
/// found on disk; construction fails with `NotFound` before anything is
/// spawned. The handle holds no per-call state, so every `solve` is
/// independent of the previous one.
pub struct Solver<B: ExecutorBackend = ProcessBackend> {
    backend: B,
    fs: Arc<dyn FileSystem>,
    span: Span,
}

impl Solver<ProcessBackend> {
    /// Resolve the executable from `config` and build a process-backed solver.
    pub fn new(config: &SolverConfig) -> Result<Self> {
        Self::with_filesystem(config, Arc::new(RealFileSystem))
    }

    /// Like [`Solver::new`], probing and writing through `fs`.
    pub fn with_filesystem(config: &SolverConfig, fs: Arc<dyn FileSystem>) -> Result<Self> {
        let locator = ExecutableLocator::new(config.search_paths.clone());
        let executable = locator.resolve(fs.as_ref(), config.executable.as_deref())?;

        info!(
            executable = %executable.display(),
            timeout_secs = config.timeout.as_secs_f64(),
            "initialized backend solver"
        );

        let backend = ProcessBackend::new(executable, config.timeout);
        Ok(Self::with_backend(backend).with_fs(fs))
    }

    pub fn executable_path(&self) -> &Path {
        self.backend.executable()
    }
}

impl<B: ExecutorBackend> Solver<B> {
    /// Wrap an arbitrary backend (no path resolution involved).
    pub fn with_backend(backend: B) -> Self {
        let span = info_span!("solver", backend = %backend.describe());
        Self {
            backend,
            fs: Arc::new(RealFileSystem),
            span,
        }
    }

    /// Replace the filesystem used by [`Solver::solve_to_file`].
    pub fn with_fs(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn filesystem(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    /// Run the backend once and parse its output.
    ///
    /// `request` is logged but not forwarded: the backend runs with its own
    /// fixed parameters.
    pub async fn solve(&self, request: &SolveRequest) -> Result<SampleSeries> {
        self.solve_inner(*request)
            .instrument(self.span.clone())
            .await
    }

    async fn solve_inner(&self, request: SolveRequest) -> Result<SampleSeries> {
        debug!(
            t0 = request.t0(),
            tf = request.tf(),
            y0 = request.y0(),
            n_steps = request.n_steps(),
            "solving ODE"
        );

        let raw = self.backend.execute(request).await?;
        let report = parse_with_report(&raw.stdout);

        info!(
            points = report.series.len(),
            dropped_lines = report.dropped,
            "solved ODE"
        );
        Ok(report.series)
    }

    /// Solve and write the series to `path` as CSV. Returns `path`.
    pub async fn solve_to_file(&self, path: &Path, request: &SolveRequest) -> Result<PathBuf> {
        let series = self.solve(request).await?;
        self.span
            .in_scope(|| write_series(self.fs.as_ref(), &series, path))
    }
}
