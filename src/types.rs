// src/types.rs

//! Value types shared by the solver, the sweep orchestrator and the CLI.

use std::fmt;
use std::str::FromStr;

use crate::errors::{BridgeError, Result};

pub const DEFAULT_T0: f64 = 0.0;
pub const DEFAULT_TF: f64 = 10.0;
pub const DEFAULT_Y0: f64 = 1.0;
pub const DEFAULT_N_STEPS: usize = 100;

/// Requested integration window and sample count.
///
/// Construction goes through [`SolveRequest::new`], which validates the
/// fields once; every later copy (including sweep variants) is re-validated
/// by [`SolveRequest::with_override`].
///
/// NOTE: the backend is invoked without arguments, so none of these fields
/// reach the external process. They are logged and handed to the
/// [`crate::exec::ExecutorBackend`] for inspection only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveRequest {
    t0: f64,
    tf: f64,
    y0: f64,
    n_steps: usize,
}

impl SolveRequest {
    pub fn new(t0: f64, tf: f64, y0: f64, n_steps: usize) -> Result<Self> {
        let req = Self {
            t0,
            tf,
            y0,
            n_steps,
        };
        req.validate()?;
        Ok(req)
    }

    pub fn t0(&self) -> f64 {
        self.t0
    }

    pub fn tf(&self) -> f64 {
        self.tf
    }

    pub fn y0(&self) -> f64 {
        self.y0
    }

    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Copy of `self` with one parameter replaced.
    pub fn with_override(&self, param: SweepParameter, value: f64) -> Result<Self> {
        let mut next = *self;
        match param {
            SweepParameter::Y0 => next.y0 = value,
            SweepParameter::Tf => next.tf = value,
        }
        next.validate()?;
        Ok(next)
    }

    fn validate(&self) -> Result<()> {
        for (name, v) in [("t0", self.t0), ("tf", self.tf), ("y0", self.y0)] {
            if !v.is_finite() {
                return Err(BridgeError::InvalidRequest(format!(
                    "{name} must be finite (got {v})"
                )));
            }
        }
        if self.tf <= self.t0 {
            return Err(BridgeError::InvalidRequest(format!(
                "tf must be greater than t0 (t0 = {}, tf = {})",
                self.t0, self.tf
            )));
        }
        if self.n_steps == 0 {
            return Err(BridgeError::InvalidRequest(
                "n_steps must be >= 1 (got 0)".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SolveRequest {
    fn default() -> Self {
        Self {
            t0: DEFAULT_T0,
            tf: DEFAULT_TF,
            y0: DEFAULT_Y0,
            n_steps: DEFAULT_N_STEPS,
        }
    }
}

/// The request field a sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepParameter {
    /// Initial condition.
    Y0,
    /// Final time.
    Tf,
}

impl SweepParameter {
    pub fn as_str(&self) -> &'static str {
        match self {
            SweepParameter::Y0 => "y0",
            SweepParameter::Tf => "tf",
        }
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SweepParameter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "y0" => Ok(SweepParameter::Y0),
            "tf" => Ok(SweepParameter::Tf),
            other => Err(format!(
                "invalid sweep parameter: {other} (expected \"y0\" or \"tf\")"
            )),
        }
    }
}

/// Ordered `(time, value)` samples produced by one backend run.
///
/// Times and values are kept in two parallel vectors that only grow together
/// through [`SampleSeries::push`], so they always have equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSeries {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl SampleSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, t: f64, y: f64) {
        self.times.push(t);
        self.values.push(y);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        Some((*self.times.last()?, *self.values.last()?))
    }
}

impl FromIterator<(f64, f64)> for SampleSeries {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut series = SampleSeries::new();
        for (t, y) in iter {
            series.push(t, y);
        }
        series
    }
}

/// Which parameter to vary and the values to try, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSpec {
    pub parameter: SweepParameter,
    pub values: Vec<f64>,
}

impl SweepSpec {
    pub fn new(parameter: SweepParameter, values: Vec<f64>) -> Self {
        Self { parameter, values }
    }
}

/// One sweep entry: the override value and the series it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepEntry {
    pub value: f64,
    pub series: SampleSeries,
}

/// Sweep output, one entry per input value in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub parameter: SweepParameter,
    pub entries: Vec<SweepEntry>,
}

impl SweepResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.value).collect()
    }
}
