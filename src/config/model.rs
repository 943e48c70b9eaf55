// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::exec::{DEFAULT_TIMEOUT, default_search_paths};
use crate::types::{DEFAULT_N_STEPS, DEFAULT_T0, DEFAULT_TF, DEFAULT_Y0, SolveRequest};

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [solver]
/// executable = "build/ode_solver"
/// search_paths = ["build/ode_solver", "./ode_solver"]
/// timeout_secs = 30
///
/// [defaults]
/// t0 = 0.0
/// tf = 10.0
/// y0 = 1.0
/// n_steps = 100
/// ```
///
/// Every section and key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub solver: SolverSection,

    #[serde(default)]
    pub defaults: DefaultsSection,
}

/// `[solver]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SolverSection {
    /// Explicit backend path. When set, `search_paths` is ignored.
    #[serde(default)]
    pub executable: Option<PathBuf>,

    /// Ordered candidates tried when no explicit path is set.
    /// `None` means the built-in list from [`default_search_paths`].
    #[serde(default)]
    pub search_paths: Option<Vec<PathBuf>>,

    /// Wall-clock budget per backend run, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,
}

fn default_timeout_secs() -> f64 {
    DEFAULT_TIMEOUT.as_secs_f64()
}

impl Default for SolverSection {
    fn default() -> Self {
        Self {
            executable: None,
            search_paths: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// `[defaults]` section: base values for `solve` and `sweep`.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsSection {
    #[serde(default = "default_t0")]
    pub t0: f64,
    #[serde(default = "default_tf")]
    pub tf: f64,
    #[serde(default = "default_y0")]
    pub y0: f64,
    #[serde(default = "default_n_steps")]
    pub n_steps: usize,
}

fn default_t0() -> f64 {
    DEFAULT_T0
}

fn default_tf() -> f64 {
    DEFAULT_TF
}

fn default_y0() -> f64 {
    DEFAULT_Y0
}

fn default_n_steps() -> usize {
    DEFAULT_N_STEPS
}

impl Default for DefaultsSection {
    fn default() -> Self {
        Self {
            t0: DEFAULT_T0,
            tf: DEFAULT_TF,
            y0: DEFAULT_Y0,
            n_steps: DEFAULT_N_STEPS,
        }
    }
}

/// Validated solver settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    pub executable: Option<PathBuf>,
    pub search_paths: Vec<PathBuf>,
    pub timeout: Duration,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            executable: None,
            search_paths: default_search_paths(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Validated configuration. Build it with `ConfigFile::try_from(raw)` or
/// [`crate::config::load_and_validate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    pub solver: SolverConfig,
    pub defaults: SolveRequest,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(solver: SolverConfig, defaults: SolveRequest) -> Self {
        Self { solver, defaults }
    }
}
