// src/errors.rs

//! Crate-wide error type.
//!
//! The three backend-level kinds (`NotFound`, `Timeout`, `ProcessFailure`)
//! are what callers of [`crate::solver::Solver`] and [`crate::sweep`] are
//! expected to match on. Parsing never produces an error.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("backend executable not found (tried: {})", display_paths(.candidates))]
    NotFound { candidates: Vec<PathBuf> },

    #[error("backend timed out after {:.3}s", .timeout.as_secs_f64())]
    Timeout { timeout: Duration },

    #[error("backend failed with exit code {exit_code}: {stderr}")]
    ProcessFailure { exit_code: i32, stderr: String },

    #[error("Invalid solve request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "<no candidates>".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, BridgeError>;
