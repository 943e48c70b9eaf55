// src/config/validate.rs

use std::time::Duration;

use crate::config::model::{ConfigFile, RawConfigFile, SolverConfig, SolverSection};
use crate::errors::{BridgeError, Result};
use crate::exec::default_search_paths;
use crate::types::SolveRequest;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = BridgeError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        let solver = validate_solver_section(raw.solver)?;
        let d = raw.defaults;
        let defaults = SolveRequest::new(d.t0, d.tf, d.y0, d.n_steps).map_err(|e| match e {
            BridgeError::InvalidRequest(msg) => {
                BridgeError::ConfigError(format!("[defaults]: {msg}"))
            }
            other => other,
        })?;
        Ok(ConfigFile::new_unchecked(solver, defaults))
    }
}

fn validate_solver_section(section: SolverSection) -> Result<SolverConfig> {
    let secs = section.timeout_secs;
    let timeout = match Duration::try_from_secs_f64(secs) {
        Ok(d) if !d.is_zero() => d,
        _ => {
            return Err(BridgeError::ConfigError(format!(
                "[solver].timeout_secs must be a positive number of seconds (got {secs})"
            )));
        }
    };

    let search_paths = section.search_paths.unwrap_or_else(default_search_paths);
    if section.executable.is_none() && search_paths.is_empty() {
        return Err(BridgeError::ConfigError(
            "[solver].search_paths must not be empty when no executable is set".to_string(),
        ));
    }

    Ok(SolverConfig {
        executable: section.executable,
        search_paths,
        timeout,
    })
}
