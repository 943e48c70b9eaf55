// src/sweep.rs

//! Parameter sweeps: one backend run per override value, strictly in order.

use std::path::{Path, PathBuf};

use tracing::{Instrument, info, info_span};

use crate::errors::Result;
use crate::exec::ExecutorBackend;
use crate::fs::FileSystem;
use crate::output::write_series;
use crate::solver::Solver;
use crate::types::{SolveRequest, SweepEntry, SweepParameter, SweepResult, SweepSpec};

/// Run `spec` against `solver`, starting from `base`.
///
/// Runs are sequential; the first failing value aborts the sweep and its
/// error is returned as is, discarding the entries collected so far.
pub async fn sweep<B: ExecutorBackend>(
    solver: &Solver<B>,
    spec: &SweepSpec,
    base: &SolveRequest,
) -> Result<SweepResult> {
    let mut entries = Vec::with_capacity(spec.values.len());

    for (idx, &value) in spec.values.iter().enumerate() {
        let request = base.with_override(spec.parameter, value)?;
        let span = info_span!("sweep", param = %spec.parameter, value, index = idx);

        let series = async {
            info!("running with {}={}", spec.parameter, value);
            solver.solve(&request).await
        }
        .instrument(span)
        .await?;

        entries.push(SweepEntry { value, series });
    }

    Ok(SweepResult {
        parameter: spec.parameter,
        entries,
    })
}

/// File name for one sweep entry: `<param>_<value to 3 decimals>.csv`.
pub fn output_file_name(param: SweepParameter, value: f64) -> String {
    format!("{}_{:.3}.csv", param.as_str(), value)
}

/// Write every entry of `result` into `dir` (created if missing).
///
/// Returns the written paths in entry order. Values that format to the same
/// three-decimal name overwrite each other, last one wins.
pub fn write_sweep(
    fs: &dyn FileSystem,
    result: &SweepResult,
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs.create_dir_all(dir)?;

    let mut written = Vec::with_capacity(result.len());
    for entry in &result.entries {
        let path = dir.join(output_file_name(result.parameter, entry.value));
        written.push(write_series(fs, &entry.series, &path)?);
    }

    info!(dir = %dir.display(), files = written.len(), "saved sweep results");
    Ok(written)
}

/// Parse a comma-separated list like `"0.5, 1.0,2.0"`.
pub fn parse_values(list: &str) -> std::result::Result<Vec<f64>, String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|e| format!("invalid sweep value {s:?}: {e}"))
        })
        .collect()
}
