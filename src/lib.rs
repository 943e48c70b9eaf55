// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod output;
pub mod solver;
pub mod sweep;
pub mod types;

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::cli::{CliArgs, Command, SolveArgs, SweepArgs};
use crate::config::{ConfigFile, default_config_path, load_or_default};
use crate::solver::Solver;
use crate::types::{SolveRequest, SweepSpec};

pub use crate::errors::BridgeError;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (file, then CLI overrides)
/// - executable resolution
/// - the `solve` / `sweep` subcommands
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = effective_config(&args)?;
    debug!(?cfg, "effective configuration");

    match &args.command {
        Command::Solve(solve_args) => run_solve(&cfg, solve_args).await,
        Command::Sweep(sweep_args) => run_sweep(&cfg, sweep_args).await,
    }
}

/// Merge the config file (if any) with the global CLI flags.
pub fn effective_config(args: &CliArgs) -> Result<ConfigFile> {
    let (path, required) = match &args.config {
        Some(p) => (p.clone(), true),
        None => (default_config_path(), false),
    };
    let mut cfg = load_or_default(&path, required)
        .with_context(|| format!("loading config {}", path.display()))?;

    if let Some(exe) = &args.executable {
        cfg.solver.executable = Some(exe.clone());
    }
    if let Some(secs) = args.timeout {
        cfg.solver.timeout = match Duration::try_from_secs_f64(secs) {
            Ok(d) if !d.is_zero() => d,
            _ => bail!("--timeout must be a positive number of seconds (got {secs})"),
        };
    }

    Ok(cfg)
}

async fn run_solve(cfg: &ConfigFile, args: &SolveArgs) -> Result<()> {
    let base = cfg.defaults;
    let request = SolveRequest::new(
        args.t0.unwrap_or(base.t0()),
        args.tf.unwrap_or(base.tf()),
        args.y0.unwrap_or(base.y0()),
        args.steps.unwrap_or(base.n_steps()),
    )?;

    let solver = Solver::new(&cfg.solver)?;

    match &args.output {
        Some(path) => {
            let written = solver.solve_to_file(path, &request).await?;
            println!("Results saved to {}", written.display());
        }
        None => {
            let series = solver.solve(&request).await?;
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            writeln!(out, "t,y")?;
            for (t, y) in series.iter() {
                writeln!(out, "{t:.6},{y:.6}")?;
            }
        }
    }

    Ok(())
}

async fn run_sweep(cfg: &ConfigFile, args: &SweepArgs) -> Result<()> {
    let values = sweep::parse_values(&args.values).map_err(anyhow::Error::msg)?;
    if values.is_empty() {
        bail!("--values must contain at least one number");
    }

    let spec = SweepSpec::new(args.param, values);
    let solver = Solver::new(&cfg.solver)?;

    let result = sweep::sweep(&solver, &spec, &cfg.defaults).await?;
    let written = sweep::write_sweep(solver.filesystem(), &result, &args.output_dir)?;

    println!(
        "Saved {} results to {}",
        written.len(),
        args.output_dir.display()
    );
    Ok(())
}
