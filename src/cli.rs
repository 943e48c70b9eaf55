// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::types::SweepParameter;

/// Command-line arguments for `ode-bridge`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ode-bridge",
    version,
    about = "Run an external ODE backend, parse its samples and sweep parameters.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `OdeBridge.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ODE_BRIDGE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// Backend executable; skips the search-path probing.
    #[arg(long, value_name = "PATH", global = true)]
    pub executable: Option<PathBuf>,

    /// Wall-clock timeout per backend run, in seconds.
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<f64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Solve the ODE once and print or save the samples.
    Solve(SolveArgs),

    /// Run one solve per value of a chosen parameter.
    Sweep(SweepArgs),
}

#[derive(Debug, Clone, Args)]
pub struct SolveArgs {
    /// Initial time.
    #[arg(long)]
    pub t0: Option<f64>,

    /// Final time.
    #[arg(long)]
    pub tf: Option<f64>,

    /// Initial condition.
    #[arg(long)]
    pub y0: Option<f64>,

    /// Number of steps.
    #[arg(long)]
    pub steps: Option<usize>,

    /// Save to CSV instead of printing.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct SweepArgs {
    /// Parameter to vary.
    #[arg(long, value_name = "y0|tf")]
    pub param: SweepParameter,

    /// Comma-separated values, e.g. '0.5,1.0,2.0'.
    #[arg(long, value_name = "LIST")]
    pub values: String,

    /// Directory receiving one `<param>_<value>.csv` per value.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: PathBuf,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
