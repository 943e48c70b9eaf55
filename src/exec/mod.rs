// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`locator`] resolves where the backend executable lives.
//! - [`runner`] spawns it once, enforces the timeout and classifies the exit.
//! - [`backend`] provides the `ExecutorBackend` trait and the production
//!   `ProcessBackend`, which tests can replace with a fake implementation.

pub mod backend;
pub mod locator;
pub mod runner;

pub use backend::{DEFAULT_TIMEOUT, ExecutorBackend, ProcessBackend};
pub use locator::{ExecutableLocator, default_search_paths};
pub use runner::{RawOutput, run, run_command};
