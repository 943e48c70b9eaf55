// src/output/mod.rs

//! Backend output handling.
//!
//! - [`parser`] turns the backend's stdout into a [`crate::types::SampleSeries`].
//! - [`writer`] persists a series as a two-column CSV file.

pub mod parser;
pub mod writer;

pub use parser::{ParseReport, parse, parse_with_report};
pub use writer::{render_csv, write_series};

/// Column header emitted by the backend and written by [`writer`].
pub const HEADER: &str = "t,y";

/// Field delimiter in both directions.
pub const DELIMITER: char = ',';
