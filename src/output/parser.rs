// src/output/parser.rs

//! Lenient parser for the backend's `time,value` text stream.
//!
//! Rules, applied per line after trimming surrounding whitespace:
//! - empty lines and the `t,y` header are skipped;
//! - a line must split on `,` into exactly two fields, each a valid `f64`;
//! - anything else is dropped silently. Dropped lines never turn into an
//!   error; their count is only reported at debug level.

use tracing::debug;

use super::{DELIMITER, HEADER};
use crate::types::SampleSeries;

/// Parse result plus bookkeeping about what was discarded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseReport {
    pub series: SampleSeries,
    pub skipped_headers: usize,
    pub dropped: usize,
}

pub fn parse(stdout: &str) -> SampleSeries {
    parse_with_report(stdout).series
}

pub fn parse_with_report(stdout: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for (idx, raw) in stdout.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line == HEADER {
            report.skipped_headers += 1;
            continue;
        }
        match parse_pair(line) {
            Some((t, y)) => report.series.push(t, y),
            None => {
                debug!(line_no = idx + 1, line, "dropping malformed backend line");
                report.dropped += 1;
            }
        }
    }

    if report.dropped > 0 {
        debug!(
            parsed = report.series.len(),
            dropped = report.dropped,
            "backend output contained malformed lines"
        );
    }

    report
}

fn parse_pair(line: &str) -> Option<(f64, f64)> {
    let mut fields = line.split(DELIMITER);
    let t = fields.next()?.trim().parse::<f64>().ok()?;
    let y = fields.next()?.trim().parse::<f64>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((t, y))
}
