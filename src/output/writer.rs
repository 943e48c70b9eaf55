// src/output/writer.rs

//! CSV persistence for sample series.

use std::path::{Path, PathBuf};

use tracing::info;

use super::{DELIMITER, HEADER};
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::types::SampleSeries;

/// Render `series` as CSV text: the `t,y` header then one row per sample.
///
/// Floats use Rust's shortest round-trip formatting, so reading the text back
/// through [`super::parse`] reproduces the series exactly.
pub fn render_csv(series: &SampleSeries) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + series.len() * 24);
    out.push_str(HEADER);
    out.push('\n');
    for (t, y) in series.iter() {
        out.push_str(&format!("{t:?}{DELIMITER}{y:?}\n"));
    }
    out
}

/// Create or overwrite `path` with the CSV rendering of `series`.
///
/// Not atomic: a failure mid-write may leave a partial file behind.
pub fn write_series(fs: &dyn FileSystem, series: &SampleSeries, path: &Path) -> Result<PathBuf> {
    fs.write(path, render_csv(series).as_bytes())?;
    info!(path = %path.display(), rows = series.len(), "saved results");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;
    use crate::output::parse;

    #[test]
    fn renders_header_even_for_empty_series() {
        assert_eq!(render_csv(&SampleSeries::new()), "t,y\n");
    }

    #[test]
    fn renders_one_row_per_sample() {
        let series: SampleSeries = vec![(0.0, 1.0), (0.5, 0.778801)].into_iter().collect();
        assert_eq!(render_csv(&series), "t,y\n0.0,1.0\n0.5,0.778801\n");
    }

    #[test]
    fn overwrites_existing_file() {
        let fs = MockFileSystem::new();
        fs.add_file("out.csv", b"stale contents\n".to_vec());

        let series: SampleSeries = vec![(1.0, 2.0)].into_iter().collect();
        let path = write_series(&fs, &series, Path::new("out.csv")).unwrap();

        assert_eq!(path, PathBuf::from("out.csv"));
        assert_eq!(fs.contents("out.csv").unwrap(), "t,y\n1.0,2.0\n");
    }

    #[test]
    fn rendered_text_parses_back_exactly() {
        let series: SampleSeries = vec![(0.0, 1.0), (0.1, 0.951229424500714), (1e-7, 3.5e12)]
            .into_iter()
            .collect();
        assert_eq!(parse(&render_csv(&series)), series);
    }
}
