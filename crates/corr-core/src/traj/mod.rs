//! SeriesExtractor: turns a NAMD `.traj` text source into an ordered `f64`
//! time series, skipping `#` comment records.
//!
//! Malformed fields keep the legacy numeric behavior (the value becomes 0.0)
//! but are counted and surfaced instead of silently swallowed; see
//! `ExtractedSeries::parse_failures`.

mod parser;

use crate::domain::{CorrError, CorrResult, TrajField, TrajFormat};
use std::fs;
use std::path::Path;

/// Extraction result. `record_count == samples.len()` always holds; the
/// trailing record of a capture is not analytically meaningful, and dropping
/// it is the pipeline's responsibility, not the extractor's.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedSeries {
    pub samples: Vec<f64>,
    pub record_count: usize,
    pub parse_failures: usize,
    pub first_failure_line: Option<usize>,
}

/// Read and extract one field of every retained record of `path`.
pub fn read_series(
    path: &Path,
    field: TrajField,
    format: TrajFormat,
) -> CorrResult<ExtractedSeries> {
    let source = fs::read_to_string(path).map_err(|error| {
        CorrError::io_system(
            "IO.TRAJ_READ",
            format!("cannot read trajectory '{}': {}", path.display(), error),
        )
    })?;
    Ok(extract_series(&source, field, format))
}

/// Extract one field of every retained record of an in-memory source.
pub fn extract_series(source: &str, field: TrajField, format: TrajFormat) -> ExtractedSeries {
    let mut samples = Vec::new();
    let mut parse_failures = 0usize;
    let mut first_failure_line = None;

    for (line_index, line) in source.lines().enumerate() {
        if parser::is_skipped_record(line) {
            continue;
        }

        let value = parser::field_substring(line, field, format)
            .and_then(parser::parse_field_value);
        match value {
            Some(value) => samples.push(value),
            None => {
                parse_failures += 1;
                first_failure_line.get_or_insert(line_index + 1);
                // Legacy atof parity: the record still contributes a sample.
                samples.push(0.0);
            }
        }
    }

    ExtractedSeries {
        record_count: samples.len(),
        samples,
        parse_failures,
        first_failure_line,
    }
}
