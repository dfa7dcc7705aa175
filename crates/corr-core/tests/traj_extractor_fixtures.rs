//! Fixture-driven extractor tests covering both record layouts, the comment
//! policy, the field fallback, and the explicit parse-failure reporting.

use corr_core::domain::{CorrErrorCategory, TrajField, TrajFormat};
use corr_core::traj::{extract_series, read_series};
use std::fs;
use tempfile::TempDir;

/// One legacy-layout record: timestep in bytes 0..15, then three numeric
/// fields readable through the byte windows [15,38), [37,60) and [61,84).
fn fixed_width_record(step: u64, first: f64, second: f64, third: f64) -> String {
    format!("{step:>15}{first:>22.13}{second:>23.13} {third:>23.13}")
}

#[test]
fn fixed_width_fixture_parses_every_column() {
    let mut source = String::from("#TITLE: constrained z coordinate\n");
    let rows = [
        (0u64, 12.5, -0.25, 3.0),
        (100, 13.5, -0.5, 2.0),
        (200, 14.5, -0.75, 1.0),
    ];
    for (step, first, second, third) in rows {
        source.push_str(&fixed_width_record(step, first, second, third));
        source.push('\n');
    }

    let first = extract_series(&source, TrajField::Field1, TrajFormat::FixedWidth);
    assert_eq!(first.samples, vec![12.5, 13.5, 14.5]);
    assert_eq!(first.parse_failures, 0);

    let second = extract_series(&source, TrajField::Field2, TrajFormat::FixedWidth);
    assert_eq!(second.samples, vec![-0.25, -0.5, -0.75]);

    let third = extract_series(&source, TrajField::Field3, TrajFormat::FixedWidth);
    assert_eq!(third.samples, vec![3.0, 2.0, 1.0]);
}

#[test]
fn fallback_selector_reads_the_offset_61_column() {
    let source = format!("{}\n", fixed_width_record(0, 1.0, 2.0, 3.0));
    for selector in [0i64, 4, 99, -1] {
        let extracted = extract_series(
            &source,
            TrajField::from_number(selector),
            TrajFormat::FixedWidth,
        );
        assert_eq!(extracted.samples, vec![3.0], "selector {selector}");
    }
}

#[test]
fn short_fixed_width_records_are_counted_as_failures() {
    let source = format!(
        "{}\n{}\n{}\n",
        fixed_width_record(0, 1.0, 0.0, 0.0),
        "  100 too-short",
        fixed_width_record(200, 3.0, 0.0, 0.0),
    );
    let extracted = extract_series(&source, TrajField::Field1, TrajFormat::FixedWidth);
    assert_eq!(extracted.samples, vec![1.0, 0.0, 3.0]);
    assert_eq!(extracted.record_count, 3);
    assert_eq!(extracted.parse_failures, 1);
    assert_eq!(extracted.first_failure_line, Some(2));
}

#[test]
fn tokenized_fixture_skips_comments_and_counts_failures() {
    let source = "\
# NAMD z-constraint output
0 10.5 0.1
100 11.5 0.2
200 bogus 0.3

300 13.5 0.4
";
    let extracted = extract_series(source, TrajField::Field1, TrajFormat::Tokenized);
    assert_eq!(extracted.samples, vec![10.5, 11.5, 0.0, 13.5]);
    assert_eq!(extracted.record_count, 4);
    assert_eq!(extracted.parse_failures, 1);
    assert_eq!(extracted.first_failure_line, Some(4));
}

#[test]
fn read_series_round_trips_through_the_filesystem() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("na.traj");
    fs::write(&path, "#header\n0 1.5\n100 2.5\n200 3.5\n").expect("write fixture");

    let extracted =
        read_series(&path, TrajField::Field1, TrajFormat::Tokenized).expect("read series");
    assert_eq!(extracted.samples, vec![1.5, 2.5, 3.5]);
    assert_eq!(extracted.record_count, 3);
}

#[test]
fn missing_trajectory_is_an_explicit_io_error() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("does-not-exist.traj");

    let error = read_series(&path, TrajField::Field1, TrajFormat::Tokenized)
        .expect_err("missing file should fail");
    assert_eq!(error.category(), CorrErrorCategory::IoSystemError);
    assert_eq!(error.placeholder(), "IO.TRAJ_READ");
    assert_eq!(error.exit_code(), 3);
}
