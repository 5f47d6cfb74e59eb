use std::path::{Path, PathBuf};

use approx::assert_relative_eq;
use covid_dash_rs::core::load_csv;
use covid_dash_rs::{Cell, DashError};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

#[test]
fn loader_types_whole_columns() {
    let table = load_csv(fixture("mixed_types.csv")).expect("load");
    assert_eq!(table.row_count(), 3);

    // `score` contains "NA", so the whole column stays text for the
    // reshaper to coerce per row.
    assert_eq!(table.cell(0, "score"), Some(&Cell::text("12.5")));
    assert_eq!(table.cell(0, "name"), Some(&Cell::text("alpha")));

    let values = load_csv(fixture("single_series.csv")).expect("load");
    match values.cell(0, "value") {
        Some(Cell::Number(number)) => assert_relative_eq!(*number, 102.4),
        other => panic!("expected numeric cell, got {other:?}"),
    }
}

#[test]
fn missing_file_is_a_dataset_read_error() {
    let err = load_csv(fixture("does_not_exist.csv")).unwrap_err();
    match err {
        DashError::DatasetRead { path, .. } => {
            assert!(path.ends_with("does_not_exist.csv"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn wide_eurostat_export_loads_with_all_period_columns() {
    let table = load_csv(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("datasets/hicp.csv"),
    )
    .expect("load");
    assert_eq!(table.row_count(), 3);
    // id + 2 metadata + 16 months
    assert_eq!(table.column_count(), 19);
    assert!(table.column_index("freq;unit;coicop;geo\\TIME_PERIOD").is_some());
}
