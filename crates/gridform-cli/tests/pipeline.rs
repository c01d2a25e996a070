//! Integration tests for the pipeline module.

use std::fs;
use std::path::Path;

use gridform_cli::pipeline::{default_output_path, render_preview, run_reshape};
use gridform_engine::ReshapeOp;
use gridform_model::{Cell, Table};
use tempfile::tempdir;

#[test]
fn default_output_path_appends_operation_name() {
    let path = default_output_path(Path::new("/data/schedule.csv"), ReshapeOp::Expand);
    assert_eq!(path, Path::new("/data/schedule-expand.csv"));

    let path = default_output_path(Path::new("table.csv"), ReshapeOp::FlattenWithCodes);
    assert_eq!(path, Path::new("table-flatten-codes.csv"));
}

#[test]
fn run_reshape_flattens_end_to_end() {
    let dir = tempdir().expect("create temp dir");
    let input = dir.path().join("schedule.csv");
    fs::write(
        &input,
        "schedule_code,assigned_teachers\nC100,\"1:Alice,2:Bob\"\n",
    )
    .unwrap();

    let outcome = run_reshape(&input, ReshapeOp::FlattenNames, None).unwrap();

    assert_eq!(outcome.input_rows, 1);
    assert_eq!(outcome.output_rows, 2);
    assert_eq!(outcome.output_path, dir.path().join("schedule-flatten-names.csv"));

    let bytes = fs::read(&outcome.output_path).unwrap();
    assert_eq!(&bytes[..3], b"\xef\xbb\xbf");
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert_eq!(text, "schedule_code,teacher_name\nC100,Alice\nC100,Bob\n");
}

#[test]
fn run_reshape_honors_explicit_output_path() {
    let dir = tempdir().expect("create temp dir");
    let input = dir.path().join("in.csv");
    let output = dir.path().join("nested-out.csv");
    fs::write(&input, "schedule_code,assigned_teachers\nC1,9:Eve\n").unwrap();

    let outcome = run_reshape(&input, ReshapeOp::FlattenWithCodes, Some(&output)).unwrap();

    assert_eq!(outcome.output_path, output);
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.ends_with("schedule_code,teacher_code,teacher_name\nC1,9,Eve\n"));
}

#[test]
fn run_reshape_writes_nothing_when_a_column_is_missing() {
    let dir = tempdir().expect("create temp dir");
    let input = dir.path().join("in.csv");
    fs::write(&input, "schedule_code,other\nC1,x\n").unwrap();

    let error = run_reshape(&input, ReshapeOp::FlattenNames, None).unwrap_err();
    assert!(error.to_string().contains("flatten-names"));

    let expected_output = default_output_path(&input, ReshapeOp::FlattenNames);
    assert!(!expected_output.exists());
}

#[test]
fn render_preview_caps_rows_at_limit() {
    let mut table = Table::new(vec!["a".to_string()]);
    for idx in 0..10 {
        table.push_row(vec![Cell::text(format!("{idx}"))]);
    }

    let rendered = render_preview(&table, 3);
    assert_eq!(rendered.row_iter().count(), 3);
}
