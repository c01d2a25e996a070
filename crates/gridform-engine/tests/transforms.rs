//! Tests for the four reshape transforms.

use gridform_engine::{ReshapeOp, collapse, expand, flatten_names, flatten_with_codes};
use gridform_model::{Cell, ReshapeError, Table};

/// Seven base headers plus the given dynamic headers.
fn wide_headers(dynamic: &[&str]) -> Vec<String> {
    let mut headers: Vec<String> = (1..=7).map(|i| format!("base{i}")).collect();
    headers.extend(dynamic.iter().map(|h| (*h).to_string()));
    headers
}

/// Seven base cells derived from a tag plus the given dynamic cells.
fn wide_row(tag: &str, dynamic: &[Cell]) -> Vec<Cell> {
    let mut row: Vec<Cell> = (1..=7).map(|i| Cell::text(format!("{tag}{i}"))).collect();
    row.extend(dynamic.iter().cloned());
    row
}

fn texts(cells: &[Cell]) -> Vec<String> {
    cells.iter().map(Cell::to_text).collect()
}

#[test]
fn expand_emits_one_row_per_present_weight() {
    let mut table = Table::new(wide_headers(&["1:Reading", "2:Writing"]));
    table.push_row(wide_row("a", &[Cell::text("3"), Cell::text("5")]));

    let out = expand(&table).unwrap();

    assert_eq!(out.headers[7..], ["item_id", "item_name", "weight"]);
    assert_eq!(out.row_count(), 2);
    assert_eq!(texts(&out.rows[0])[7..], ["1", "Reading", "3"]);
    assert_eq!(texts(&out.rows[1])[7..], ["2", "Writing", "5"]);
    assert_eq!(texts(&out.rows[0])[..7], texts(&table.rows[0])[..7]);
}

#[test]
fn expand_skips_empty_weights_and_blank_headers() {
    let mut table = Table::new(wide_headers(&["1:a", "", "3:c", "4:d"]));
    table.push_row(wide_row(
        "x",
        &[Cell::text(""), Cell::text("9"), Cell::Empty, Cell::text("2")],
    ));

    let out = expand(&table).unwrap();

    // "1:a" has an empty weight, "" is a blank header, "3:c" has no cell.
    assert_eq!(out.row_count(), 1);
    assert_eq!(texts(&out.rows[0])[7..], ["4", "d", "2"]);
}

#[test]
fn expand_preserves_colons_in_item_names() {
    let mut table = Table::new(wide_headers(&["5:Math: Advanced", "6"]));
    table.push_row(wide_row("x", &[Cell::text("1"), Cell::text("2")]));

    let out = expand(&table).unwrap();

    assert_eq!(texts(&out.rows[0])[7..], ["5", "Math: Advanced", "1"]);
    // No colon in the header means an empty item name.
    assert_eq!(texts(&out.rows[1])[7..], ["6", "", "2"]);
}

#[test]
fn expand_keeps_numeric_weight_cells() {
    let mut table = Table::new(wide_headers(&["1:a"]));
    table.push_row(wide_row("x", &[Cell::Number(4.0)]));

    let out = expand(&table).unwrap();

    assert_eq!(out.rows[0][9], Cell::Number(4.0));
}

#[test]
fn expand_on_all_sparse_table_yields_headers_only() {
    let mut table = Table::new(wide_headers(&["1:a", "2:b"]));
    table.push_row(wide_row("x", &[Cell::Empty, Cell::text("")]));

    let out = expand(&table).unwrap();

    assert_eq!(out.row_count(), 0);
    assert_eq!(out.column_count(), 10);
}

#[test]
fn collapse_groups_rows_by_base_key() {
    let mut table = Table::new(wide_headers(&["item_id", "item_name", "weight"]));
    table.push_row(wide_row(
        "a",
        &[Cell::text("1"), Cell::text("Reading"), Cell::text("3")],
    ));
    table.push_row(wide_row(
        "a",
        &[Cell::text("2"), Cell::text("Writing"), Cell::text("5")],
    ));
    table.push_row(wide_row(
        "b",
        &[Cell::text("1"), Cell::text("Reading"), Cell::text("4")],
    ));

    let out = collapse(&table).unwrap();

    assert_eq!(out.headers[7..], ["1:Reading", "2:Writing"]);
    assert_eq!(out.row_count(), 2);
    assert_eq!(texts(&out.rows[0])[7..], ["3", "5"]);
    assert_eq!(texts(&out.rows[1])[7..], ["4", ""]);
    // Groups keep first-appearance order.
    assert_eq!(out.rows[0][0], Cell::text("a1"));
    assert_eq!(out.rows[1][0], Cell::text("b1"));
}

#[test]
fn collapse_sorts_labels_numerically_not_lexicographically() {
    let mut table = Table::new(wide_headers(&["item_id", "item_name", "weight"]));
    for (id, name) in [("2", "b"), ("10", "a"), ("1", "c")] {
        table.push_row(wide_row(
            "x",
            &[Cell::text(id), Cell::text(name), Cell::text("1")],
        ));
    }

    let out = collapse(&table).unwrap();

    assert_eq!(out.headers[7..], ["1:c", "2:b", "10:a"]);
}

#[test]
fn collapse_keeps_last_value_for_repeated_label() {
    let mut table = Table::new(wide_headers(&["item_id", "item_name", "weight"]));
    table.push_row(wide_row(
        "x",
        &[Cell::text("1"), Cell::text("a"), Cell::text("first")],
    ));
    table.push_row(wide_row(
        "x",
        &[Cell::text("1"), Cell::text("a"), Cell::text("second")],
    ));

    let out = collapse(&table).unwrap();

    assert_eq!(out.row_count(), 1);
    assert_eq!(texts(&out.rows[0])[7..], ["second"]);
}

#[test]
fn collapse_then_expand_round_trip() {
    let mut table = Table::new(wide_headers(&["1:Reading", "2:Writing", "10:Music"]));
    table.push_row(wide_row(
        "a",
        &[Cell::text("3"), Cell::text("5"), Cell::text("1")],
    ));
    table.push_row(wide_row(
        "b",
        &[Cell::text("2"), Cell::text("4"), Cell::text("9")],
    ));

    let out = collapse(&expand(&table).unwrap()).unwrap();

    assert_eq!(out, table);
}

fn teacher_table(rows: &[(&str, &str)]) -> Table {
    let mut table = Table::new(vec![
        "schedule_code".to_string(),
        "assigned_teachers".to_string(),
    ]);
    for (code, teachers) in rows {
        table.push_row(vec![Cell::text(*code), Cell::text(*teachers)]);
    }
    table
}

#[test]
fn flatten_names_multiplies_rows_per_teacher() {
    let table = teacher_table(&[("C100", "1:Alice,2:Bob")]);

    let out = flatten_names(&table).unwrap();

    assert_eq!(out.headers, ["schedule_code", "teacher_name"]);
    assert_eq!(out.row_count(), 2);
    assert_eq!(texts(&out.rows[0]), ["C100", "Alice"]);
    assert_eq!(texts(&out.rows[1]), ["C100", "Bob"]);
}

#[test]
fn flatten_names_uses_raw_entry_without_colon() {
    let table = teacher_table(&[("C200", " Carol , 7:Dan ")]);

    let out = flatten_names(&table).unwrap();

    assert_eq!(texts(&out.rows[0]), ["C200", "Carol"]);
    assert_eq!(texts(&out.rows[1]), ["C200", "Dan"]);
}

#[test]
fn flatten_names_emits_empty_row_for_empty_list() {
    let table = teacher_table(&[("C300", "")]);

    let out = flatten_names(&table).unwrap();

    assert_eq!(out.row_count(), 1);
    assert_eq!(texts(&out.rows[0]), ["C300", ""]);
}

#[test]
fn flatten_with_codes_splits_on_first_colon() {
    let table = teacher_table(&[("C100", "3, 4:Carol ,5:A:B")]);

    let out = flatten_with_codes(&table).unwrap();

    assert_eq!(
        out.headers,
        ["schedule_code", "teacher_code", "teacher_name"]
    );
    assert_eq!(texts(&out.rows[0]), ["C100", "3", ""]);
    assert_eq!(texts(&out.rows[1]), ["C100", "4", "Carol"]);
    assert_eq!(texts(&out.rows[2]), ["C100", "5", "A:B"]);
}

#[test]
fn flatten_reports_missing_columns_and_leaves_input_intact() {
    let mut table = Table::new(vec!["schedule_code".to_string(), "other".to_string()]);
    table.push_row(vec![Cell::text("C100"), Cell::text("x")]);
    let before = table.clone();

    let error = flatten_names(&table).unwrap_err();
    assert_eq!(
        error,
        ReshapeError::MissingColumn {
            name: "assigned_teachers".to_string()
        }
    );
    assert_eq!(table, before);

    let error = flatten_with_codes(&Table::new(vec!["assigned_teachers".to_string()])).unwrap_err();
    assert_eq!(
        error,
        ReshapeError::MissingColumn {
            name: "schedule_code".to_string()
        }
    );
}

#[test]
fn empty_tables_produce_headers_and_no_rows() {
    let wide = Table::new(wide_headers(&["1:a"]));
    let expanded = expand(&wide).unwrap();
    assert_eq!(expanded.row_count(), 0);
    assert_eq!(expanded.column_count(), 10);

    let long = Table::new(wide_headers(&["item_id", "item_name", "weight"]));
    let collapsed = collapse(&long).unwrap();
    assert_eq!(collapsed.row_count(), 0);
    assert_eq!(collapsed.headers.len(), 7);

    let teachers = teacher_table(&[]);
    let flat = flatten_names(&teachers).unwrap();
    assert_eq!(flat.row_count(), 0);
    assert_eq!(flat.headers, ["schedule_code", "teacher_name"]);
}

#[test]
fn apply_dispatches_by_operation() {
    let table = teacher_table(&[("C100", "1:Alice")]);

    let named = ReshapeOp::FlattenNames.apply(&table).unwrap();
    assert_eq!(named.headers.len(), 2);

    let coded = ReshapeOp::FlattenWithCodes.apply(&table).unwrap();
    assert_eq!(coded.headers.len(), 3);

    assert_eq!(ReshapeOp::Expand.name(), "expand");
    assert_eq!(ReshapeOp::ALL.len(), 4);
}
