//! Teacher list flattening: one row per teacher in a comma-separated cell.

use gridform_model::{Cell, ReshapeError, Result, Table, columns};
use tracing::debug;

use crate::token::split_token;

/// Flatten teacher lists into (schedule code, teacher name) rows.
///
/// Each input row multiplies into one output row per comma-separated entry
/// in its teacher cell. An entry encoded as `code:name` contributes the name
/// after the first colon; a bare entry is used as-is. Either way the result
/// is trimmed. An empty teacher cell still yields one row with an empty
/// name, matching split-on-empty semantics.
pub fn flatten_names(table: &Table) -> Result<Table> {
    let (schedule_idx, teacher_idx) = locate_columns(table)?;
    let mut out = Table::new(vec![
        columns::SCHEDULE_CODE.to_string(),
        columns::TEACHER_NAME.to_string(),
    ]);
    for row in &table.rows {
        let schedule = row.get(schedule_idx).cloned().unwrap_or(Cell::Empty);
        let list = row.get(teacher_idx).map(Cell::to_text).unwrap_or_default();
        for entry in list.split(',') {
            let name = decode_display_name(entry);
            out.push_row(vec![schedule.clone(), Cell::text(name)]);
        }
    }
    debug!(
        input_rows = table.row_count(),
        output_rows = out.row_count(),
        "flatten names complete"
    );
    Ok(out)
}

/// Flatten teacher lists into (schedule code, teacher code, teacher name)
/// rows.
///
/// Same row multiplication as [`flatten_names`], but each trimmed entry is
/// split on its first colon: the code is the leading segment, the name the
/// remainder. A bare entry becomes the code with an empty name.
pub fn flatten_with_codes(table: &Table) -> Result<Table> {
    let (schedule_idx, teacher_idx) = locate_columns(table)?;
    let mut out = Table::new(vec![
        columns::SCHEDULE_CODE.to_string(),
        columns::TEACHER_CODE.to_string(),
        columns::TEACHER_NAME.to_string(),
    ]);
    for row in &table.rows {
        let schedule = row.get(schedule_idx).cloned().unwrap_or(Cell::Empty);
        let list = row.get(teacher_idx).map(Cell::to_text).unwrap_or_default();
        for entry in list.split(',') {
            let (code, name) = split_token(entry.trim());
            out.push_row(vec![
                schedule.clone(),
                Cell::text(code),
                Cell::text(name),
            ]);
        }
    }
    debug!(
        input_rows = table.row_count(),
        output_rows = out.row_count(),
        "flatten with codes complete"
    );
    Ok(out)
}

/// Locate the two required columns, failing before any output is built.
fn locate_columns(table: &Table) -> Result<(usize, usize)> {
    let schedule_idx = require_column(table, columns::SCHEDULE_CODE)?;
    let teacher_idx = require_column(table, columns::ASSIGNED_TEACHERS)?;
    Ok((schedule_idx, teacher_idx))
}

fn require_column(table: &Table, name: &str) -> Result<usize> {
    table
        .column_index(name)
        .ok_or_else(|| ReshapeError::MissingColumn {
            name: name.to_string(),
        })
}

fn decode_display_name(entry: &str) -> String {
    match entry.split_once(':') {
        Some((_, name)) => name.trim().to_string(),
        None => entry.trim().to_string(),
    }
}
