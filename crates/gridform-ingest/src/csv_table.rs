use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use gridform_model::{Cell, Table};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> Cell {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        Cell::Empty
    } else {
        Cell::text(trimmed)
    }
}

/// Read a delimited-text file into a [`Table`].
///
/// The first non-empty record is the header row; all-empty records are
/// dropped. Short rows are padded with [`Cell::Empty`] to the header width
/// and long rows are truncated to it. Cells stay textual: numbers are not
/// inferred here, so codes with leading zeros survive a round trip.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let mut headers: Option<Vec<String>> = None;
    let mut table = Table::default();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => {
                let parsed: Vec<String> = record.iter().map(normalize_header).collect();
                table = Table::new(parsed.clone());
                headers = Some(parsed);
            }
            Some(parsed) => {
                let mut row = Vec::with_capacity(parsed.len());
                for idx in 0..parsed.len() {
                    let value = record.get(idx).unwrap_or("");
                    row.push(normalize_cell(value));
                }
                table.push_row(row);
            }
        }
    }
    debug!(
        path = %path.display(),
        columns = table.column_count(),
        rows = table.row_count(),
        "csv table loaded"
    );
    Ok(table)
}
