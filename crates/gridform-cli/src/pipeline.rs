//! Stage functions shared by the CLI commands: load, reshape, export.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement};
use tracing::{info, info_span};

use gridform_engine::ReshapeOp;
use gridform_ingest::read_csv_table;
use gridform_model::Table;
use gridform_output::write_csv_table;

/// Result of one reshape run, for summary printing and previews.
#[derive(Debug)]
pub struct ReshapeOutcome {
    pub output_path: PathBuf,
    pub input_rows: usize,
    pub output_rows: usize,
    pub table: Table,
}

/// Load a CSV table, apply one reshape operation, and write the result.
///
/// The output file is only created after the operation succeeds, so a
/// failed reshape leaves the filesystem untouched.
pub fn run_reshape(input: &Path, op: ReshapeOp, output: Option<&Path>) -> Result<ReshapeOutcome> {
    let span = info_span!("reshape", op = op.name(), input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_csv_table(input)?;
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "input loaded"
    );

    let reshaped = op
        .apply(&table)
        .with_context(|| format!("apply {}", op.name()))?;

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input, op),
    };
    write_csv_table(&output_path, &reshaped)?;
    info!(
        rows = reshaped.row_count(),
        columns = reshaped.column_count(),
        output = %output_path.display(),
        duration_ms = start.elapsed().as_millis(),
        "reshape complete"
    );

    Ok(ReshapeOutcome {
        output_path,
        input_rows: table.row_count(),
        output_rows: reshaped.row_count(),
        table: reshaped,
    })
}

/// Default output path: the input path with `-<op>.csv` appended to its
/// stem.
pub fn default_output_path(input: &Path, op: ReshapeOp) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|value| value.to_str())
        .unwrap_or("table");
    input.with_file_name(format!("{stem}-{}.csv", op.name()))
}

/// Render the first `limit` rows of a table for terminal display.
pub fn render_preview(table: &Table, limit: usize) -> comfy_table::Table {
    let mut rendered = comfy_table::Table::new();
    let headers: Vec<Cell> = table.headers.iter().map(|header| header_cell(header)).collect();
    rendered.set_header(headers);
    apply_table_style(&mut rendered);
    for row_idx in 0..table.row_count().min(limit) {
        let record: Vec<Cell> = (0..table.column_count())
            .map(|col_idx| Cell::new(table.cell(row_idx, col_idx).to_text()))
            .collect();
        rendered.add_row(record);
    }
    rendered
}

pub fn apply_table_style(table: &mut comfy_table::Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
