//! Wide to long expansion of the capability matrix.

use gridform_model::{Cell, Result, Table, columns};
use tracing::debug;

use crate::token::split_token;

/// Expand a wide capability matrix into one row per (entity, item) pair.
///
/// Output headers are the base headers followed by `item_id`, `item_name`
/// and `weight`. A (row, column) pair is emitted only when the dynamic
/// header is non-empty and the weight cell holds a value; an absent weight
/// means the entity does not have that capability. Row order is input row
/// order, then header order within a row.
pub fn expand(table: &Table) -> Result<Table> {
    let base_width = table.base_width();
    let mut headers: Vec<String> = table.headers[..base_width].to_vec();
    headers.push(columns::ITEM_ID.to_string());
    headers.push(columns::ITEM_NAME.to_string());
    headers.push(columns::WEIGHT.to_string());

    let mut out = Table::new(headers);
    for row in &table.rows {
        let base: Vec<Cell> = base_cells(row, base_width);
        for (header, weight) in dynamic_pairs(table, row) {
            if header.is_empty() || weight.is_empty() {
                continue;
            }
            let (id, name) = split_token(header);
            let mut cells = base.clone();
            cells.push(Cell::text(id));
            cells.push(Cell::text(name));
            cells.push(weight.clone());
            out.push_row(cells);
        }
    }
    debug!(
        input_rows = table.row_count(),
        output_rows = out.row_count(),
        "expand complete"
    );
    Ok(out)
}

/// First `base_width` cells of a row, padded with `Empty` when the row is
/// short.
pub(crate) fn base_cells(row: &[Cell], base_width: usize) -> Vec<Cell> {
    (0..base_width)
        .map(|idx| row.get(idx).cloned().unwrap_or(Cell::Empty))
        .collect()
}

/// Iterate (header, cell) pairs over the dynamic columns of one row.
fn dynamic_pairs<'a>(
    table: &'a Table,
    row: &'a [Cell],
) -> impl Iterator<Item = (&'a str, &'a Cell)> {
    table
        .headers
        .iter()
        .enumerate()
        .skip(columns::BASE_COLUMNS)
        .map(|(idx, header)| (header.as_str(), row.get(idx).unwrap_or(&Cell::Empty)))
}
