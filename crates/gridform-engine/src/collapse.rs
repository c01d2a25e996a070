//! Long to wide collapse, restoring the capability matrix.

use std::collections::{BTreeMap, BTreeSet};

use gridform_model::{Cell, Result, Table, columns};
use tracing::debug;

use crate::expand::base_cells;
use crate::token::{group_key, split_token};

/// Column indices of the long-form item columns, right after the base
/// prefix: item id, item name, weight.
const ITEM_ID_COL: usize = columns::BASE_COLUMNS;
const ITEM_NAME_COL: usize = columns::BASE_COLUMNS + 1;
const WEIGHT_COL: usize = columns::BASE_COLUMNS + 2;

struct CollapseGroup {
    base: Vec<Cell>,
    values: BTreeMap<String, Cell>,
}

/// Collapse long (entity, item, weight) rows into one row per entity with
/// one column per distinct `id:name` label.
///
/// Rows sharing all base cells collapse into one output row; the first-seen
/// base values win and groups keep first-appearance order. Labels are sorted
/// numerically by the integer prefix before the first colon, so `10:x`
/// lands after `9:y`. A label repeated within a group keeps the last value
/// written. Distinct labels sharing an id are kept as distinct columns,
/// which makes collapse an exact inverse of expand only when ids are unique.
pub fn collapse(table: &Table) -> Result<Table> {
    let base_width = table.base_width();
    let mut groups: BTreeMap<String, CollapseGroup> = BTreeMap::new();
    let mut order: Vec<String> = Vec::new();
    let mut labels: BTreeSet<String> = BTreeSet::new();

    for row in &table.rows {
        let base = base_cells(row, base_width);
        let key = group_key(&base);
        let group = groups.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            CollapseGroup {
                base,
                values: BTreeMap::new(),
            }
        });
        let label = format!(
            "{}:{}",
            cell_text(row, ITEM_ID_COL),
            cell_text(row, ITEM_NAME_COL)
        );
        labels.insert(label.clone());
        let weight = row.get(WEIGHT_COL).cloned().unwrap_or(Cell::Empty);
        group.values.insert(label, weight);
    }

    let mut dynamic: Vec<String> = labels.into_iter().collect();
    // Stable sort: unparsable prefixes keep their lexicographic order after
    // every numeric one.
    dynamic.sort_by_key(|label| label_sort_key(label));

    let mut headers: Vec<String> = table.headers[..base_width].to_vec();
    headers.extend(dynamic.iter().cloned());

    let mut out = Table::new(headers);
    for key in &order {
        let Some(group) = groups.get(key) else {
            continue;
        };
        let mut cells = group.base.clone();
        for label in &dynamic {
            cells.push(group.values.get(label).cloned().unwrap_or(Cell::Empty));
        }
        out.push_row(cells);
    }
    debug!(
        input_rows = table.row_count(),
        groups = out.row_count(),
        item_columns = dynamic.len(),
        "collapse complete"
    );
    Ok(out)
}

fn cell_text(row: &[Cell], idx: usize) -> String {
    row.get(idx).map(Cell::to_text).unwrap_or_default()
}

fn label_sort_key(label: &str) -> i64 {
    let (id, _) = split_token(label);
    id.trim().parse::<i64>().unwrap_or(i64::MAX)
}
