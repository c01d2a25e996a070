use crate::columns::BASE_COLUMNS;

/// A single cell of a loaded table.
///
/// Spreadsheet sources deliver text, numbers, or nothing at all; anything
/// that needs token parsing is coerced to text first via [`Cell::to_text`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    /// Build a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// True for `Empty` and for empty text.
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Text(value) => value.is_empty(),
            Cell::Number(_) => false,
            Cell::Empty => true,
        }
    }

    /// Coerce the cell to text for token parsing and export.
    ///
    /// Integral numbers render without a fractional suffix so codes survive
    /// a spreadsheet round trip.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Text(value) => value.clone(),
            Cell::Number(value) => format_number(*value),
            Cell::Empty => String::new(),
        }
    }
}

fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// An ordered grid: header row plus data rows.
///
/// Headers are not required to be unique. Rows should match the header
/// length, but source data is externally supplied, so ragged rows are
/// tolerated: missing trailing cells read as [`Cell::Empty`].
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Cell at (row, col), with `Empty` for anything out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&Cell::Empty)
    }

    /// Index of the first column with the given exact header text.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Number of base (identifying) columns actually present.
    pub fn base_width(&self) -> usize {
        BASE_COLUMNS.min(self.headers.len())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}
