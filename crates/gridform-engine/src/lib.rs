//! Pure reshape transforms for gridform tables.
//!
//! Four fixed operations convert between the wide encoding (one column per
//! capability or teacher attribute) and the long encoding (one row per
//! attribute instance):
//!
//! - **expand**: wide capability matrix to long (entity, item, weight) rows
//! - **collapse**: long rows back to the wide matrix
//! - **flatten**: comma-separated teacher lists to one row per teacher,
//!   with or without the teacher code
//!
//! Every operation takes a table by reference and returns a new table; the
//! input is never mutated, and sparse or ragged data never fails. Only a
//! missing required column is an error.

pub mod collapse;
pub mod expand;
pub mod flatten;
pub mod token;

pub use collapse::collapse;
pub use expand::expand;
pub use flatten::{flatten_names, flatten_with_codes};

use gridform_model::{Result, Table};

/// The four reshape operations, for callers that dispatch by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReshapeOp {
    /// Wide capability matrix to long form.
    Expand,
    /// Long form back to the wide capability matrix.
    Collapse,
    /// Teacher list to (schedule code, teacher name) rows.
    FlattenNames,
    /// Teacher list to (schedule code, teacher code, teacher name) rows.
    FlattenWithCodes,
}

impl ReshapeOp {
    pub const ALL: [ReshapeOp; 4] = [
        ReshapeOp::Expand,
        ReshapeOp::Collapse,
        ReshapeOp::FlattenNames,
        ReshapeOp::FlattenWithCodes,
    ];

    /// Stable identifier used in CLI flags and output file names.
    pub fn name(self) -> &'static str {
        match self {
            ReshapeOp::Expand => "expand",
            ReshapeOp::Collapse => "collapse",
            ReshapeOp::FlattenNames => "flatten-names",
            ReshapeOp::FlattenWithCodes => "flatten-codes",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ReshapeOp::Expand => "Expand a wide capability matrix into one row per item",
            ReshapeOp::Collapse => "Collapse long item rows back into a wide matrix",
            ReshapeOp::FlattenNames => "Split teacher lists into one row per teacher name",
            ReshapeOp::FlattenWithCodes => {
                "Split teacher lists into one row per teacher code and name"
            }
        }
    }

    /// Run the operation against a table, producing a fresh table.
    pub fn apply(self, table: &Table) -> Result<Table> {
        match self {
            ReshapeOp::Expand => expand(table),
            ReshapeOp::Collapse => collapse(table),
            ReshapeOp::FlattenNames => flatten_names(table),
            ReshapeOp::FlattenWithCodes => flatten_with_codes(table),
        }
    }
}
