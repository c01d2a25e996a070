//! Shared data model for the gridform reshape tools.
//!
//! - **table**: the in-memory grid (`Table`) and cell values (`Cell`)
//! - **columns**: fixed column conventions shared by every reshape operation
//! - **error**: error taxonomy for reshape operations

pub mod columns;
pub mod error;
pub mod table;

pub use error::{ReshapeError, Result};
pub use table::{Cell, Table};
