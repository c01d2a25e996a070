//! Delimited-text export for gridform tables.

pub mod csv_out;

pub use csv_out::write_csv_table;
