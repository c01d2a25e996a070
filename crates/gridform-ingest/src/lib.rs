//! Delimited-text ingestion for gridform tables.

pub mod csv_table;

pub use csv_table::read_csv_table;
