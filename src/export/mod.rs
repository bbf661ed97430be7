//! CSV export of filtered record sets
//!
//! Columns are the top-level record fields followed by the flattened
//! `debtor_info.*` fields. Missing values are written as empty cells.

mod csv_export;

pub use csv_export::{CsvExporter, ExportError, ExportResult};
