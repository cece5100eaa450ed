//! Export module for spendlog
//!
//! Spreadsheet-compatible CSV export of the ledger.

pub mod csv;

pub use csv::export_expenses_csv;
