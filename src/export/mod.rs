//! Export module for Pocketbook
//!
//! Provides data export in two formats:
//! - CSV: For spreadsheets
//! - JSON: Same array format as storage, can be imported back

pub mod csv;
pub mod json;

pub use csv::export_expenses_csv;
pub use json::{export_expenses_json, import_expenses, parse_expenses_json};
