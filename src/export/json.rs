//! JSON export and import
//!
//! Exports use the same array format as the expense file, so an export can
//! be imported back or dropped in place of `expenses.json`.

use std::collections::HashSet;
use std::io::Write;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::Expense;
use crate::storage::Storage;

/// Write expenses as a JSON array
pub fn export_expenses_json<W: Write>(
    expenses: &[Expense],
    writer: &mut W,
    pretty: bool,
) -> PocketbookResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, expenses)
    } else {
        serde_json::to_writer(writer, expenses)
    }
    .map_err(|e| PocketbookError::Export(e.to_string()))?;

    Ok(())
}

/// Parse and validate an exported expense array
///
/// Unlike loading the expense file, malformed input is an error here.
pub fn parse_expenses_json(json_str: &str) -> PocketbookResult<Vec<Expense>> {
    let expenses: Vec<Expense> =
        serde_json::from_str(json_str).map_err(|e| PocketbookError::Import(e.to_string()))?;

    let mut seen = HashSet::new();
    for (index, expense) in expenses.iter().enumerate() {
        expense
            .validate()
            .map_err(|e| PocketbookError::Import(format!("expense #{}: {}", index + 1, e)))?;
        if !seen.insert(expense.id) {
            return Err(PocketbookError::Import(format!(
                "duplicate expense id {}",
                expense.id
            )));
        }
    }

    Ok(expenses)
}

/// Replace all stored expenses with the contents of an export
///
/// Returns the number of imported expenses.
pub fn import_expenses(storage: &Storage, json_str: &str) -> PocketbookResult<usize> {
    let expenses = parse_expenses_json(json_str)?;
    storage.save_expenses(&expenses)?;
    tracing::info!(count = expenses.len(), "imported expenses");
    Ok(expenses.len())
}
