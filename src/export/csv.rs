//! CSV export of expenses

use std::io::Write;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::Expense;

const HEADER: [&str; 5] = ["ID", "Date", "Title", "Category", "Amount"];

/// Write expenses as CSV, one row per expense
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> PocketbookResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for expense in expenses {
        csv_writer.write_record([
            expense.id.as_uuid().to_string(),
            expense.date.to_rfc3339(),
            expense.title.clone(),
            expense.category.as_str().to_string(),
            format!("{:.2}", expense.amount),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| PocketbookError::Export(e.to_string()))?;
    Ok(())
}
