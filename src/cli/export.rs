//! CLI commands for data export and import

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::error::{PocketbookError, PocketbookResult};
use crate::export::{export_expenses_csv, export_expenses_json, import_expenses};
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::{resolve_period, today};

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all expenses as JSON (importable)
    Json {
        /// Output file path (defaults to the exports directory)
        output: Option<PathBuf>,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Export expenses as CSV
    Csv {
        /// Output file path (defaults to the exports directory)
        output: Option<PathBuf>,

        /// Only export this month (e.g., "03-2024")
        #[arg(short, long)]
        period: Option<String>,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> PocketbookResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExportCommands::Json { output, compact } => {
            let output = output_path(storage, output, "expenses.json");
            let expenses = service.list_all();
            let mut writer = create_writer(&output)?;
            export_expenses_json(&expenses, &mut writer, !compact)?;
            writer
                .flush()
                .map_err(|e| PocketbookError::Export(e.to_string()))?;
            println!("Exported {} expense(s) to: {}", expenses.len(), output.display());
        }

        ExportCommands::Csv { output, period } => {
            let (expenses, default_name) = match period {
                Some(p) => {
                    let period = resolve_period(Some(&p), today())?;
                    (
                        service.list_for_month(&period),
                        format!("expenses-{}.csv", period.budget_key()),
                    )
                }
                None => (service.list_all(), "expenses.csv".to_string()),
            };
            let output = output_path(storage, output, &default_name);
            let writer = create_writer(&output)?;
            export_expenses_csv(&expenses, writer)?;
            println!("Exported {} expense(s) to: {}", expenses.len(), output.display());
        }
    }

    Ok(())
}

/// Replace all expenses with the contents of a JSON export
pub fn handle_import_command(storage: &Storage, input: &Path) -> PocketbookResult<()> {
    let contents = std::fs::read_to_string(input).map_err(|e| {
        PocketbookError::Import(format!("Failed to read {}: {}", input.display(), e))
    })?;
    let count = import_expenses(storage, &contents)?;
    println!("Imported {} expense(s) from: {}", count, input.display());
    Ok(())
}

fn output_path(storage: &Storage, output: Option<PathBuf>, default_name: &str) -> PathBuf {
    output.unwrap_or_else(|| storage.paths().export_dir().join(default_name))
}

fn create_writer(output: &Path) -> PocketbookResult<BufWriter<File>> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output).map_err(|e| {
        PocketbookError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}
