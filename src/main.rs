use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pocketbook::cli::{
    handle_budget_command, handle_config_command, handle_expense_command, handle_export_command,
    handle_import_command, handle_insights_command, handle_periods_command, handle_report_command,
    today, BudgetCommands, ConfigCommands, ExpenseCommands, ExportCommands,
};
use pocketbook::config::{paths::PocketbookPaths, settings::Settings};
use pocketbook::services::ExpenseService;
use pocketbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "pocketbook",
    version,
    about = "Personal expense tracking with monthly budgets and spending insights",
    long_about = "Pocketbook records everyday expenses and monthly budgets in local \
                  JSON files and reports where the money went: totals by category, \
                  daily and monthly trends, budget projections and insights."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Spending report for a month
    Report {
        /// Month (e.g., "03-2024", "last"); defaults to current
        #[arg(short, long)]
        period: Option<String>,

        /// Print the raw analytics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Spending insights for a month
    Insights {
        /// Month (e.g., "03-2024", "last"); defaults to current
        #[arg(short, long)]
        period: Option<String>,
    },

    /// List selectable months
    Periods {
        /// Month to mark as selected
        #[arg(short, long)]
        period: Option<String>,

        /// Number of months to show
        #[arg(short, long, default_value = "12")]
        count: usize,
    },

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Replace all expenses with a JSON export
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Delete all expenses and budgets
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    pocketbook::logging::init(cli.verbose);

    // Initialize paths and settings
    let paths = PocketbookPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report { period, json }) => {
            handle_report_command(&storage, &settings, period.as_deref(), json)?;
        }
        Some(Commands::Insights { period }) => {
            handle_insights_command(&storage, period.as_deref())?;
        }
        Some(Commands::Periods { period, count }) => {
            handle_periods_command(period.as_deref(), count)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Import { file }) => {
            handle_import_command(&storage, &file)?;
        }
        Some(Commands::Reset { yes }) => {
            if !yes {
                anyhow::bail!("This deletes every expense and budget. Re-run with --yes to confirm.");
            }
            ExpenseService::new(&storage).reset_all()?;
            println!("All expenses and budgets have been deleted.");
        }
        Some(Commands::Config { command }) => {
            handle_config_command(&paths, &mut settings, command)?;
        }
        None => {
            let snapshot = ExpenseService::new(&storage).snapshot(
                pocketbook::models::MonthPeriod::from_date(today()),
                today(),
            );
            println!("Pocketbook - personal expense tracking");
            println!();
            println!(
                "{}: {} expense(s), {} spent",
                snapshot.period.label(),
                snapshot.expense_count,
                pocketbook::display::format_money(
                    snapshot.total_spent,
                    &settings.currency_symbol()
                )
            );
            println!();
            println!("Run 'pocketbook --help' for usage information.");
        }
    }

    Ok(())
}
