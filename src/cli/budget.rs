//! Budget CLI commands
//!
//! Implements CLI commands for setting and reviewing monthly budgets.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_list, format_money};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::parse_amount;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::{resolve_period, today};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the budget for a month (overwrites an existing one)
    Set {
        /// Amount (e.g., "500" or "500,00")
        amount: String,
        /// Month (e.g., "03-2024", "last"); defaults to current
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Show the budget for a month
    Get {
        /// Month (e.g., "03-2024", "last"); defaults to current
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Remove the budget for a month
    Clear {
        /// Month (e.g., "03-2024", "last"); defaults to current
        #[arg(short, long)]
        period: Option<String>,
    },

    /// List all budgets
    List,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> PocketbookResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol();

    match cmd {
        BudgetCommands::Set { amount, period } => {
            let period = resolve_period(period.as_deref(), today())?;
            let amount =
                parse_amount(&amount).map_err(|e| PocketbookError::Validation(e.to_string()))?;

            match service.set(&period, amount)? {
                Some(previous) => println!(
                    "Budget for {} changed from {} to {}",
                    period.label(),
                    format_money(previous, &symbol),
                    format_money(amount, &symbol)
                ),
                None => println!(
                    "Budget for {} set to {}",
                    period.label(),
                    format_money(amount, &symbol)
                ),
            }
        }

        BudgetCommands::Get { period } => {
            let period = resolve_period(period.as_deref(), today())?;
            match service.get(&period) {
                Some(amount) => println!(
                    "Budget for {}: {}",
                    period.label(),
                    format_money(amount, &symbol)
                ),
                None => println!("No budget set for {}", period.label()),
            }
        }

        BudgetCommands::Clear { period } => {
            let period = resolve_period(period.as_deref(), today())?;
            let removed = service.clear(&period)?;
            println!(
                "Removed budget of {} for {}",
                format_money(removed, &symbol),
                period.label()
            );
        }

        BudgetCommands::List => {
            print!("{}", format_budget_list(&service.list(), &symbol));
        }
    }

    Ok(())
}
