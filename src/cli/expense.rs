//! Expense CLI commands
//!
//! Implements CLI commands for recording, listing, editing and deleting
//! expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{parse_amount, parse_expense_date, Category};
use crate::services::{ExpenseService, ExpenseUpdate, QuickPreset};
use crate::storage::Storage;

use super::{resolve_period, today};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        title: String,
        /// Amount (e.g., "12.50" or "12,50")
        amount: String,
        /// Category (defaults to the configured default category)
        #[arg(short, long)]
        category: Option<String>,
        /// Date (YYYY-MM-DD or RFC 3339; defaults to now)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Record a preset expense: coffee, bus-ticket or groceries
    Quick {
        /// Preset name
        preset: String,
    },

    /// List expenses grouped by category
    #[command(alias = "ls")]
    List {
        /// Month to list (e.g., "03-2024", "last"); defaults to current
        #[arg(short, long)]
        period: Option<String>,
        /// List every expense regardless of month
        #[arg(short, long, conflicts_with = "period")]
        all: bool,
    },

    /// Show one expense
    Show {
        /// Expense ID (full UUID or short "exp-" form)
        id: String,
    },

    /// Edit an expense
    Edit {
        /// Expense ID (full UUID or short "exp-" form)
        id: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (full UUID or short "exp-" form)
        id: String,
    },
}

fn parse_category(s: &str) -> PocketbookResult<Category> {
    s.parse::<Category>().map_err(|e| {
        let options: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        PocketbookError::Validation(format!("{}. Options: {}", e, options.join(", ")))
    })
}

fn parse_amount_arg(s: &str) -> PocketbookResult<f64> {
    parse_amount(s).map_err(|e| PocketbookError::Validation(e.to_string()))
}

fn parse_date_arg(s: &str) -> PocketbookResult<chrono::DateTime<chrono::FixedOffset>> {
    parse_expense_date(s).ok_or_else(|| {
        PocketbookError::Validation(format!(
            "Invalid date '{}'. Use YYYY-MM-DD or an RFC 3339 timestamp",
            s
        ))
    })
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> PocketbookResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = settings.currency_symbol();

    match cmd {
        ExpenseCommands::Add {
            title,
            amount,
            category,
            date,
        } => {
            let amount = parse_amount_arg(&amount)?;
            let category = match category {
                Some(c) => parse_category(&c)?,
                None => settings.default_category,
            };
            let date = date.as_deref().map(parse_date_arg).transpose()?;

            let expense = service.add(&title, amount, category, date)?;
            println!("Added expense: {}", expense.id.short());
            print!("{}", format_expense_details(&expense, &symbol));
        }

        ExpenseCommands::Quick { preset } => {
            let preset: QuickPreset = preset.parse()?;
            let expense = service.quick_add(preset)?;
            println!("Added {}: {}", preset, expense.id.short());
            print!("{}", format_expense_details(&expense, &symbol));
        }

        ExpenseCommands::List { period, all } => {
            if all {
                let expenses = service.list_all();
                println!("All expenses");
                println!();
                print!("{}", format_expense_list(&expenses, &symbol));
            } else {
                let period = resolve_period(period.as_deref(), today())?;
                let expenses = service.list_for_month(&period);
                println!("Expenses for {}", period.label());
                println!();
                print!("{}", format_expense_list(&expenses, &symbol));
            }
        }

        ExpenseCommands::Show { id } => {
            let expense = service.get(&id)?;
            print!("{}", format_expense_details(&expense, &symbol));
        }

        ExpenseCommands::Edit {
            id,
            title,
            amount,
            category,
            date,
        } => {
            let changes = ExpenseUpdate {
                title,
                amount: amount.as_deref().map(parse_amount_arg).transpose()?,
                category: category.as_deref().map(parse_category).transpose()?,
                date: date.as_deref().map(parse_date_arg).transpose()?,
            };
            let expense = service.update(&id, changes)?;
            println!("Updated expense: {}", expense.id.short());
            print!("{}", format_expense_details(&expense, &symbol));
        }

        ExpenseCommands::Delete { id } => {
            let expense = service.delete(&id)?;
            println!(
                "Deleted expense: {} ({})",
                expense.title,
                expense.id.short()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_lists_options() {
        assert_eq!(parse_category("rent").unwrap(), Category::Rent);
        let err = parse_category("gifts").unwrap_err();
        assert!(err.to_string().contains("Options: food, rent"));
    }

    #[test]
    fn test_parse_arguments() {
        assert_eq!(parse_amount_arg("12,50").unwrap(), 12.5);
        assert!(parse_amount_arg("abc").unwrap_err().is_validation());
        assert!(parse_date_arg("2024-01-05").is_ok());
        assert!(parse_date_arg("05/01/2024").unwrap_err().is_validation());
    }
}
