//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod config;
pub mod expense;
pub mod export;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, handle_import_command, ExportCommands};
pub use report::{handle_insights_command, handle_periods_command, handle_report_command};

use chrono::{Local, NaiveDate};

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::MonthPeriod;
use crate::services::PeriodSelector;

/// The current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Resolve a `--period` argument to a selectable month
///
/// Accepts `MM-YYYY`, `YYYY-MM`, `current` and `last`. Without an argument
/// the current month is used. Future months are rejected.
pub fn resolve_period(arg: Option<&str>, today: NaiveDate) -> PocketbookResult<MonthPeriod> {
    let mut selector = PeriodSelector::new(today);
    match arg.map(|s| s.trim().to_lowercase()).as_deref() {
        None | Some("current") | Some("this") => Ok(selector.selected()),
        Some("last") | Some("prev") | Some("previous") => selector.previous(today),
        Some(other) => {
            let period = MonthPeriod::parse(other)
                .map_err(|e| PocketbookError::Validation(e.to_string()))?;
            selector.select(period, today)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_period() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(
            resolve_period(None, today).unwrap(),
            MonthPeriod::new(2024, 3).unwrap()
        );
        assert_eq!(
            resolve_period(Some("last"), today).unwrap(),
            MonthPeriod::new(2024, 2).unwrap()
        );
        assert_eq!(
            resolve_period(Some("01-2024"), today).unwrap(),
            MonthPeriod::new(2024, 1).unwrap()
        );
        assert!(resolve_period(Some("04-2024"), today)
            .unwrap_err()
            .is_rejected_period());
        assert!(resolve_period(Some("13-2024"), today)
            .unwrap_err()
            .is_validation());
    }
}
