//! Report CLI commands
//!
//! Monthly spending report, insights and the list of selectable months.

use crate::analytics::generate_insights;
use crate::config::settings::Settings;
use crate::display::{format_insights, format_period_list, format_snapshot};
use crate::error::PocketbookResult;
use crate::services::{ExpenseService, PeriodSelector};
use crate::storage::Storage;

use super::{resolve_period, today};

/// Print the spending report for a month
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    period: Option<&str>,
    json: bool,
) -> PocketbookResult<()> {
    let today = today();
    let period = resolve_period(period, today)?;
    let snapshot = ExpenseService::new(storage).snapshot(period, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", format_snapshot(&snapshot, &settings.currency_symbol()));
    }
    Ok(())
}

/// Print insights for a month
pub fn handle_insights_command(storage: &Storage, period: Option<&str>) -> PocketbookResult<()> {
    let today = today();
    let period = resolve_period(period, today)?;
    let snapshot = ExpenseService::new(storage).snapshot(period, today);

    println!("Insights for {}", period.label());
    println!();
    print!("{}", format_insights(&generate_insights(&snapshot)));
    Ok(())
}

/// Print the months that can be selected, newest first
pub fn handle_periods_command(period: Option<&str>, count: usize) -> PocketbookResult<()> {
    let today = today();
    let selected = resolve_period(period, today)?;
    let selector = PeriodSelector::new(today);
    let periods: Vec<_> = selector.selectable(today).into_iter().take(count).collect();

    print!("{}", format_period_list(&periods, selected));
    Ok(())
}
