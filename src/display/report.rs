//! Report formatting for terminal output

use crate::analytics::{
    category_share, sorted_by_amount, top_category_changes, AnalyticsSnapshot, BudgetStatus,
    Insight, TOP_CHANGES_LIMIT,
};
use crate::models::MonthPeriod;

use super::{format_bar, format_money, format_percentage, separator};

const WIDTH: usize = 60;
const BAR_WIDTH: usize = 20;

/// Full month report: totals, budget, categories, trend and suggestion
pub fn format_snapshot(snapshot: &AnalyticsSnapshot, symbol: &str) -> String {
    let money = |amount: f64| format_money(amount, symbol);
    let mut output = String::new();

    output.push_str(&format!("Spending Report: {}\n", snapshot.period.label()));
    output.push_str(&"=".repeat(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Total Spent:      {} ({} expenses)\n",
        money(snapshot.total_spent),
        snapshot.expense_count
    ));
    output.push_str(&format!(
        "Daily Average:    {}\n",
        money(snapshot.average_daily_spend)
    ));
    if snapshot.days_remaining_in_month > 0 {
        output.push_str(&format!(
            "Projected:        {}\n",
            money(snapshot.projected_monthly_spend)
        ));
        output.push_str(&format!(
            "Days Remaining:   {}\n",
            snapshot.days_remaining_in_month
        ));
    }

    // Budget
    output.push('\n');
    match (snapshot.current_budget, snapshot.budget_progress) {
        (Some(budget), Some(progress)) => {
            output.push_str(&format!(
                "Budget:           {}  {} {}\n",
                money(budget),
                format_bar(progress, 1.0, BAR_WIDTH),
                format_percentage(progress * 100.0)
            ));
            if let Some(remaining) = snapshot.budget_remaining() {
                output.push_str(&format!("Remaining:        {}\n", money(remaining)));
            }
            if let Some(per_day) = snapshot.budget_remaining_per_day {
                output.push_str(&format!("Per Day Left:     {}\n", money(per_day)));
            }
            let status = match snapshot.budget_status {
                BudgetStatus::UnderBudget => "Under budget",
                BudgetStatus::ProjectedOver => "Projected to exceed budget",
                BudgetStatus::OverBudget => "Over budget",
                BudgetStatus::NoBudget => "No budget",
            };
            output.push_str(&format!("Status:           {}\n", status));
        }
        _ => output.push_str(&format!(
            "Budget:           not set (pocketbook budget set <amount> --period {})\n",
            snapshot.period.budget_key()
        )),
    }

    // Category breakdown
    output.push_str(&format!("\n{:<20} {:>12} {:>8}\n", "Category", "Amount", "%"));
    output.push_str(&separator(WIDTH));
    output.push('\n');
    if snapshot.spending_by_category.is_empty() {
        output.push_str("No spending this month.\n");
    }
    let categories = sorted_by_amount(&snapshot.spending_by_category);
    let max = categories.first().map(|(_, amount)| *amount).unwrap_or(0.0);
    for (category, amount) in &categories {
        output.push_str(&format!(
            "{:<20} {:>12} {:>8} {}\n",
            category.display_name(),
            money(*amount),
            format_percentage(category_share(snapshot.total_spent, *amount)),
            format_bar(*amount, max, BAR_WIDTH)
        ));
    }

    // Trend
    if !snapshot.monthly_trends.is_empty() {
        output.push_str("\nLast 6 Months\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        let max = snapshot
            .monthly_trends
            .iter()
            .map(|t| t.amount)
            .fold(0.0, f64::max);
        for total in &snapshot.monthly_trends {
            let label = total
                .period()
                .map(|p| format!("{} {}", &p.month_name()[..3], p.year()))
                .unwrap_or_else(|| format!("{:02}-{}", total.month, total.year));
            output.push_str(&format!(
                "{:<20} {:>12} {}\n",
                label,
                money(total.amount),
                format_bar(total.amount, max, BAR_WIDTH)
            ));
        }
        if let Some(change) = snapshot.trend_percent_change {
            output.push_str(&format!("Change over period: {}\n", signed_percentage(change)));
        }
    }

    let changes = top_category_changes(&snapshot.category_trends, TOP_CHANGES_LIMIT);
    if !changes.is_empty() {
        output.push_str("\nBiggest Changes vs Last Month\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        for trend in &changes {
            let arrow = if trend.is_increasing { "▲" } else { "▼" };
            output.push_str(&format!(
                "{:<20} {:>12} {} {}\n",
                trend.category.display_name(),
                money(trend.current_amount),
                arrow,
                trend
                    .percent_change
                    .map(signed_percentage)
                    .unwrap_or_default()
            ));
        }
    }

    if let Some(suggested) = snapshot.suggested_budget {
        output.push_str(&format!(
            "\nSuggested budget for {}: {}\n",
            snapshot.period.next().label(),
            money(suggested)
        ));
    }

    output
}

fn signed_percentage(pct: f64) -> String {
    if pct > 0.0 {
        format!("+{}", format_percentage(pct))
    } else {
        format_percentage(pct)
    }
}

/// Format insights, one block per insight
pub fn format_insights(insights: &[Insight]) -> String {
    if insights.is_empty() {
        return "Not enough data for insights yet.\n".to_string();
    }

    let mut output = String::new();
    for insight in insights {
        output.push_str(&format!("[{}] {}\n", insight.severity, insight.label));
        if !insight.detail.is_empty() {
            output.push_str(&format!("    {}\n", insight.detail));
        }
    }
    output
}

/// Format stored budgets, oldest first
pub fn format_budget_list(budgets: &[(MonthPeriod, f64)], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<10} {:<16} {:>12}\n", "Key", "Month", "Budget"));
    output.push_str(&separator(40));
    output.push('\n');
    for (period, amount) in budgets {
        output.push_str(&format!(
            "{:<10} {:<16} {:>12}\n",
            period.budget_key(),
            period.label(),
            format_money(*amount, symbol)
        ));
    }
    output
}

/// Format selectable months, marking the selected one
pub fn format_period_list(periods: &[MonthPeriod], selected: MonthPeriod) -> String {
    let mut output = String::new();
    for period in periods {
        let marker = if *period == selected { "*" } else { " " };
        output.push_str(&format!(
            "{} {}  {}\n",
            marker,
            period.budget_key(),
            period.label()
        ));
    }
    output
}
