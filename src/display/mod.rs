//! Display formatting for terminal output
//!
//! Turns expenses, snapshots and insights into plain text. Amounts are
//! rounded to two decimals here and nowhere else.

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_list, format_expense_row};
pub use report::{format_budget_list, format_insights, format_period_list, format_snapshot};

/// Format an amount with the currency symbol, e.g. `$12.50` or `-€3.00`
pub fn format_money(amount: f64, symbol: &str) -> String {
    // amounts that round to zero print without a sign
    if amount < 0.0 && format!("{:.2}", amount.abs()) != "0.00" {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount.abs())
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    let magnitude = pct.abs();
    if magnitude < 0.1 && magnitude > 0.0 {
        format!("{:.2}%", pct)
    } else if magnitude < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Simple horizontal bar chart cell
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
