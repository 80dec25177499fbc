//! Expense display formatting
//!
//! Lists are grouped by category, sorted by category display name, with the
//! newest expense first inside each group.

use std::collections::BTreeMap;

use crate::analytics::total_spent;
use crate::models::Expense;

use super::{format_money, truncate};

/// Format a single expense as a list row
pub fn format_expense_row(expense: &Expense, symbol: &str) -> String {
    format!(
        "{:12} {} {:28} {:>12}",
        expense.id.short(),
        expense.date.format("%Y-%m-%d"),
        truncate(&expense.title, 28),
        format_money(expense.amount, symbol)
    )
}

/// Format expenses grouped by category
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut groups: BTreeMap<&'static str, Vec<&Expense>> = BTreeMap::new();
    for expense in expenses {
        groups
            .entry(expense.category.display_name())
            .or_default()
            .push(expense);
    }

    let mut output = String::new();
    for (name, mut items) in groups {
        items.sort_by(|a, b| b.date.cmp(&a.date));
        let subtotal = total_spent(&items);

        output.push_str(&format!(
            "{} ({}) {}\n",
            name,
            items.len(),
            format_money(subtotal, symbol)
        ));
        for expense in items {
            output.push_str("  ");
            output.push_str(&format_expense_row(expense, symbol));
            output.push('\n');
        }
        output.push('\n');
    }

    let total = expenses.iter().fold(0.0, |acc, e| acc + e.amount);
    output.push_str(&format!(
        "{} expense(s), total {}\n",
        expenses.len(),
        format_money(total, symbol)
    ));
    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", expense.id.short()));
    output.push_str(&format!("Title:    {}\n", expense.title));
    output.push_str(&format!("Amount:   {}\n", format_money(expense.amount, symbol)));
    output.push_str(&format!("Category: {}\n", expense.category));
    output.push_str(&format!("Date:     {}\n", expense.date.format("%Y-%m-%d %H:%M")));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_expense_list(&[], "$"), "No expenses found.\n");
    }

    #[test]
    fn test_grouped_by_display_name() {
        let expenses = vec![
            Expense::on_date("Rent", 900.0, Category::Rent, day(1)),
            Expense::on_date("Lunch", 12.0, Category::Food, day(3)),
            Expense::on_date("Dinner", 20.0, Category::Food, day(9)),
        ];
        let output = format_expense_list(&expenses, "$");

        let food = output.find("Food (2) $32.00").unwrap();
        let rent = output.find("Rent (1) $900.00").unwrap();
        assert!(food < rent);
        assert!(output.find("Dinner").unwrap() < output.find("Lunch").unwrap());
        assert!(output.contains("3 expense(s), total $932.00"));
    }

    #[test]
    fn test_details() {
        let expense = Expense::on_date("Lunch", 12.0, Category::Food, day(3));
        let output = format_expense_details(&expense, "€");
        assert!(output.contains("Amount:   €12.00"));
        assert!(output.contains("Date:     2024-01-03 12:00"));
    }
}
