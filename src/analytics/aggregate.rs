//! Filtering and grouping of expenses
//!
//! Selects the expenses of one calendar month and aggregates them per
//! category. Amounts are summed as plain `f64` without rounding.

use std::collections::BTreeMap;

use crate::models::{Category, Expense, MonthPeriod};

/// Expenses whose calendar day (as entered) falls in the given month
pub fn filter_by_month<'a>(expenses: &'a [Expense], period: &MonthPeriod) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|e| period.contains(e.local_date()))
        .collect()
}

/// Partition expenses by category
pub fn group_by_category<'a>(expenses: &[&'a Expense]) -> BTreeMap<Category, Vec<&'a Expense>> {
    let mut groups: BTreeMap<Category, Vec<&'a Expense>> = BTreeMap::new();
    for &expense in expenses {
        groups.entry(expense.category).or_default().push(expense);
    }
    groups
}

/// Sum of all amounts; `0.0` (never `-0.0`) when there are none
pub fn total_spent(expenses: &[&Expense]) -> f64 {
    expenses.iter().fold(0.0, |acc, e| acc + e.amount)
}

/// Total per category, only for categories that have expenses
pub fn spending_by_category(expenses: &[&Expense]) -> BTreeMap<Category, f64> {
    let groups = group_by_category(expenses);
    Category::ALL
        .iter()
        .filter_map(|category| {
            groups
                .get(category)
                .map(|items| (*category, total_spent(items)))
        })
        .collect()
}

/// Category with the largest total
///
/// Ties go to the category declared first.
pub fn biggest_category(spending: &BTreeMap<Category, f64>) -> Option<(Category, f64)> {
    spending
        .iter()
        .fold(None, |best: Option<(Category, f64)>, (category, amount)| match best {
            Some((_, best_amount)) if *amount <= best_amount => best,
            _ => Some((*category, *amount)),
        })
}

/// Category breakdown sorted by amount, largest first
pub fn sorted_by_amount(spending: &BTreeMap<Category, f64>) -> Vec<(Category, f64)> {
    let mut entries: Vec<_> = spending.iter().map(|(c, a)| (*c, *a)).collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    entries
}

/// Percentage of `total` that `amount` represents; 0 when total is 0
pub fn category_share(total: f64, amount: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        amount / total * 100.0
    }
}
