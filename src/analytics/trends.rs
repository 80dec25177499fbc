//! Month over month trends, projections and budget classification

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::models::{Category, Expense, MonthPeriod};

use super::aggregate::{filter_by_month, spending_by_category, total_spent};

/// Number of months in the trend series
pub const TREND_MONTHS: u32 = 6;

/// Number of category changes worth showing
pub const TOP_CHANGES_LIMIT: usize = 4;

/// Total spent in one calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub month: u32,
    pub year: i32,
    pub amount: f64,
}

impl MonthlyTotal {
    pub fn period(&self) -> Option<MonthPeriod> {
        MonthPeriod::new(self.year, self.month).ok()
    }
}

/// Totals for the `months` calendar months ending at `period`, oldest first
///
/// An empty history produces an empty series.
pub fn monthly_trends(expenses: &[Expense], period: &MonthPeriod, months: u32) -> Vec<MonthlyTotal> {
    if expenses.is_empty() || months == 0 {
        return Vec::new();
    }

    (0..months)
        .rev()
        .map(|back| {
            let month = period.offset(-(back as i32));
            let amount = total_spent(&filter_by_month(expenses, &month));
            MonthlyTotal {
                month: month.month(),
                year: month.year(),
                amount,
            }
        })
        .collect()
}

/// Percent change between the first and last trend points
pub fn trend_percent_change(trends: &[MonthlyTotal]) -> Option<f64> {
    if trends.len() < 2 {
        return None;
    }
    let first = trends.first()?.amount;
    let last = trends.last()?.amount;
    percent_change(first, last)
}

fn percent_change(previous: f64, current: f64) -> Option<f64> {
    if previous == 0.0 {
        None
    } else {
        Some((current - previous) / previous * 100.0)
    }
}

/// Spending in one category compared with the month before
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTrend {
    pub category: Category,
    pub current_amount: f64,
    pub previous_amount: f64,
    /// `None` when nothing was spent in the previous month
    pub percent_change: Option<f64>,
    pub is_increasing: bool,
}

/// Trends for every category that has spending in `period`
pub fn category_trends(expenses: &[Expense], period: &MonthPeriod) -> Vec<CategoryTrend> {
    let current = spending_by_category(&filter_by_month(expenses, period));
    let previous = spending_by_category(&filter_by_month(expenses, &period.prev()));

    current
        .into_iter()
        .map(|(category, current_amount)| {
            let previous_amount = previous.get(&category).copied().unwrap_or(0.0);
            CategoryTrend {
                category,
                current_amount,
                previous_amount,
                percent_change: percent_change(previous_amount, current_amount),
                is_increasing: current_amount > previous_amount,
            }
        })
        .collect()
}

/// The largest relative changes, by absolute percent change
///
/// Categories without a previous month baseline are left out.
pub fn top_category_changes(trends: &[CategoryTrend], limit: usize) -> Vec<CategoryTrend> {
    let mut ranked: Vec<CategoryTrend> = trends
        .iter()
        .filter(|t| t.percent_change.is_some())
        .cloned()
        .collect();

    ranked.sort_by(|a, b| {
        let a_abs = a.percent_change.map(f64::abs).unwrap_or(0.0);
        let b_abs = b.percent_change.map(f64::abs).unwrap_or(0.0);
        b_abs
            .partial_cmp(&a_abs)
            .unwrap_or(Ordering::Equal)
            .then(a.category.cmp(&b.category))
    });
    ranked.truncate(limit);
    ranked
}

/// Linear extrapolation of the average daily spend over the whole month
pub fn projected_monthly_spend(average_daily: f64, period: &MonthPeriod) -> f64 {
    average_daily * period.days_in_month() as f64
}

/// Round up to the next multiple of ten
pub fn round_up_to_ten(value: f64) -> f64 {
    (value / 10.0).ceil() * 10.0
}

/// Budget suggestion for the next month
///
/// Only months with spending count as history. With at least three of them
/// the mean of the latest three plus 10% is used, otherwise the projection
/// plus 5%.
pub fn suggested_budget(trends: &[MonthlyTotal], projection: f64) -> Option<f64> {
    let active: Vec<f64> = trends
        .iter()
        .map(|t| t.amount)
        .filter(|amount| *amount > 0.0)
        .collect();
    if active.len() >= 3 {
        let recent = &active[active.len() - 3..];
        let mean = recent.iter().fold(0.0, |acc, amount| acc + amount) / 3.0;
        return Some(round_up_to_ten(mean * 1.10));
    }

    if projection > 0.0 {
        Some(round_up_to_ten(projection * 1.05))
    } else {
        None
    }
}

/// Where spending stands relative to the month's budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    UnderBudget,
    /// Still under budget but projected to exceed it
    ProjectedOver,
    OverBudget,
    NoBudget,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::UnderBudget => "under_budget",
            BudgetStatus::ProjectedOver => "projected_over",
            BudgetStatus::OverBudget => "over_budget",
            BudgetStatus::NoBudget => "no_budget",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn budget_status(total: f64, budget: Option<f64>, projection: f64) -> BudgetStatus {
    match budget {
        None => BudgetStatus::NoBudget,
        Some(budget) if total > budget => BudgetStatus::OverBudget,
        Some(budget) if projection > budget => BudgetStatus::ProjectedOver,
        Some(_) => BudgetStatus::UnderBudget,
    }
}

/// Spent share of the budget, clamped to `[0, 1]`
pub fn budget_progress(total: f64, budget: Option<f64>) -> Option<f64> {
    match budget {
        Some(budget) if budget > 0.0 => Some((total / budget).clamp(0.0, 1.0)),
        Some(_) => Some(if total > 0.0 { 1.0 } else { 0.0 }),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn on(y: i32, m: u32, d: u32, amount: f64, category: Category) -> Expense {
        Expense::on_date("item", amount, category, NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn month(y: i32, m: u32) -> MonthPeriod {
        MonthPeriod::new(y, m).unwrap()
    }

    #[test]
    fn test_empty_history_has_no_trend() {
        let trends = monthly_trends(&[], &month(2024, 3), TREND_MONTHS);
        assert!(trends.is_empty());
        assert_eq!(trend_percent_change(&trends), None);
        assert_eq!(suggested_budget(&trends, 0.0), None);
    }

    #[test]
    fn test_monthly_trends_span_six_months_oldest_first() {
        let expenses = vec![
            on(2023, 11, 3, 40.0, Category::Food),
            on(2024, 2, 10, 60.0, Category::Food),
            on(2024, 2, 11, 15.0, Category::Rent),
        ];
        let trends = monthly_trends(&expenses, &month(2024, 2), TREND_MONTHS);

        assert_eq!(trends.len(), 6);
        assert_eq!((trends[0].month, trends[0].year), (9, 2023));
        assert_eq!((trends[5].month, trends[5].year), (2, 2024));
        assert_eq!(trends[2].amount, 40.0);
        assert_eq!(trends[5].amount, 75.0);
        // first point is zero so no headline
        assert_eq!(trend_percent_change(&trends), None);
    }

    #[test]
    fn test_trend_percent_change() {
        let trends = vec![
            MonthlyTotal { month: 1, year: 2024, amount: 200.0 },
            MonthlyTotal { month: 2, year: 2024, amount: 100.0 },
            MonthlyTotal { month: 3, year: 2024, amount: 250.0 },
        ];
        assert_eq!(trend_percent_change(&trends), Some(25.0));
        assert_eq!(trend_percent_change(&trends[..1]), None);
    }

    #[test]
    fn test_category_trend_example() {
        let expenses = vec![
            on(2024, 2, 12, 50.0, Category::Food),
            on(2024, 3, 2, 100.0, Category::Food),
            on(2024, 3, 4, 30.0, Category::Shopping),
        ];
        let trends = category_trends(&expenses, &month(2024, 3));
        assert_eq!(trends.len(), 2);

        let food = trends.iter().find(|t| t.category == Category::Food).unwrap();
        assert_eq!(food.percent_change, Some(100.0));
        assert!(food.is_increasing);

        let shopping = trends
            .iter()
            .find(|t| t.category == Category::Shopping)
            .unwrap();
        assert_eq!(shopping.previous_amount, 0.0);
        assert_eq!(shopping.percent_change, None);

        let top = top_category_changes(&trends, TOP_CHANGES_LIMIT);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].category, Category::Food);
    }

    #[test]
    fn test_top_changes_ranked_by_absolute_change() {
        let trend = |category, pct: f64| CategoryTrend {
            category,
            current_amount: 0.0,
            previous_amount: 1.0,
            percent_change: Some(pct),
            is_increasing: pct > 0.0,
        };
        let trends = vec![
            trend(Category::Food, 10.0),
            trend(Category::Rent, -80.0),
            trend(Category::Shopping, 50.0),
            trend(Category::Utilities, 5.0),
            trend(Category::Education, -20.0),
        ];

        let top = top_category_changes(&trends, TOP_CHANGES_LIMIT);
        let order: Vec<Category> = top.iter().map(|t| t.category).collect();
        assert_eq!(
            order,
            vec![
                Category::Rent,
                Category::Shopping,
                Category::Education,
                Category::Food
            ]
        );
    }

    #[test]
    fn test_suggested_budget() {
        let trends: Vec<MonthlyTotal> = [100.0, 300.0, 200.0, 300.0]
            .iter()
            .enumerate()
            .map(|(i, amount)| MonthlyTotal {
                month: i as u32 + 1,
                year: 2024,
                amount: *amount,
            })
            .collect();
        // mean of the last three is 266.67, plus 10% is 293.33
        assert_eq!(suggested_budget(&trends, 0.0), Some(300.0));

        assert_eq!(suggested_budget(&trends[..2], 200.0), Some(210.0));
        assert_eq!(suggested_budget(&[], 0.0), None);
    }

    #[test]
    fn test_suggested_budget_for_first_month_uses_projection() {
        let expenses = vec![on(2024, 4, 2, 900.0, Category::Rent)];
        let trends = monthly_trends(&expenses, &month(2024, 4), TREND_MONTHS);
        assert_eq!(trends.len(), 6);

        // 900 over 10 days of a 30 day month projects to 2700
        let projection = projected_monthly_spend(90.0, &month(2024, 4));
        assert_eq!(projection, 2700.0);
        assert_eq!(suggested_budget(&trends, projection), Some(2840.0));
    }

    #[test]
    fn test_suggested_budget_skips_empty_months() {
        let trends: Vec<MonthlyTotal> = [120.0, 0.0, 0.0, 90.0, 0.0, 60.0]
            .iter()
            .enumerate()
            .map(|(i, amount)| MonthlyTotal {
                month: i as u32 + 1,
                year: 2024,
                amount: *amount,
            })
            .collect();
        // mean of 120, 90 and 60 is 90, plus 10% is 99
        assert_eq!(suggested_budget(&trends, 500.0), Some(100.0));
    }

    #[test]
    fn test_round_up_to_ten() {
        assert_eq!(round_up_to_ten(291.0), 300.0);
        assert_eq!(round_up_to_ten(300.0), 300.0);
        assert_eq!(round_up_to_ten(0.5), 10.0);
    }

    #[test]
    fn test_projection() {
        assert_eq!(projected_monthly_spend(10.0, &month(2024, 2)), 290.0);
    }

    #[test]
    fn test_budget_status() {
        assert_eq!(budget_status(100.0, None, 300.0), BudgetStatus::NoBudget);
        assert_eq!(budget_status(600.0, Some(500.0), 900.0), BudgetStatus::OverBudget);
        assert_eq!(budget_status(300.0, Some(500.0), 650.0), BudgetStatus::ProjectedOver);
        assert_eq!(budget_status(300.0, Some(500.0), 450.0), BudgetStatus::UnderBudget);
    }

    #[test]
    fn test_budget_progress_is_clamped() {
        assert_eq!(budget_progress(250.0, Some(500.0)), Some(0.5));
        assert_eq!(budget_progress(750.0, Some(500.0)), Some(1.0));
        assert_eq!(budget_progress(10.0, Some(0.0)), Some(1.0));
        assert_eq!(budget_progress(10.0, None), None);
    }
}
