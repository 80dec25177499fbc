//! Daily spending series and per-day budget metrics

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::models::{Expense, MonthPeriod};

/// Spending on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySpending {
    /// Day of month, starting at 1
    pub day_of_month: u32,
    pub date: NaiveDate,
    pub amount: f64,
}

impl DailySpending {
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// Dense series with one entry per day of the month, zero-filled
///
/// Expenses outside the month are ignored.
pub fn daily_spending(expenses: &[&Expense], period: &MonthPeriod) -> Vec<DailySpending> {
    let mut series: Vec<DailySpending> = (1..=period.days_in_month())
        .filter_map(|day| {
            period.day(day).map(|date| DailySpending {
                day_of_month: day,
                date,
                amount: 0.0,
            })
        })
        .collect();

    for expense in expenses {
        let date = expense.local_date();
        if !period.contains(date) {
            continue;
        }
        if let Some(entry) = series.get_mut(date.day() as usize - 1) {
            entry.amount += expense.amount;
        }
    }

    series
}

/// Days of the month that have occurred as of `today`
///
/// Past months count in full, the current month counts up to and including
/// today, future months count zero.
pub fn days_elapsed(period: &MonthPeriod, today: NaiveDate) -> u32 {
    let current = MonthPeriod::from_date(today);
    if *period < current {
        period.days_in_month()
    } else if *period == current {
        today.day()
    } else {
        0
    }
}

/// Average spend per elapsed day; 0 when no day has elapsed
pub fn average_daily_spend(total: f64, period: &MonthPeriod, today: NaiveDate) -> f64 {
    match days_elapsed(period, today) {
        0 => 0.0,
        days => total / days as f64,
    }
}

/// Days left after today in the current month; 0 for any other month
pub fn days_remaining_in_month(period: &MonthPeriod, today: NaiveDate) -> u32 {
    if *period == MonthPeriod::from_date(today) {
        period.days_in_month() - today.day()
    } else {
        0
    }
}

/// Budget left per remaining day of the current month
///
/// `None` without a budget or when the month is not the current one. On the
/// last day of the month the whole remainder is reported. Negative values
/// mean the budget is already exceeded.
pub fn budget_remaining_per_day(
    budget: Option<f64>,
    total: f64,
    period: &MonthPeriod,
    today: NaiveDate,
) -> Option<f64> {
    let budget = budget?;
    if *period != MonthPeriod::from_date(today) {
        return None;
    }
    let remaining = budget - total;
    match days_remaining_in_month(period, today) {
        0 => Some(remaining),
        days => Some(remaining / days as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(y: i32, m: u32) -> MonthPeriod {
        MonthPeriod::new(y, m).unwrap()
    }

    #[test]
    fn test_series_is_dense_for_every_month_length() {
        for (y, m, len) in [(2024, 1, 31), (2024, 2, 29), (2023, 2, 28), (2024, 4, 30)] {
            let series = daily_spending(&[], &month(y, m));
            assert_eq!(series.len(), len);
            assert!(series.iter().all(|d| d.amount == 0.0));
            assert_eq!(series[0].day_of_month, 1);
            assert_eq!(series[len - 1].day_of_month, len as u32);
        }
    }

    #[test]
    fn test_example_month_daily_amounts() {
        let expenses = vec![
            Expense::on_date("Lunch", 10.0, Category::Food, day(2024, 1, 5)),
            Expense::on_date("Rent", 20.0, Category::Rent, day(2024, 1, 5)),
            Expense::on_date("Snack", 5.0, Category::Food, day(2024, 2, 1)),
        ];
        let refs: Vec<&Expense> = expenses.iter().collect();
        let series = daily_spending(&refs, &month(2024, 1));

        assert_eq!(series.len(), 31);
        assert_eq!(series[4].amount, 30.0);
        assert_eq!(series[4].date, day(2024, 1, 5));
        let others: f64 = series
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 4)
            .map(|(_, d)| d.amount)
            .sum();
        assert_eq!(others, 0.0);
    }

    #[test]
    fn test_weekend_flag() {
        let series = daily_spending(&[], &month(2024, 1));
        // 2024-01-06 is a Saturday, 2024-01-08 a Monday
        assert!(series[5].is_weekend());
        assert!(!series[7].is_weekend());
    }

    #[test]
    fn test_average_counts_only_elapsed_days() {
        let today = day(2024, 3, 10);
        assert_eq!(average_daily_spend(100.0, &month(2024, 3), today), 10.0);
        assert_eq!(average_daily_spend(62.0, &month(2024, 1), today), 2.0);
        assert_eq!(average_daily_spend(50.0, &month(2024, 4), today), 0.0);
    }

    #[test]
    fn test_days_remaining() {
        let today = day(2024, 3, 10);
        assert_eq!(days_remaining_in_month(&month(2024, 3), today), 21);
        assert_eq!(days_remaining_in_month(&month(2024, 2), today), 0);
        assert_eq!(days_remaining_in_month(&month(2024, 3), day(2024, 3, 31)), 0);
    }

    #[test]
    fn test_budget_remaining_per_day() {
        let today = day(2024, 3, 11);
        let march = month(2024, 3);
        assert_eq!(budget_remaining_per_day(Some(500.0), 300.0, &march, today), Some(10.0));
        assert_eq!(budget_remaining_per_day(None, 300.0, &march, today), None);
        assert_eq!(
            budget_remaining_per_day(Some(500.0), 300.0, &month(2024, 2), today),
            None
        );
        assert_eq!(
            budget_remaining_per_day(Some(500.0), 450.0, &march, day(2024, 3, 31)),
            Some(50.0)
        );
    }
}
