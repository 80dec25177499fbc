//! Recompute of all analytics for one selected month

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{BudgetMap, Category, Expense, MonthPeriod};

use super::aggregate::{biggest_category, filter_by_month, spending_by_category, total_spent};
use super::daily::{
    average_daily_spend, budget_remaining_per_day, daily_spending, days_elapsed,
    days_remaining_in_month, DailySpending,
};
use super::trends::{
    budget_progress, budget_status, category_trends, monthly_trends, projected_monthly_spend,
    suggested_budget, trend_percent_change, BudgetStatus, CategoryTrend, MonthlyTotal,
    TREND_MONTHS,
};

/// Derived analytics for a month
///
/// Pure output of [`AnalyticsSnapshot::compute`]; callers recompute it
/// whenever the expense list, budgets or selected month change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSnapshot {
    pub period: MonthPeriod,
    pub expense_count: usize,
    pub total_spent: f64,
    pub spending_by_category: BTreeMap<Category, f64>,
    pub daily_spending: Vec<DailySpending>,
    pub monthly_trends: Vec<MonthlyTotal>,
    pub trend_percent_change: Option<f64>,
    pub category_trends: Vec<CategoryTrend>,
    pub current_budget: Option<f64>,
    pub average_daily_spend: f64,
    pub days_elapsed: u32,
    pub days_remaining_in_month: u32,
    pub budget_remaining_per_day: Option<f64>,
    pub projected_monthly_spend: f64,
    pub suggested_budget: Option<f64>,
    pub budget_status: BudgetStatus,
    pub budget_progress: Option<f64>,
}

impl AnalyticsSnapshot {
    pub fn compute(
        expenses: &[Expense],
        budgets: &BudgetMap,
        period: MonthPeriod,
        today: NaiveDate,
    ) -> Self {
        let in_month = filter_by_month(expenses, &period);
        let total = total_spent(&in_month);
        let current_budget = budgets.get_for(&period);

        let average = average_daily_spend(total, &period, today);
        let projection = projected_monthly_spend(average, &period);
        let trends = monthly_trends(expenses, &period, TREND_MONTHS);

        Self {
            expense_count: in_month.len(),
            total_spent: total,
            spending_by_category: spending_by_category(&in_month),
            daily_spending: daily_spending(&in_month, &period),
            trend_percent_change: trend_percent_change(&trends),
            suggested_budget: suggested_budget(&trends, projection),
            monthly_trends: trends,
            category_trends: category_trends(expenses, &period),
            current_budget,
            average_daily_spend: average,
            days_elapsed: days_elapsed(&period, today),
            days_remaining_in_month: days_remaining_in_month(&period, today),
            budget_remaining_per_day: budget_remaining_per_day(
                current_budget,
                total,
                &period,
                today,
            ),
            projected_monthly_spend: projection,
            budget_status: budget_status(total, current_budget, projection),
            budget_progress: budget_progress(total, current_budget),
            period,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expense_count == 0
    }

    pub fn biggest_category(&self) -> Option<(Category, f64)> {
        biggest_category(&self.spending_by_category)
    }

    /// Daily series cut at today for the current month
    pub fn elapsed_daily_spending(&self) -> &[DailySpending] {
        let days = (self.days_elapsed as usize).min(self.daily_spending.len());
        &self.daily_spending[..days]
    }

    /// Budget minus spending; negative when over budget
    pub fn budget_remaining(&self) -> Option<f64> {
        self.current_budget.map(|budget| budget - self.total_spent)
    }
}
