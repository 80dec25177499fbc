//! Expense analytics engine
//!
//! Pure functions over an expense list and a budget map. Nothing here does
//! I/O or reads the clock: the current date is always passed in.

pub mod aggregate;
pub mod daily;
pub mod insights;
pub mod snapshot;
pub mod trends;

pub use aggregate::{
    biggest_category, category_share, filter_by_month, group_by_category, sorted_by_amount,
    spending_by_category, total_spent,
};
pub use daily::{
    average_daily_spend, budget_remaining_per_day, daily_spending, days_elapsed,
    days_remaining_in_month, DailySpending,
};
pub use insights::{generate_insights, Insight, InsightKind, Severity};
pub use snapshot::AnalyticsSnapshot;
pub use trends::{
    budget_progress, budget_status, category_trends, monthly_trends, projected_monthly_spend,
    round_up_to_ten, suggested_budget, top_category_changes, trend_percent_change, BudgetStatus,
    CategoryTrend, MonthlyTotal, TOP_CHANGES_LIMIT, TREND_MONTHS,
};
