//! Spending insights
//!
//! Small classification heuristics over an [`AnalyticsSnapshot`]. Each one
//! produces an [`Insight`] with a short label, a severity tag and a one-line
//! detail. Heuristics that have no data to work with produce nothing.

use std::collections::BTreeMap;
use std::fmt;

use chrono::Weekday;
use serde::Serialize;

use super::aggregate::category_share;
use super::daily::DailySpending;
use super::snapshot::AnalyticsSnapshot;
use super::trends::BudgetStatus;

/// Kinds of insight the engine can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    WeekendRatio,
    MonthlyPattern,
    BiggestCategory,
    ActiveWeekday,
    Budget,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::WeekendRatio => "weekend_ratio",
            InsightKind::MonthlyPattern => "monthly_pattern",
            InsightKind::BiggestCategory => "biggest_category",
            InsightKind::ActiveWeekday => "active_weekday",
            InsightKind::Budget => "budget",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity level of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational, no action needed
    Info,
    /// Worth a look
    Attention,
    /// Spending is past a limit
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Attention => "attention",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single derived observation about the month's spending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub label: String,
    pub severity: Severity,
    pub detail: String,
}

impl Insight {
    pub fn new(kind: InsightKind, severity: Severity, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            severity,
            detail: String::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }
}

/// Weekend versus weekday spending classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekendPattern {
    WeekendSpender,
    SlightlyHigherWeekend,
    WeekdayFocused,
    Balanced,
}

impl WeekendPattern {
    pub fn label(&self) -> &'static str {
        match self {
            WeekendPattern::WeekendSpender => "weekend spender",
            WeekendPattern::SlightlyHigherWeekend => "slightly higher weekend",
            WeekendPattern::WeekdayFocused => "weekday focused",
            WeekendPattern::Balanced => "balanced",
        }
    }
}

fn average(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Average weekend day spend divided by average weekday spend
///
/// Zero when nothing was spent on weekdays.
pub fn weekend_ratio(daily: &[DailySpending]) -> f64 {
    let weekend = average(daily.iter().filter(|d| d.is_weekend()).map(|d| d.amount));
    let weekday = average(daily.iter().filter(|d| !d.is_weekend()).map(|d| d.amount));
    weekend_weekday_ratio(weekend, weekday)
}

fn weekend_weekday_ratio(weekend_avg: f64, weekday_avg: f64) -> f64 {
    if weekday_avg == 0.0 {
        0.0
    } else {
        weekend_avg / weekday_avg
    }
}

pub fn classify_weekend_ratio(ratio: f64) -> WeekendPattern {
    if ratio > 1.5 {
        WeekendPattern::WeekendSpender
    } else if ratio > 1.1 {
        WeekendPattern::SlightlyHigherWeekend
    } else if ratio < 0.7 {
        WeekendPattern::WeekdayFocused
    } else {
        WeekendPattern::Balanced
    }
}

/// Which part of the month carries the most spending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthlyPattern {
    EarlyMonth,
    MidMonth,
    LateMonth,
    Consistent,
}

impl MonthlyPattern {
    pub fn label(&self) -> &'static str {
        match self {
            MonthlyPattern::EarlyMonth => "early-month spender",
            MonthlyPattern::MidMonth => "mid-month spender",
            MonthlyPattern::LateMonth => "late-month spender",
            MonthlyPattern::Consistent => "consistent",
        }
    }
}

/// First day of the late part of the month
const LATE_MONTH_START: u32 = 21;

/// Average spend for days 1-10, 11-20 and 21 onwards
pub fn period_averages(daily: &[DailySpending]) -> (f64, f64, f64) {
    let bucket = |range: std::ops::RangeInclusive<u32>| {
        average(
            daily
                .iter()
                .filter(|d| range.contains(&d.day_of_month))
                .map(|d| d.amount),
        )
    };
    (bucket(1..=10), bucket(11..=20), bucket(LATE_MONTH_START..=31))
}

/// A bucket names the pattern when it beats both others by more than 30%
pub fn monthly_pattern(daily: &[DailySpending]) -> MonthlyPattern {
    let (early, mid, late) = period_averages(daily);
    let dominates = |a: f64, b: f64, c: f64| a > b * 1.3 && a > c * 1.3;

    if dominates(early, mid, late) {
        MonthlyPattern::EarlyMonth
    } else if dominates(mid, early, late) {
        MonthlyPattern::MidMonth
    } else if dominates(late, early, mid) {
        MonthlyPattern::LateMonth
    } else {
        MonthlyPattern::Consistent
    }
}

/// Weekday with the highest average spend among days that had spending
///
/// Ties go to the earlier weekday, Monday first.
pub fn most_active_weekday(daily: &[DailySpending]) -> Option<(Weekday, f64)> {
    let mut by_weekday: BTreeMap<u32, (Weekday, f64, usize)> = BTreeMap::new();
    for day in daily.iter().filter(|d| d.amount > 0.0) {
        let weekday = day.weekday();
        let entry = by_weekday
            .entry(weekday.num_days_from_monday())
            .or_insert((weekday, 0.0, 0));
        entry.1 += day.amount;
        entry.2 += 1;
    }

    by_weekday
        .values()
        .map(|(weekday, sum, count)| (*weekday, sum / *count as f64))
        .fold(None, |best: Option<(Weekday, f64)>, (weekday, avg)| match best {
            Some((_, best_avg)) if avg <= best_avg => best,
            _ => Some((weekday, avg)),
        })
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn weekend_insight(snapshot: &AnalyticsSnapshot) -> Option<Insight> {
    if snapshot.is_empty() {
        return None;
    }
    let ratio = weekend_ratio(snapshot.elapsed_daily_spending());
    let pattern = classify_weekend_ratio(ratio);
    let severity = match pattern {
        WeekendPattern::WeekendSpender => Severity::Attention,
        _ => Severity::Info,
    };
    let detail = if ratio == 0.0 {
        "No weekday spending this month".to_string()
    } else {
        format!("Weekend days average {:.1}x a weekday", ratio)
    };
    Some(Insight::new(InsightKind::WeekendRatio, severity, pattern.label()).with_detail(detail))
}

/// Needs the late part of the month to have started
pub fn monthly_pattern_insight(snapshot: &AnalyticsSnapshot) -> Option<Insight> {
    let daily = snapshot.elapsed_daily_spending();
    if snapshot.is_empty() || daily.len() < LATE_MONTH_START as usize {
        return None;
    }
    let (early, mid, late) = period_averages(daily);
    let pattern = monthly_pattern(daily);
    Some(
        Insight::new(InsightKind::MonthlyPattern, Severity::Info, pattern.label()).with_detail(
            format!(
                "Daily average {:.2} early, {:.2} mid, {:.2} late",
                early, mid, late
            ),
        ),
    )
}

pub fn biggest_expense_category(snapshot: &AnalyticsSnapshot) -> Option<Insight> {
    let (category, amount) = snapshot.biggest_category()?;
    let share = category_share(snapshot.total_spent, amount);
    Some(
        Insight::new(
            InsightKind::BiggestCategory,
            Severity::Info,
            format!("biggest category: {}", category.display_name()),
        )
        .with_detail(format!("{:.2} spent, {:.1}% of the month", amount, share)),
    )
}

pub fn active_weekday_insight(snapshot: &AnalyticsSnapshot) -> Option<Insight> {
    let (weekday, avg) = most_active_weekday(snapshot.elapsed_daily_spending())?;
    Some(
        Insight::new(
            InsightKind::ActiveWeekday,
            Severity::Info,
            format!("most active day: {}", weekday_name(weekday)),
        )
        .with_detail(format!("{:.2} on average when spending", avg)),
    )
}

/// Budget standing as an insight; nothing when no budget is set
pub fn budget_insight(snapshot: &AnalyticsSnapshot) -> Option<Insight> {
    let budget = snapshot.current_budget?;
    let insight = match snapshot.budget_status {
        BudgetStatus::NoBudget => return None,
        BudgetStatus::OverBudget => Insight::new(InsightKind::Budget, Severity::Warning, "over budget")
            .with_detail(format!(
                "{:.2} over the {:.2} budget",
                snapshot.total_spent - budget,
                budget
            )),
        BudgetStatus::ProjectedOver => Insight::new(
            InsightKind::Budget,
            Severity::Attention,
            "projected to exceed budget",
        )
        .with_detail(format!(
            "Projected {:.2} against a {:.2} budget",
            snapshot.projected_monthly_spend, budget
        )),
        BudgetStatus::UnderBudget => {
            Insight::new(InsightKind::Budget, Severity::Info, "within budget").with_detail(
                format!("{:.2} of {:.2} left", budget - snapshot.total_spent, budget),
            )
        }
    };
    Some(insight)
}

/// Every insight that has data, most severe first
pub fn generate_insights(snapshot: &AnalyticsSnapshot) -> Vec<Insight> {
    let mut insights: Vec<Insight> = [
        budget_insight(snapshot),
        biggest_expense_category(snapshot),
        weekend_insight(snapshot),
        monthly_pattern_insight(snapshot),
        active_weekday_insight(snapshot),
    ]
    .into_iter()
    .flatten()
    .collect();

    insights.sort_by(|a, b| b.severity.cmp(&a.severity));
    insights
}
