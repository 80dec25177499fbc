//! Expense model
//!
//! A single spending record. The serialized form uses `price` for the amount
//! and an RFC 3339 timestamp for the date.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::period::MonthPeriod;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    #[serde(default)]
    pub id: ExpenseId,

    /// What the money was spent on
    pub title: String,

    /// Amount spent, in the user's currency
    #[serde(rename = "price", alias = "amount")]
    pub amount: f64,

    /// When the expense happened, with the offset it was entered in
    #[serde(deserialize_with = "deserialize_date")]
    pub date: DateTime<FixedOffset>,

    /// Category used for aggregation
    #[serde(default)]
    pub category: Category,
}

impl Expense {
    /// Create a new expense with a fresh ID
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        category: Category,
        date: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            title: title.into(),
            amount,
            date,
            category,
        }
    }

    /// Create an expense dated now in the local timezone
    pub fn now(title: impl Into<String>, amount: f64, category: Category) -> Self {
        Self::new(title, amount, category, Local::now().fixed_offset())
    }

    /// Create an expense at noon UTC on the given day
    pub fn on_date(title: impl Into<String>, amount: f64, category: Category, day: NaiveDate) -> Self {
        let noon = day
            .and_hms_opt(12, 0, 0)
            .unwrap_or_else(|| day.and_time(NaiveTime::MIN));
        let date = Utc.from_utc_datetime(&noon).fixed_offset();
        Self::new(title, amount, category, date)
    }

    /// Calendar day of the expense as it was entered
    pub fn local_date(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Month the expense belongs to
    pub fn period(&self) -> MonthPeriod {
        MonthPeriod::from_date(self.local_date())
    }

    /// Validate user-entered fields
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.title.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyTitle);
        }
        if !self.amount.is_finite() {
            return Err(ExpenseValidationError::InvalidAmount(self.amount.to_string()));
        }
        if self.amount < 0.0 {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyTitle,
    InvalidAmount(String),
    NegativeAmount(f64),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Please enter a title for your expense"),
            Self::InvalidAmount(s) => write!(f, "Please enter a valid amount (got '{}')", s),
            Self::NegativeAmount(a) => write!(f, "Amount cannot be negative: {}", a),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// Parse a user-entered amount
///
/// Accepts `,` as decimal separator and an optional leading currency symbol.
pub fn parse_amount(s: &str) -> Result<f64, ExpenseValidationError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ExpenseValidationError::InvalidAmount(s.to_string()));
    }
    let cleaned = trimmed
        .trim_start_matches(|c: char| !c.is_ascii_digit() && c != '-' && c != '.' && c != ',')
        .replace(',', ".");
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ExpenseValidationError::InvalidAmount(s.to_string()))
}

/// Parse an expense timestamp
///
/// Formats, in order:
/// - RFC 3339 with offset: `2024-01-05T09:30:00+02:00`
/// - naive date-time, read as UTC: `2024-01-05T09:30:00`
/// - plain date, noon UTC: `2024-01-05`
pub fn parse_expense_date(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date);
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(Utc.from_utc_datetime(&naive).fixed_offset());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().and_then(|day| {
        day.and_hms_opt(12, 0, 0)
            .map(|noon| Utc.from_utc_datetime(&noon).fixed_offset())
    })
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_expense_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid expense date: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_uses_price_field() {
        let expense = Expense::on_date(
            "Coffee",
            5.0,
            Category::Food,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        );
        let value: serde_json::Value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["price"], 5.0);
        assert_eq!(value["category"], "food");
        assert!(value.get("amount").is_none());
    }

    #[test]
    fn test_deserialize_stored_shape() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "title": "Bus Ticket",
            "price": 2.5,
            "date": "2024-03-10T08:15:00Z",
            "category": "transportation"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount, 2.5);
        assert_eq!(expense.category, Category::Transportation);
        assert_eq!(expense.local_date(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }

    #[test]
    fn test_unknown_category_falls_back_to_others() {
        let json = r#"{"title": "Mystery", "price": 1, "date": "2024-03-10", "category": "pets"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.category, Category::Others);
    }

    #[test]
    fn test_local_date_keeps_entered_offset() {
        // 23:30 at +02:00 is 21:30 UTC, still the 5th as entered
        let date = parse_expense_date("2024-01-05T23:30:00+02:00").unwrap();
        let expense = Expense::new("Late dinner", 40.0, Category::Food, date);
        assert_eq!(expense.local_date(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());

        // 00:30 at +02:00 is the 4th in UTC but the 5th as entered
        let date = parse_expense_date("2024-01-05T00:30:00+02:00").unwrap();
        let expense = Expense::new("Taxi", 12.0, Category::Transportation, date);
        assert_eq!(expense.local_date(), NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("10.50").unwrap(), 10.5);
        assert_eq!(parse_amount("10,50").unwrap(), 10.5);
        assert_eq!(parse_amount("$7").unwrap(), 7.0);
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn test_validate() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert!(Expense::on_date("Lunch", 12.0, Category::Food, day).validate().is_ok());
        assert_eq!(
            Expense::on_date("  ", 12.0, Category::Food, day).validate(),
            Err(ExpenseValidationError::EmptyTitle)
        );
        assert!(Expense::on_date("Refund", -3.0, Category::Food, day)
            .validate()
            .is_err());
        assert!(Expense::on_date("Broken", f64::NAN, Category::Food, day)
            .validate()
            .is_err());
    }
}
