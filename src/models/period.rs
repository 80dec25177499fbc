//! Calendar month representation
//!
//! Expenses are analysed one calendar month at a time. A `MonthPeriod` is
//! also what budgets are keyed by, via its `"MM-YYYY"` month key.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Build the budget key for a month: zero-padded `"MM-YYYY"`
pub fn budget_key(month: u32, year: i32) -> String {
    format!("{:02}-{}", month, year)
}

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthPeriod {
    year: i32,
    month: u32,
}

impl MonthPeriod {
    /// Create a period, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The month containing a date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in the local timezone
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        // Month is validated on construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.next().start_date() - Duration::days(1)
    }

    /// Number of calendar days in the month
    pub fn days_in_month(&self) -> u32 {
        self.end_date().day()
    }

    /// Date of a given day of the month, if it exists
    pub fn day(&self, day_of_month: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day_of_month)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Get the next month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Get the previous month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Shift by a number of months (negative goes back)
    pub fn offset(&self, months: i32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 + months;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// Budget key for this month, e.g. `"03-2024"`
    pub fn budget_key(&self) -> String {
        budget_key(self.month, self.year)
    }

    /// English month name
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Friendly label, e.g. `"March 2024"`
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    /// Parse a period string
    ///
    /// Formats:
    /// - Budget key: "03-2024"
    /// - ISO month: "2024-03"
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 {
            return Err(PeriodParseError::InvalidFormat(s.to_string()));
        }

        let (month_part, year_part) = if parts[0].len() == 4 {
            (parts[1], parts[0])
        } else {
            (parts[0], parts[1])
        };

        let month: u32 = month_part
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let year: i32 = year_part
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Ord for MonthPeriod {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl PartialOrd for MonthPeriod {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u32) -> MonthPeriod {
        MonthPeriod::new(year, month).unwrap()
    }

    #[test]
    fn test_budget_key_is_zero_padded() {
        assert_eq!(budget_key(3, 2024), "03-2024");
        assert_eq!(budget_key(12, 2024), "12-2024");
        assert_eq!(month(2025, 1).budget_key(), "01-2025");
    }

    #[test]
    fn test_bounds() {
        let period = month(2024, 2);
        assert_eq!(period.start_date(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(period.end_date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(period.days_in_month(), 29);
        assert_eq!(month(2023, 2).days_in_month(), 28);
        assert_eq!(month(2024, 12).days_in_month(), 31);
    }

    #[test]
    fn test_navigation() {
        assert_eq!(month(2024, 12).next(), month(2025, 1));
        assert_eq!(month(2025, 1).prev(), month(2024, 12));
        assert_eq!(month(2024, 3).offset(-5), month(2023, 10));
        assert_eq!(month(2024, 3).offset(10), month(2025, 1));
        assert_eq!(month(2024, 3).offset(0), month(2024, 3));
    }

    #[test]
    fn test_contains() {
        let jan = month(2025, 1);
        assert!(jan.contains(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()));
        assert!(!jan.contains(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()));
        assert!(!jan.contains(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
    }

    #[test]
    fn test_parse_both_formats() {
        assert_eq!(MonthPeriod::parse("03-2024").unwrap(), month(2024, 3));
        assert_eq!(MonthPeriod::parse("2024-03").unwrap(), month(2024, 3));
        assert_eq!(
            MonthPeriod::parse("13-2024"),
            Err(PeriodParseError::InvalidMonth(13))
        );
        assert!(MonthPeriod::parse("March").is_err());
    }

    #[test]
    fn test_display_and_label() {
        assert_eq!(month(2025, 1).to_string(), "2025-01");
        assert_eq!(month(2025, 1).label(), "January 2025");
    }

    #[test]
    fn test_ordering() {
        assert!(month(2024, 12) < month(2025, 1));
        assert!(month(2025, 2) > month(2025, 1));
    }
}
