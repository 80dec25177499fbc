//! Month selection
//!
//! Keeps the selected month inside a fixed window of five years either side
//! of the reference date. Months after the current real-world month are
//! never selectable.

use chrono::NaiveDate;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::MonthPeriod;

/// Years of history and future kept in the selectable window
pub const WINDOW_YEARS: i32 = 5;

/// Selected month plus the window it may move in
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSelector {
    selected: MonthPeriod,
    first: MonthPeriod,
    last: MonthPeriod,
}

impl PeriodSelector {
    /// Start at the month containing `today`
    pub fn new(today: NaiveDate) -> Self {
        let current = MonthPeriod::from_date(today);
        let month = current.month() as i32;
        Self {
            selected: current,
            // January five years back through December five years ahead
            first: current.offset(1 - month - WINDOW_YEARS * 12),
            last: current.offset(12 - month + WINDOW_YEARS * 12),
        }
    }

    pub fn selected(&self) -> MonthPeriod {
        self.selected
    }

    pub fn first(&self) -> MonthPeriod {
        self.first
    }

    pub fn last(&self) -> MonthPeriod {
        self.last
    }

    /// Every month in the window, oldest first
    pub fn window(&self) -> Vec<MonthPeriod> {
        let mut periods = Vec::new();
        let mut period = self.first;
        while period <= self.last {
            periods.push(period);
            period = period.next();
        }
        periods
    }

    /// Months in the window that can currently be selected, newest first
    pub fn selectable(&self, today: NaiveDate) -> Vec<MonthPeriod> {
        let current = MonthPeriod::from_date(today);
        let mut periods: Vec<MonthPeriod> =
            self.window().into_iter().filter(|p| *p <= current).collect();
        periods.reverse();
        periods
    }

    fn check(&self, period: MonthPeriod, today: NaiveDate) -> PocketbookResult<()> {
        let current = MonthPeriod::from_date(today);
        if period > current {
            return Err(PocketbookError::FuturePeriod {
                requested: period.label(),
                current: current.label(),
            });
        }
        if period < self.first || period > self.last {
            return Err(PocketbookError::PeriodOutOfRange {
                requested: period.label(),
                first: self.first.label(),
                last: self.last.label(),
            });
        }
        Ok(())
    }

    /// Move the selection to `period`
    ///
    /// A rejected selection leaves the current one in place.
    pub fn select(&mut self, period: MonthPeriod, today: NaiveDate) -> PocketbookResult<MonthPeriod> {
        if let Err(err) = self.check(period, today) {
            tracing::warn!(requested = %period, selected = %self.selected, "rejected period selection");
            return Err(err);
        }
        tracing::debug!(from = %self.selected, to = %period, "selected period");
        self.selected = period;
        Ok(period)
    }

    pub fn previous(&mut self, today: NaiveDate) -> PocketbookResult<MonthPeriod> {
        self.select(self.selected.prev(), today)
    }

    pub fn next(&mut self, today: NaiveDate) -> PocketbookResult<MonthPeriod> {
        self.select(self.selected.next(), today)
    }

    pub fn reset_to_current(&mut self, today: NaiveDate) -> MonthPeriod {
        self.selected = MonthPeriod::from_date(today);
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn month(y: i32, m: u32) -> MonthPeriod {
        MonthPeriod::new(y, m).unwrap()
    }

    #[test]
    fn test_window_spans_eleven_years() {
        let selector = PeriodSelector::new(today());
        assert_eq!(selector.first(), month(2019, 1));
        assert_eq!(selector.last(), month(2029, 12));
        assert_eq!(selector.window().len(), 132);
        assert_eq!(selector.selected(), month(2024, 3));
    }

    #[test]
    fn test_future_selection_is_rejected_and_unchanged() {
        let mut selector = PeriodSelector::new(today());
        selector.select(month(2023, 11), today()).unwrap();

        let err = selector.select(month(2024, 4), today()).unwrap_err();
        assert!(matches!(err, PocketbookError::FuturePeriod { .. }));
        assert!(err.is_rejected_period());
        assert_eq!(selector.selected(), month(2023, 11));
    }

    #[test]
    fn test_past_and_current_selection() {
        let mut selector = PeriodSelector::new(today());
        assert_eq!(selector.select(month(2020, 6), today()).unwrap(), month(2020, 6));
        assert_eq!(selector.select(month(2024, 3), today()).unwrap(), month(2024, 3));
    }

    #[test]
    fn test_out_of_window_rejected() {
        let mut selector = PeriodSelector::new(today());
        let err = selector.select(month(2018, 12), today()).unwrap_err();
        assert!(matches!(err, PocketbookError::PeriodOutOfRange { .. }));
        assert_eq!(selector.selected(), month(2024, 3));
    }

    #[test]
    fn test_navigation() {
        let mut selector = PeriodSelector::new(today());
        assert!(selector.next(today()).is_err());
        assert_eq!(selector.previous(today()).unwrap(), month(2024, 2));
        assert_eq!(selector.next(today()).unwrap(), month(2024, 3));

        selector.select(month(2019, 1), today()).unwrap();
        assert!(selector.previous(today()).is_err());
        assert_eq!(selector.reset_to_current(today()), month(2024, 3));
    }

    #[test]
    fn test_selectable_is_newest_first() {
        let selector = PeriodSelector::new(today());
        let selectable = selector.selectable(today());
        assert_eq!(selectable[0], month(2024, 3));
        assert_eq!(selectable.last(), Some(&month(2019, 1)));
        assert_eq!(selectable.len(), 5 * 12 + 3);
    }
}
