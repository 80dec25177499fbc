//! Monthly budget map
//!
//! One budget amount per calendar month, keyed by the `"MM-YYYY"` month key.
//! A missing key means no budget was set, which is different from a budget
//! of zero.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::period::MonthPeriod;

/// Mapping from month key to budget amount
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetMap(BTreeMap<String, f64>);

impl BudgetMap {
    /// Create an empty budget map
    pub fn new() -> Self {
        Self::default()
    }

    /// Budget for a month key, if one was set
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Budget for a month, if one was set
    pub fn get_for(&self, period: &MonthPeriod) -> Option<f64> {
        self.get(&period.budget_key())
    }

    /// Insert or overwrite the budget for a month key
    ///
    /// Returns the previous amount when the key already existed.
    pub fn set(&mut self, key: impl Into<String>, amount: f64) -> Option<f64> {
        self.0.insert(key.into(), amount)
    }

    /// Insert or overwrite the budget for a month
    pub fn set_for(&mut self, period: &MonthPeriod, amount: f64) -> Option<f64> {
        self.set(period.budget_key(), amount)
    }

    /// Remove the budget for a month key
    pub fn remove(&mut self, key: &str) -> Option<f64> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All budgets ordered chronologically
    ///
    /// Keys that are not valid month keys are skipped.
    pub fn iter_by_period(&self) -> Vec<(MonthPeriod, f64)> {
        let mut entries: Vec<_> = self
            .0
            .iter()
            .filter_map(|(key, amount)| MonthPeriod::parse(key).ok().map(|p| (p, *amount)))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

impl FromIterator<(String, f64)> for BudgetMap {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let mut budgets = BudgetMap::new();
        assert_eq!(budgets.get("03-2024"), None);

        budgets.set("03-2024", 500.0);
        assert_eq!(budgets.get("03-2024"), Some(500.0));
    }

    #[test]
    fn test_set_overwrites_existing_key() {
        let mut budgets = BudgetMap::new();
        budgets.set("03-2024", 500.0);
        let previous = budgets.set("03-2024", 650.0);

        assert_eq!(previous, Some(500.0));
        assert_eq!(budgets.get("03-2024"), Some(650.0));
        assert_eq!(budgets.len(), 1);
    }

    #[test]
    fn test_zero_budget_is_distinct_from_absent() {
        let mut budgets = BudgetMap::new();
        budgets.set("01-2024", 0.0);
        assert_eq!(budgets.get("01-2024"), Some(0.0));
        assert_eq!(budgets.get("02-2024"), None);
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let mut budgets = BudgetMap::new();
        budgets.set("03-2024", 500.0);
        let json = serde_json::to_string(&budgets).unwrap();
        assert_eq!(json, r#"{"03-2024":500.0}"#);
    }

    #[test]
    fn test_iter_by_period_is_chronological() {
        let budgets: BudgetMap = vec![
            ("01-2025".to_string(), 300.0),
            ("12-2024".to_string(), 200.0),
            ("bogus".to_string(), 1.0),
        ]
        .into_iter()
        .collect();

        let keys: Vec<_> = budgets
            .iter_by_period()
            .iter()
            .map(|(p, _)| p.budget_key())
            .collect();
        assert_eq!(keys, vec!["12-2024", "01-2025"]);
    }
}
