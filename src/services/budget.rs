//! Monthly budget service
//!
//! Budgets are edited in memory and written back immediately so an edit is
//! never held only in memory.

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{BudgetMap, MonthPeriod};
use crate::storage::Storage;

/// Service for monthly budgets
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load the current budget map
    pub fn load(&self) -> BudgetMap {
        self.storage.load_budgets()
    }

    /// Upsert the budget for `period` in `budgets`, then save the map
    ///
    /// `budgets` is only changed once the save succeeded. Returns the amount
    /// that was replaced, if any.
    pub fn set_budget(
        &self,
        budgets: &mut BudgetMap,
        period: &MonthPeriod,
        amount: f64,
    ) -> PocketbookResult<Option<f64>> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(PocketbookError::Validation(format!(
                "Budget must be a non-negative amount, got {}",
                amount
            )));
        }

        let mut updated = budgets.clone();
        let previous = updated.set_for(period, amount);
        self.storage.save_budgets(&updated)?;
        *budgets = updated;
        tracing::debug!(key = %period.budget_key(), amount, ?previous, "budget saved");
        Ok(previous)
    }

    /// Set a budget against the stored map
    pub fn set(&self, period: &MonthPeriod, amount: f64) -> PocketbookResult<Option<f64>> {
        let mut budgets = self.load();
        self.set_budget(&mut budgets, period, amount)
    }

    pub fn get_budget(&self, budgets: &BudgetMap, period: &MonthPeriod) -> Option<f64> {
        budgets.get_for(period)
    }

    /// Stored budget for `period`
    pub fn get(&self, period: &MonthPeriod) -> Option<f64> {
        self.get_budget(&self.load(), period)
    }

    /// Remove the budget for `period`
    pub fn clear(&self, period: &MonthPeriod) -> PocketbookResult<f64> {
        let mut budgets = self.load();
        let removed = budgets
            .remove(&period.budget_key())
            .ok_or_else(|| PocketbookError::budget_not_found(period.budget_key()))?;
        self.storage.save_budgets(&budgets)?;
        Ok(removed)
    }

    /// All budgets in chronological order
    pub fn list(&self) -> Vec<(MonthPeriod, f64)> {
        self.load().iter_by_period()
    }
}
