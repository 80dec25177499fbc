//! Storage layer for Pocketbook
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Loading never fails: missing or malformed files read as empty.

pub mod budgets;
pub mod expenses;
pub mod file_io;

pub use budgets::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, read_json_or_default, write_json_atomic};

use crate::config::paths::PocketbookPaths;
use crate::error::PocketbookError;
use crate::models::{BudgetMap, Expense};

/// Main storage coordinator that provides access to all repositories
#[derive(Debug, Clone)]
pub struct Storage {
    paths: PocketbookPaths,
    pub expenses: ExpenseRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: PocketbookPaths) -> Result<Self, PocketbookError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PocketbookPaths {
        &self.paths
    }

    /// Load the full expense list
    pub fn load_expenses(&self) -> Vec<Expense> {
        self.expenses.load()
    }

    /// Persist the full expense list
    pub fn save_expenses(&self, expenses: &[Expense]) -> Result<(), PocketbookError> {
        self.expenses.save(expenses)
    }

    /// Load the month key to budget map
    pub fn load_budgets(&self) -> BudgetMap {
        self.budgets.load()
    }

    /// Persist the month key to budget map
    pub fn save_budgets(&self, budgets: &BudgetMap) -> Result<(), PocketbookError> {
        self.budgets.save(budgets)
    }
}
