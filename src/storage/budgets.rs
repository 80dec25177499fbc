//! Budget repository for JSON storage
//!
//! Persists the month key to amount map to budgets.json as a flat object.

use std::path::PathBuf;

use crate::error::PocketbookError;
use crate::models::BudgetMap;

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for monthly budget persistence
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    path: PathBuf,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load all budgets
    ///
    /// A missing or malformed file yields an empty map.
    pub fn load(&self) -> BudgetMap {
        let budgets: BudgetMap = read_json_or_default(&self.path);
        tracing::debug!(count = budgets.len(), "loaded budgets");
        budgets
    }

    /// Replace the stored budget map
    pub fn save(&self, budgets: &BudgetMap) -> Result<(), PocketbookError> {
        write_json_atomic(&self.path, budgets)?;
        tracing::debug!(count = budgets.len(), "saved budgets");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budgets.json"));

        let mut budgets = BudgetMap::new();
        budgets.set("03-2024", 500.0);
        budgets.set("04-2024", 550.0);
        repo.save(&budgets).unwrap();

        let loaded = repo.load();
        assert_eq!(loaded.get("03-2024"), Some(500.0));
        assert_eq!(loaded.get("04-2024"), Some(550.0));
    }

    #[test]
    fn test_malformed_values_yield_empty_map() {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        std::fs::write(repo.path(), r#"{"03-2024": "five hundred"}"#).unwrap();

        assert!(repo.load().is_empty());
    }
}
