//! Expense repository for JSON storage
//!
//! Persists the flat expense list to expenses.json as a JSON array.

use std::path::PathBuf;

use crate::error::PocketbookError;
use crate::models::Expense;

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for expense persistence
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load all expenses
    ///
    /// A missing or malformed file yields an empty list.
    pub fn load(&self) -> Vec<Expense> {
        let expenses: Vec<Expense> = read_json_or_default(&self.path);
        tracing::debug!(count = expenses.len(), "loaded expenses");
        expenses
    }

    /// Replace the stored expense list
    pub fn save(&self, expenses: &[Expense]) -> Result<(), PocketbookError> {
        write_json_atomic(&self.path, expenses)?;
        tracing::debug!(count = expenses.len(), "saved expenses");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (_temp_dir, repo) = repo();
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let (_temp_dir, repo) = repo();
        let day = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let expenses = vec![
            Expense::on_date("Coffee", 5.0, Category::Food, day),
            Expense::on_date("Rent", 900.0, Category::Rent, day),
        ];

        repo.save(&expenses).unwrap();
        assert_eq!(repo.load(), expenses);
    }

    #[test]
    fn test_file_is_a_plain_array() {
        let (_temp_dir, repo) = repo();
        let day = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        repo.save(&[Expense::on_date("Coffee", 5.0, Category::Food, day)])
            .unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(repo.path()).unwrap()).unwrap();
        assert!(raw.is_array());
        assert_eq!(raw[0]["price"], 5.0);
    }

    #[test]
    fn test_malformed_file_is_empty() {
        let (_temp_dir, repo) = repo();
        std::fs::write(repo.path(), r#"{"expenses": "nope"}"#).unwrap();
        assert!(repo.load().is_empty());
    }
}
