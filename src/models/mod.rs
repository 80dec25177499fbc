//! Core data models for Pocketbook
//!
//! This module contains the data structures of the expense-tracking domain:
//! expenses, categories, calendar months and monthly budgets.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod period;

pub use budget::BudgetMap;
pub use category::Category;
pub use expense::{parse_amount, parse_expense_date, Expense, ExpenseValidationError};
pub use ids::ExpenseId;
pub use period::{budget_key, MonthPeriod, PeriodParseError};
