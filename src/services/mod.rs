//! Service layer for Pocketbook
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, month selection and budget edits.

pub mod budget;
pub mod expense;
pub mod period;

pub use budget::BudgetService;
pub use expense::{ExpenseService, ExpenseUpdate, QuickPreset};
pub use period::PeriodSelector;
