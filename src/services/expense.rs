//! Expense service
//!
//! Business logic for recording, editing and removing expenses. Every
//! mutation loads the full list, applies the change and saves it back.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDate};

use crate::analytics::{filter_by_month, AnalyticsSnapshot};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{BudgetMap, Category, Expense, MonthPeriod};
use crate::storage::Storage;

/// One-tap expenses offered by the quick add shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickPreset {
    Coffee,
    BusTicket,
    Groceries,
}

impl QuickPreset {
    pub const ALL: [QuickPreset; 3] = [QuickPreset::Coffee, QuickPreset::BusTicket, QuickPreset::Groceries];

    pub fn title(&self) -> &'static str {
        match self {
            QuickPreset::Coffee => "Coffee",
            QuickPreset::BusTicket => "Bus Ticket",
            QuickPreset::Groceries => "Groceries",
        }
    }

    pub fn amount(&self) -> f64 {
        match self {
            QuickPreset::Coffee => 5.0,
            QuickPreset::BusTicket => 2.5,
            QuickPreset::Groceries => 20.0,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            QuickPreset::Coffee => Category::Food,
            QuickPreset::BusTicket => Category::Transportation,
            QuickPreset::Groceries => Category::Shopping,
        }
    }
}

impl fmt::Display for QuickPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for QuickPreset {
    type Err = PocketbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "coffee" => Ok(QuickPreset::Coffee),
            "bus" | "busticket" => Ok(QuickPreset::BusTicket),
            "groceries" => Ok(QuickPreset::Groceries),
            _ => Err(PocketbookError::Validation(format!(
                "Unknown quick expense '{}'. Options: coffee, bus-ticket, groceries",
                s
            ))),
        }
    }
}

/// Fields to change on an existing expense
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<Category>,
    pub date: Option<DateTime<FixedOffset>>,
}

impl ExpenseUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.amount.is_none() && self.category.is_none() && self.date.is_none()
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense; the date defaults to now
    pub fn add(
        &self,
        title: &str,
        amount: f64,
        category: Category,
        date: Option<DateTime<FixedOffset>>,
    ) -> PocketbookResult<Expense> {
        let date = date.unwrap_or_else(|| Local::now().fixed_offset());
        let expense = Expense::new(title.trim(), amount, category, date);
        expense
            .validate()
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        let mut expenses = self.storage.load_expenses();
        expenses.push(expense.clone());
        self.storage.save_expenses(&expenses)?;

        tracing::info!(id = %expense.id, amount = expense.amount, category = %expense.category, "expense added");
        Ok(expense)
    }

    /// Record one of the quick add presets, dated now
    pub fn quick_add(&self, preset: QuickPreset) -> PocketbookResult<Expense> {
        self.add(preset.title(), preset.amount(), preset.category(), None)
    }

    /// Find an expense by full UUID or short display ID
    pub fn find(&self, identifier: &str) -> PocketbookResult<Option<Expense>> {
        let identifier = identifier.trim();
        let matches: Vec<Expense> = self
            .storage
            .load_expenses()
            .into_iter()
            .filter(|e| e.id.matches(identifier))
            .collect();

        match matches.len() {
            0 | 1 => Ok(matches.into_iter().next()),
            n => Err(PocketbookError::Validation(format!(
                "'{}' matches {} expenses; use a longer ID",
                identifier, n
            ))),
        }
    }

    /// Like [`find`](Self::find) but missing expenses are an error
    pub fn get(&self, identifier: &str) -> PocketbookResult<Expense> {
        self.find(identifier)?
            .ok_or_else(|| PocketbookError::expense_not_found(identifier))
    }

    /// Apply changes to an existing expense
    pub fn update(&self, identifier: &str, changes: ExpenseUpdate) -> PocketbookResult<Expense> {
        if changes.is_empty() {
            return Err(PocketbookError::Validation("Nothing to update".into()));
        }

        let target = self.get(identifier)?;
        let mut expenses = self.storage.load_expenses();
        let expense = expenses
            .iter_mut()
            .find(|e| e.id == target.id)
            .ok_or_else(|| PocketbookError::expense_not_found(identifier))?;

        if let Some(title) = changes.title {
            expense.title = title.trim().to_string();
        }
        if let Some(amount) = changes.amount {
            expense.amount = amount;
        }
        if let Some(category) = changes.category {
            expense.category = category;
        }
        if let Some(date) = changes.date {
            expense.date = date;
        }
        expense
            .validate()
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        let updated = expense.clone();
        self.storage.save_expenses(&expenses)?;
        tracing::info!(id = %updated.id, "expense updated");
        Ok(updated)
    }

    /// Remove an expense, returning it
    pub fn delete(&self, identifier: &str) -> PocketbookResult<Expense> {
        let target = self.get(identifier)?;
        let mut expenses = self.storage.load_expenses();
        expenses.retain(|e| e.id != target.id);
        self.storage.save_expenses(&expenses)?;
        tracing::info!(id = %target.id, "expense deleted");
        Ok(target)
    }

    /// All expenses, newest first
    pub fn list_all(&self) -> Vec<Expense> {
        let mut expenses = self.storage.load_expenses();
        sort_newest_first(&mut expenses);
        expenses
    }

    /// Expenses in `period`, newest first
    pub fn list_for_month(&self, period: &MonthPeriod) -> Vec<Expense> {
        let expenses = self.storage.load_expenses();
        let mut in_month: Vec<Expense> = filter_by_month(&expenses, period)
            .into_iter()
            .cloned()
            .collect();
        sort_newest_first(&mut in_month);
        in_month
    }

    /// Recompute analytics for `period` from stored data
    pub fn snapshot(&self, period: MonthPeriod, today: NaiveDate) -> AnalyticsSnapshot {
        let expenses = self.storage.load_expenses();
        let budgets = self.storage.load_budgets();
        AnalyticsSnapshot::compute(&expenses, &budgets, period, today)
    }

    /// Delete every expense and budget
    pub fn reset_all(&self) -> PocketbookResult<()> {
        self.storage.save_expenses(&[])?;
        self.storage.save_budgets(&BudgetMap::new())?;
        tracing::warn!("all expenses and budgets removed");
        Ok(())
    }
}

fn sort_newest_first(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| b.date.cmp(&a.date));
}
