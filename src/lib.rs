//! Pocketbook - personal expense tracking and spending analytics
//!
//! This library records expenses and monthly budgets in local JSON files and
//! derives analytics for a selected month: totals, category breakdowns,
//! daily and monthly trend series, projections and insights.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, settings and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, months, budgets)
//! - `storage`: JSON file storage layer
//! - `analytics`: Pure analytics engine over an expense list
//! - `services`: Business logic layer
//! - `export`: JSON and CSV export, JSON import
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use pocketbook::analytics::AnalyticsSnapshot;
//! use pocketbook::config::PocketbookPaths;
//! use pocketbook::models::MonthPeriod;
//! use pocketbook::storage::Storage;
//!
//! let storage = Storage::new(PocketbookPaths::new()?)?;
//! let today = chrono::Local::now().date_naive();
//! let snapshot = AnalyticsSnapshot::compute(
//!     &storage.load_expenses(),
//!     &storage.load_budgets(),
//!     MonthPeriod::from_date(today),
//!     today,
//! );
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{PocketbookError, PocketbookResult};
