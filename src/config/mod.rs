//! Configuration module for Pocketbook
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence
//! - The currency table used for display

pub mod paths;
pub mod settings;

pub use paths::PocketbookPaths;
pub use settings::{find_currency, CurrencyInfo, Settings, Theme, AVAILABLE_CURRENCIES};
