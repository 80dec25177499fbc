//! User settings for Pocketbook
//!
//! Manages user preferences: display currency, the category preselected for
//! new expenses, and the colour theme. Settings are loaded once and passed
//! explicitly to whatever needs them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::paths::PocketbookPaths;
use crate::error::PocketbookError;
use crate::models::Category;

/// A currency the user can pick for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

/// Currencies offered in settings
pub const AVAILABLE_CURRENCIES: [CurrencyInfo; 11] = [
    CurrencyInfo { code: "USD", symbol: "$", name: "US Dollar" },
    CurrencyInfo { code: "EUR", symbol: "€", name: "Euro" },
    CurrencyInfo { code: "MDL", symbol: "L", name: "Moldovan Leu" },
    CurrencyInfo { code: "GBP", symbol: "£", name: "British Pound" },
    CurrencyInfo { code: "JPY", symbol: "¥", name: "Japanese Yen" },
    CurrencyInfo { code: "CAD", symbol: "$", name: "Canadian Dollar" },
    CurrencyInfo { code: "AUD", symbol: "$", name: "Australian Dollar" },
    CurrencyInfo { code: "CHF", symbol: "Fr", name: "Swiss Franc" },
    CurrencyInfo { code: "CNY", symbol: "¥", name: "Chinese Yuan" },
    CurrencyInfo { code: "INR", symbol: "₹", name: "Indian Rupee" },
    CurrencyInfo { code: "RUB", symbol: "₽", name: "Russian Ruble" },
];

/// Look up a currency by its ISO code (case-insensitive)
pub fn find_currency(code: &str) -> Option<&'static CurrencyInfo> {
    AVAILABLE_CURRENCIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
}

/// Colour theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "Light"),
            Self::Dark => write!(f, "Dark"),
            Self::System => write!(f, "System"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// User settings for Pocketbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// ISO currency code used when displaying amounts
    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    /// Category preselected when adding an expense
    #[serde(default = "default_category")]
    pub default_category: Category,

    /// Colour theme preference
    #[serde(default)]
    pub theme: Theme,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_code() -> String {
    "USD".to_string()
}

fn default_category() -> Category {
    Category::Food
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_code: default_currency_code(),
            default_category: default_category(),
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Symbol for the configured currency; unknown codes display as the code
    pub fn currency_symbol(&self) -> String {
        find_currency(&self.currency_code)
            .map(|c| c.symbol.to_string())
            .unwrap_or_else(|| self.currency_code.clone())
    }

    /// Change the display currency, rejecting codes not on offer
    pub fn set_currency(&mut self, code: &str) -> Result<(), PocketbookError> {
        let currency = find_currency(code).ok_or_else(|| {
            PocketbookError::Validation(format!("Unsupported currency code: {}", code))
        })?;
        self.currency_code = currency.code.to_string();
        Ok(())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PocketbookPaths) -> Result<Self, PocketbookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PocketbookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PocketbookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PocketbookPaths) -> Result<(), PocketbookError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PocketbookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            PocketbookError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
