//! Expense category model
//!
//! A closed set of categories. `Others` is the catch-all: unknown category
//! strings found while loading data fall back to it instead of failing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Category an expense is classified under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Category {
    Food,
    Rent,
    Shopping,
    Entertainment,
    Transportation,
    Utilities,
    Subscriptions,
    Healthcare,
    Education,
    #[default]
    Others,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 10] = [
        Category::Food,
        Category::Rent,
        Category::Shopping,
        Category::Entertainment,
        Category::Transportation,
        Category::Utilities,
        Category::Subscriptions,
        Category::Healthcare,
        Category::Education,
        Category::Others,
    ];

    /// Stored (lowercase) value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Rent => "rent",
            Self::Shopping => "shopping",
            Self::Entertainment => "entertainment",
            Self::Transportation => "transportation",
            Self::Utilities => "utilities",
            Self::Subscriptions => "subscriptions",
            Self::Healthcare => "healthcare",
            Self::Education => "education",
            Self::Others => "others",
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Rent => "Rent",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Transportation => "Transportation",
            Self::Utilities => "Utilities",
            Self::Subscriptions => "Subscriptions",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Others => "Others",
        }
    }

    /// Parse a stored value, falling back to `Others` for anything unknown
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Self::Others)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == lowered)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_str_lossy(&raw))
    }
}
