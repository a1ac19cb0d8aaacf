use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Spending category inferred for a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    Groceries,
    #[serde(rename = "Gas & Fuel")]
    GasAndFuel,
    Shopping,
    Transportation,
    Healthcare,
    Entertainment,
    #[default]
    Other,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown category: '{0}'")]
pub struct ParseCategoryError(pub String);

impl Category {
    pub const ALL: [Category; 8] = [
        Category::FoodAndDining,
        Category::Groceries,
        Category::GasAndFuel,
        Category::Shopping,
        Category::Transportation,
        Category::Healthcare,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::FoodAndDining => "Food & Dining",
            Category::Groceries => "Groceries",
            Category::GasAndFuel => "Gas & Fuel",
            Category::Shopping => "Shopping",
            Category::Transportation => "Transportation",
            Category::Healthcare => "Healthcare",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }

    pub fn is_other(self) -> bool {
        self == Category::Other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
