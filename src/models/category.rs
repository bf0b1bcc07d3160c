//! Category model
//!
//! A category is a named expense bucket with an assigned amount, tracked
//! against the budget's income.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A named expense bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name, unique among live categories
    pub name: String,

    /// Amount assigned to this category
    #[serde(default)]
    pub amount: f64,
}

impl Category {
    /// Create a new category with a zero amount
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            amount: 0.0,
        }
    }

    /// Create a category with an amount already assigned
    pub fn with_amount(id: CategoryId, name: impl Into<String>, amount: f64) -> Self {
        Self {
            amount,
            ..Self::new(id, name)
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(CategoryValidationError::InvalidAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryValidationError {
    EmptyName,
    InvalidAmount(f64),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::InvalidAmount(amount) => {
                write!(f, "Category amount must be a non-negative number, got {}", amount)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
