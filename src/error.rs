//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Non-numeric or out-of-range user input
    #[error("{0}")]
    InvalidInput(String),

    /// Duplicate entity errors. The identifier is kept for logging only.
    #[error("{entity_type} already exists")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Persisted state could not be decoded
    #[error("Corrupt persisted state: {0}")]
    CorruptState(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BudgetError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for categories
    pub fn duplicate_category(name: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Category",
            identifier: name.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Errors the user can fix by changing their input.
    ///
    /// These are reported as warnings and never change state.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::Duplicate { .. })
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_input_displays_message_only() {
        let err = BudgetError::InvalidInput("Please enter a valid income amount".into());
        assert_eq!(err.to_string(), "Please enter a valid income amount");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_duplicate_error() {
        let err = BudgetError::duplicate_category("Food");
        assert_eq!(err.to_string(), "Category already exists");
        assert!(err.is_recoverable());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_error() {
        let err = BudgetError::category_not_found("cat-42");
        assert_eq!(err.to_string(), "Category not found: cat-42");
        assert!(err.is_not_found());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let budget_err: BudgetError = io_err.into();
        assert!(matches!(budget_err, BudgetError::Io(_)));
        assert!(!budget_err.is_recoverable());
    }
}
