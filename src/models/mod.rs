//! Core data models for the budget tracker
//!
//! This module contains the data structures of the budgeting domain: the
//! income/category state, category ids, user input parsing and the transient
//! notifications shown by the render surfaces.

pub mod amount;
pub mod category;
pub mod ids;
pub mod notification;
pub mod state;

pub use amount::{format_amount, parse_amount, parse_income, parse_number};
pub use category::{Category, CategoryValidationError};
pub use ids::{CategoryId, IdGenerator};
pub use notification::{Notification, NotificationKind, NotificationQueue};
pub use state::BudgetState;
