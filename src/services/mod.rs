//! Service layer for the budget tracker
//!
//! The service layer owns the budget state, applies user intents to it, and
//! derives the view model the render surfaces paint.

pub mod manager;
pub mod stats;

pub use manager::{BudgetManager, Intent};
pub use stats::{derive_stats, ring_percent, CategoryView, Severity, ViewModel};
