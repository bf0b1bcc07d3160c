//! Display formatting for terminal output
//!
//! Turns a [`ViewModel`](crate::services::ViewModel) and notifications into
//! plain text for the CLI.

pub mod budget;
pub mod format;

pub use budget::{format_category_table, format_notification, format_ring, format_summary};
pub use format::{format_bar, format_percent, separator, truncate};
