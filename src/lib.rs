//! Budget Tracker - terminal personal budget tracker
//!
//! The user sets an income figure, adds named expense categories, assigns
//! amounts to each, and sees totals, the remaining balance and how much of
//! the income is used, as a progress ring and per-category bars. The state is
//! kept in a key-value store so it survives restarts.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Budget state, categories, input parsing, notifications
//! - `storage`: Key-value stores and the persistence codec
//! - `services`: The budget manager and derived statistics
//! - `display`: Plain-text formatting for the CLI
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use budget_tracker::services::{BudgetManager, Intent};
//! use budget_tracker::storage::MemoryStore;
//!
//! let mut manager = BudgetManager::load(MemoryStore::new(), "expenseData").unwrap();
//! manager.dispatch(Intent::SetIncome("1000".into())).unwrap();
//! manager.dispatch(Intent::AddCategory("Rent".into())).unwrap();
//! assert_eq!(manager.view_model().remaining, 1000.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
