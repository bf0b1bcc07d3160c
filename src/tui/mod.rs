//! Terminal User Interface module
//!
//! An interactive render surface for the budget: summary stats, the usage
//! ring, per-category bars and toast notifications.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
