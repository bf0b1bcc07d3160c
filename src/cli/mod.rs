//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the budget manager.

pub mod budget;
pub mod category;

pub use budget::{handle_calc_command, handle_income_command, handle_reset_command, handle_show_command};
pub use category::{handle_category_command, CategoryCommands};

use crate::display::format_notification;
use crate::models::Notification;

/// Print the notification an intent produced, if any
pub(crate) fn report(notification: Option<Notification>) {
    if let Some(notification) = notification {
        println!("{}", format_notification(&notification));
    }
}
