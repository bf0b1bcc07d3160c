//! Category CLI commands
//!
//! Implements CLI commands for adding, editing and deleting categories.
//! Categories are addressed by id (`cat-<n>` or `<n>`) or by exact name.

use clap::Subcommand;
use tracing::warn;

use crate::config::settings::Settings;
use crate::display::format_category_table;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{format_amount, CategoryId, Notification};
use crate::services::{BudgetManager, Intent};
use crate::storage::KeyValueStore;

use super::report;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with their share of income
    List,

    /// Add a new category
    Add {
        /// Category name
        name: String,
    },

    /// Set the amount assigned to a category
    Amount {
        /// Category name or ID
        category: String,
        /// Amount (anything that isn't a number counts as 0)
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Delete a category
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command<S: KeyValueStore>(
    manager: &mut BudgetManager<S>,
    settings: &Settings,
    cmd: CategoryCommands,
) -> BudgetResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!(
                "{}",
                format_category_table(&manager.view_model(), &settings.currency_symbol)
            );
        }

        CategoryCommands::Add { name } => {
            let before = manager.state().categories.len();
            let notification = manager.dispatch(Intent::AddCategory(name))?;
            report(notification);
            if manager.state().categories.len() > before {
                if let Some(category) = manager.state().categories.last() {
                    println!("  ID: {}", category.id);
                }
            }
        }

        CategoryCommands::Amount { category, amount } => {
            let Some(id) = resolve_category(manager, &category) else {
                return Ok(());
            };
            report(manager.dispatch(Intent::UpdateAmount { id, raw: amount })?);
            if let Some(category) = manager.state().category(id) {
                println!(
                    "{}: {}",
                    category.name,
                    format_amount(category.amount, &settings.currency_symbol)
                );
            }
        }

        CategoryCommands::Delete { category } => {
            let Some(id) = resolve_category(manager, &category) else {
                return Ok(());
            };
            report(manager.dispatch(Intent::DeleteCategory(id))?);
        }
    }

    Ok(())
}

/// Map a name or id to a category id.
///
/// A well-formed id that no longer exists is passed through so the manager can
/// ignore it. A name that matches nothing is reported as a warning.
fn resolve_category<S: KeyValueStore>(
    manager: &BudgetManager<S>,
    identifier: &str,
) -> Option<CategoryId> {
    if let Some(category) = manager.find_category(identifier) {
        return Some(category.id);
    }
    if let Ok(id) = CategoryId::parse(identifier) {
        return Some(id);
    }

    let err = BudgetError::category_not_found(identifier);
    warn!(error = %err, "category lookup failed");
    report(Some(Notification::warning(err.to_string())));
    None
}
