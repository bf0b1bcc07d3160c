//! Budget-wide CLI commands
//!
//! Income, recompute, reset and the summary view.

use crate::config::settings::Settings;
use crate::display::{format_category_table, format_ring, format_summary};
use crate::error::BudgetResult;
use crate::services::{BudgetManager, Intent};
use crate::storage::KeyValueStore;

use super::report;

/// Set the income
pub fn handle_income_command<S: KeyValueStore>(
    manager: &mut BudgetManager<S>,
    settings: &Settings,
    amount: String,
) -> BudgetResult<()> {
    report(manager.dispatch(Intent::SetIncome(amount))?);
    print!("{}", format_summary(&manager.view_model(), &settings.currency_symbol));
    Ok(())
}

/// Recompute and print the usage ring
pub fn handle_calc_command<S: KeyValueStore>(
    manager: &mut BudgetManager<S>,
    settings: &Settings,
) -> BudgetResult<()> {
    let notification = manager.dispatch(Intent::Recompute)?;
    let computed = manager.state().income > 0.0;
    report(notification);

    if computed {
        let vm = manager.view_model();
        println!();
        print!("{}", format_ring(&vm, &settings.currency_symbol));
        println!();
        print!("{}", format_summary(&vm, &settings.currency_symbol));
    }
    Ok(())
}

/// Wipe the stored budget
pub fn handle_reset_command<S: KeyValueStore>(manager: &mut BudgetManager<S>) -> BudgetResult<()> {
    report(manager.dispatch(Intent::Reset)?);
    Ok(())
}

/// Print the summary and category bars
pub fn handle_show_command<S: KeyValueStore>(
    manager: &BudgetManager<S>,
    settings: &Settings,
) -> BudgetResult<()> {
    let vm = manager.view_model();
    print!("{}", format_summary(&vm, &settings.currency_symbol));
    println!();
    print!("{}", format_category_table(&vm, &settings.currency_symbol));
    Ok(())
}
