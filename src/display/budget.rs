//! Budget display formatting
//!
//! Formats the summary stats, the category bars and the progress ring for
//! terminal output.

use crate::models::{format_amount, Notification};
use crate::services::{Severity, ViewModel};

use super::format::{format_bar, format_percent, separator, truncate};

const BAR_WIDTH: usize = 20;
const RING_WIDTH: usize = 30;
const MAX_NAME_WIDTH: usize = 24;

/// Format the income / expenses / remaining / percent block
pub fn format_summary(vm: &ViewModel, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Income:    {}\n", format_amount(vm.income, symbol)));
    output.push_str(&format!(
        "Expenses:  {}\n",
        format_amount(vm.total_expenses, symbol)
    ));
    output.push_str(&format!(
        "Remaining: {}\n",
        format_amount(vm.remaining, symbol)
    ));
    output.push_str(&format!("Used:      {}\n", format_percent(vm.overall_percent)));

    output
}

/// Format the category list with a bar per category
pub fn format_category_table(vm: &ViewModel, symbol: &str) -> String {
    if vm.categories.is_empty() {
        return "No expenses yet.\n\nStart tracking with 'budget category add <name>'.\n"
            .to_string();
    }

    let name_width = vm
        .categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(8)
        .clamp(8, MAX_NAME_WIDTH);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:<bar$}  {:>7}  {}\n",
        "Category",
        "Amount",
        "Share",
        "%",
        "ID",
        width = name_width,
        bar = BAR_WIDTH
    ));
    output.push_str(&format!(
        "{}\n",
        separator(name_width + 12 + BAR_WIDTH + 7 + 8 + 16)
    ));

    for category in &vm.categories {
        output.push_str(&format!(
            "{:<width$}  {:>12}  {}  {:>7}  {}{}\n",
            truncate(&category.name, name_width),
            format_amount(category.amount, symbol),
            format_bar(category.percent, BAR_WIDTH),
            format_percent(category.percent),
            category.id,
            severity_marker(category.severity),
            width = name_width
        ));
    }

    output
}

/// Format the progress ring as a labelled bar
pub fn format_ring(vm: &ViewModel, symbol: &str) -> String {
    format!(
        "[{}] {}  {} remaining\n",
        format_bar(vm.ring_percent, RING_WIDTH),
        format_percent(vm.ring_percent),
        format_amount(vm.remaining, symbol)
    )
}

/// Format a notification as a single line
pub fn format_notification(notification: &Notification) -> String {
    format!(
        "[{}] {}",
        notification.kind.icon(),
        notification.message
    )
}

fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Normal => "",
        Severity::Warning => "  (warning)",
        Severity::Danger => "  (danger)",
    }
}
