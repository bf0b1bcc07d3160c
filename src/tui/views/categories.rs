//! Category list view
//!
//! One row per category with its amount and a bar colored by severity.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::display::{format_bar, format_percent, truncate};
use crate::models::format_amount;
use crate::services::{Severity, ViewModel};

const NAME_WIDTH: usize = 20;
const BAR_WIDTH: usize = 20;

/// Color for a category's severity
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Normal => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Danger => Color::Red,
    }
}

/// Render the category list
pub fn render(frame: &mut Frame, vm: &ViewModel, symbol: &str, selected: usize, area: Rect) {
    let block = Block::default()
        .title(" Expenses ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL);

    if vm.categories.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled(
                "No expenses yet",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("Start tracking by adding a category with 'a'"),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = vm
        .categories
        .iter()
        .map(|category| {
            let color = severity_color(category.severity);
            ListItem::new(Line::from(vec![
                Span::raw(format!(
                    "{:<width$} ",
                    truncate(&category.name, NAME_WIDTH),
                    width = NAME_WIDTH
                )),
                Span::styled(
                    format!("{:>12} ", format_amount(category.amount, symbol)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(format_bar(category.percent, BAR_WIDTH), Style::default().fg(color)),
                Span::styled(
                    format!(" {:>7}", format_percent(category.percent)),
                    Style::default().fg(color),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}
