//! Status bar view
//!
//! Shows the line editor while typing, key hints otherwise.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::{App, InputMode};

const HINTS: &[(&str, &str)] = &[
    ("i", "income"),
    ("a", "add"),
    ("e", "amount"),
    ("d", "delete"),
    ("c", "calculate"),
    ("R", "reset"),
    ("q", "quit"),
];

/// Render the status bar
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let block = Block::default().borders(Borders::ALL);

    match app.input_mode {
        InputMode::Income | InputMode::NewCategory | InputMode::Amount(_) => {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(app.input.clone(), inner);
        }
        InputMode::Normal | InputMode::ConfirmReset => {
            let mut spans = Vec::with_capacity(HINTS.len() * 2);
            for (key, action) in HINTS {
                spans.push(Span::styled(format!(" {}", key), Style::default().fg(Color::Cyan)));
                spans.push(Span::styled(format!(" {} ", action), Style::default().fg(Color::Gray)));
            }
            frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
        }
    }
}
