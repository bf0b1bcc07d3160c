//! Reset confirmation popup

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

/// Draw a yes/no question over the rest of the screen
pub fn render(frame: &mut Frame, question: &str) {
    let area = centered_rect_fixed(50, 6, frame.area());
    let warn = Style::default().fg(Color::Red);

    let body = vec![
        Line::from(question),
        Line::default(),
        Line::from(vec![
            Span::styled("y", warn.add_modifier(Modifier::BOLD)),
            Span::raw(" reset   "),
            Span::styled("n", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" keep"),
        ]),
    ];

    let popup = Paragraph::new(body).alignment(Alignment::Center).block(
        Block::default()
            .title(" Reset budget ")
            .borders(Borders::ALL)
            .border_style(warn),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
