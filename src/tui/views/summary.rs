//! Summary and ring views

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::display::format_percent;
use crate::models::format_amount;
use crate::services::ViewModel;

/// Render the income / expenses / remaining block
pub fn render(frame: &mut Frame, vm: &ViewModel, symbol: &str, area: Rect) {
    let remaining_color = if vm.remaining < 0.0 {
        Color::Red
    } else {
        Color::Green
    };

    let row = |label: &'static str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!("{:<11}", label), Style::default().fg(Color::White)),
            Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ])
    };

    let lines = vec![
        row("Income", format_amount(vm.income, symbol), Color::Cyan),
        row("Expenses", format_amount(vm.total_expenses, symbol), Color::Yellow),
        row("Remaining", format_amount(vm.remaining, symbol), remaining_color),
        row("Used", format_percent(vm.overall_percent), Color::White),
    ];

    let block = Block::default()
        .title(" Budget ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the progress ring as a gauge
pub fn render_ring(frame: &mut Frame, vm: &ViewModel, area: Rect) {
    let color = if vm.ring_percent >= 100.0 {
        Color::Red
    } else {
        Color::Green
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Usage ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(vm.ring_percent / 100.0)
        .label(format_percent(vm.ring_percent));

    frame.render_widget(gauge, area);
}
