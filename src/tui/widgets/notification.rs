//! Toast notification widget
//!
//! Paints the current [`Notification`] in the corner of the screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::models::{Notification, NotificationKind};

/// Get the color for a notification kind
pub fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Warning => Color::Yellow,
        NotificationKind::Danger => Color::Red,
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    /// Create a new notification widget
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }

    /// Area in the top-right corner of `screen` sized for the message
    pub fn area(&self, screen: Rect) -> Rect {
        let width = (self.notification.message.chars().count() as u16 + 4)
            .clamp(24, 50)
            .min(screen.width);
        let height = 3.min(screen.height);
        Rect::new(
            screen.x + screen.width.saturating_sub(width + 1),
            screen.y + 1,
            width,
            height,
        )
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = self.notification.kind;
        let color = kind_color(kind);

        Clear.render(area, buf);

        // Fade the border during the last quarter of the display time
        let mut border = Style::default().fg(color);
        if self.notification.remaining_fraction() < 0.25 {
            border = border.add_modifier(Modifier::DIM);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} {} ", kind.icon(), kind.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_colors() {
        assert_eq!(kind_color(NotificationKind::Success), Color::Green);
        assert_eq!(kind_color(NotificationKind::Warning), Color::Yellow);
        assert_eq!(kind_color(NotificationKind::Danger), Color::Red);
    }

    #[test]
    fn test_area_fits_screen() {
        let n = Notification::success("Saved");
        let widget = NotificationWidget::new(&n);
        let screen = Rect::new(0, 0, 80, 24);
        let area = widget.area(screen);

        assert_eq!(area.width, 24);
        assert_eq!(area.height, 3);
        assert!(area.right() <= screen.right());
    }

    #[test]
    fn test_renders_message() {
        let n = Notification::warning("Category already exists");
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        NotificationWidget::new(&n).render(area, &mut buf);

        let text: String = buf.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Category already exists"));
    }
}
