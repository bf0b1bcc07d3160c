//! Layout definitions for the TUI
//!
//! Stacks the summary, the usage ring, the category list and the input line
//! vertically.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Income / expenses / remaining block
    pub summary: Rect,
    /// Progress ring gauge
    pub ring: Rect,
    /// Category list
    pub categories: Rect,
    /// Input line or key hints
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Summary
                Constraint::Length(3), // Ring
                Constraint::Min(3),    // Categories
                Constraint::Length(3), // Status bar
            ])
            .split(area);

        Self {
            summary: chunks[0],
            ring: chunks[1],
            categories: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let area = Rect::new(0, 0, 80, 30);
        let layout = AppLayout::new(area);

        assert_eq!(layout.summary.height, 6);
        assert_eq!(layout.ring.height, 3);
        assert_eq!(layout.status_bar.height, 3);
        assert_eq!(layout.categories.height, 30 - 12);
    }

    #[test]
    fn test_centered_rect_fixed() {
        let area = Rect::new(0, 0, 100, 50);
        let centered = centered_rect_fixed(50, 10, area);
        assert_eq!(centered, Rect::new(25, 20, 50, 10));

        let small = centered_rect_fixed(50, 10, Rect::new(0, 0, 20, 5));
        assert_eq!(small.width, 20);
        assert_eq!(small.height, 5);
    }
}
