//! TUI views
//!
//! Every view paints a slice of the same [`ViewModel`](crate::services::ViewModel);
//! none of them compute anything.

pub mod categories;
pub mod confirm;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use crate::storage::KeyValueStore;

use super::app::{App, InputMode};
use super::layout::AppLayout;
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>) {
    let layout = AppLayout::new(frame.area());
    let vm = app.manager.view_model();
    let symbol = app.settings.currency_symbol.as_str();

    summary::render(frame, &vm, symbol, layout.summary);
    summary::render_ring(frame, &vm, layout.ring);
    categories::render(frame, &vm, symbol, app.selected_index, layout.categories);
    status_bar::render(frame, app, layout.status_bar);

    if app.input_mode == InputMode::ConfirmReset {
        confirm::render(frame, "Delete the income and every category?");
    }

    if let Some(notification) = app.notifications.current() {
        let widget = NotificationWidget::new(notification);
        let area = widget.area(frame.area());
        frame.render_widget(widget, area);
    }
}
