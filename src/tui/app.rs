//! Application state for the TUI
//!
//! The App struct holds the budget manager plus everything needed for
//! rendering and handling key events.

use std::time::Duration;

use tracing::warn;

use crate::config::settings::Settings;
use crate::models::{CategoryId, Notification, NotificationQueue};
use crate::services::{BudgetManager, Intent};
use crate::storage::KeyValueStore;

use super::widgets::TextInput;

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing a new income figure
    Income,
    /// Typing the name of a new category
    NewCategory,
    /// Typing an amount for a category
    Amount(CategoryId),
    /// Waiting for y/n before wiping all data
    ConfirmReset,
}

/// Main application state
pub struct App<'a, S: KeyValueStore> {
    /// The budget being edited
    pub manager: BudgetManager<S>,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current input mode
    pub input_mode: InputMode,

    /// Line editor used by every input mode
    pub input: TextInput,

    /// Selected category index
    pub selected_index: usize,

    /// Toasts waiting to expire
    pub notifications: NotificationQueue,
}

impl<'a, S: KeyValueStore> App<'a, S> {
    /// Create a new App instance
    pub fn new(manager: BudgetManager<S>, settings: &'a Settings) -> Self {
        Self {
            manager,
            settings,
            should_quit: false,
            input_mode: InputMode::default(),
            input: TextInput::new(),
            selected_index: 0,
            notifications: NotificationQueue::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Number of categories in the list
    pub fn category_count(&self) -> usize {
        self.manager.state().categories.len()
    }

    /// Id of the highlighted category
    pub fn selected_category(&self) -> Option<CategoryId> {
        self.manager
            .state()
            .categories
            .get(self.selected_index)
            .map(|c| c.id)
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.category_count() {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Switch to an input mode, pre-filling the line editor
    pub fn start_input(&mut self, mode: InputMode) {
        let prefill = match mode {
            InputMode::Income if self.manager.state().income > 0.0 => {
                self.manager.state().income.to_string()
            }
            InputMode::Amount(id) => self
                .manager
                .state()
                .category(id)
                .filter(|c| c.amount > 0.0)
                .map(|c| c.amount.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        };

        self.input = TextInput::new()
            .label(input_label(mode))
            .content(prefill)
            .focused(true);
        self.input_mode = mode;
    }

    /// Leave input mode without applying anything
    pub fn cancel_input(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Apply what was typed in the current input mode
    pub fn submit_input(&mut self) {
        let raw = self.input.value().to_string();
        let intent = match self.input_mode {
            InputMode::Income => Some(Intent::SetIncome(raw)),
            InputMode::NewCategory => Some(Intent::AddCategory(raw)),
            InputMode::Amount(id) => Some(Intent::UpdateAmount { id, raw }),
            InputMode::Normal | InputMode::ConfirmReset => None,
        };
        self.cancel_input();

        if let Some(intent) = intent {
            self.apply(intent);
        }
    }

    /// Dispatch an intent and queue the resulting notification.
    ///
    /// A store failure leaves the budget unchanged and is shown as a danger
    /// toast; the session keeps running.
    pub fn apply(&mut self, intent: Intent) {
        let added = matches!(intent, Intent::AddCategory(_));
        let before = self.category_count();

        match self.manager.dispatch(intent) {
            Ok(Some(notification)) => self.notify(notification),
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "intent failed");
                self.notify(Notification::danger(e.to_string()));
            }
        }

        // Follow a freshly added category
        if added && self.category_count() > before {
            self.selected_index = self.category_count() - 1;
        }
        self.clamp_selection();
    }

    /// Queue a notification using the configured display time
    pub fn notify(&mut self, notification: Notification) {
        let duration = Duration::from_secs(self.settings.notification_secs);
        self.notifications.push(notification.with_duration(duration));
    }

    /// Drop expired notifications
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }

    fn clamp_selection(&mut self) {
        let count = self.category_count();
        if count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }
}

fn input_label(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Income => "Income",
        InputMode::NewCategory => "New category",
        InputMode::Amount(_) => "Amount",
        InputMode::Normal | InputMode::ConfirmReset => "",
    }
}
