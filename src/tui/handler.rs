//! Event handler for the TUI
//!
//! Routes key events to intents based on the current input mode.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::services::Intent;
use crate::storage::KeyValueStore;

use super::app::{App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event<S: KeyValueStore>(app: &mut App<'_, S>, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::ConfirmReset => handle_confirm_key(app, key),
        InputMode::Income | InputMode::NewCategory | InputMode::Amount(_) => {
            handle_editing_key(app, key)
        }
    }
}

/// Handle keys in normal mode
fn handle_normal_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char('i') => app.start_input(InputMode::Income),
        KeyCode::Char('a') => app.start_input(InputMode::NewCategory),
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = app.selected_category() {
                app.start_input(InputMode::Amount(id));
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_category() {
                app.apply(Intent::DeleteCategory(id));
            }
        }
        KeyCode::Char('c') => app.apply(Intent::Recompute),
        KeyCode::Char('R') => app.input_mode = InputMode::ConfirmReset,

        _ => {}
    }
    Ok(())
}

/// Handle keys while the reset confirmation is showing
fn handle_confirm_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.input_mode = InputMode::Normal;
            app.apply(Intent::Reset);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        _ => {}
    }
    Ok(())
}

/// Handle keys while typing into the line editor
fn handle_editing_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_start(),
        KeyCode::End => app.input.move_end(),
        KeyCode::Char(c) => app.input.insert(c),
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::error::{BudgetError, BudgetResult};
    use crate::models::NotificationKind;
    use crate::services::BudgetManager;
    use crate::storage::MemoryStore;

    /// Store that can be read but never written
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> BudgetResult<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: String) -> BudgetResult<()> {
            Err(BudgetError::Storage("disk full".into()))
        }

        fn remove(&mut self, _key: &str) -> BudgetResult<()> {
            Err(BudgetError::Storage("disk full".into()))
        }
    }

    fn press<S: KeyValueStore>(app: &mut App<'_, S>, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_line<S: KeyValueStore>(app: &mut App<'_, S>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn new_app(settings: &Settings) -> App<'_, MemoryStore> {
        App::new(
            BudgetManager::load(MemoryStore::new(), "expenseData").unwrap(),
            settings,
        )
    }

    #[test]
    fn test_keyboard_budget_session() {
        let settings = Settings::default();
        let mut app = new_app(&settings);

        press(&mut app, KeyCode::Char('i'));
        type_line(&mut app, "1000");
        press(&mut app, KeyCode::Char('a'));
        type_line(&mut app, "Rent");
        press(&mut app, KeyCode::Char('e'));
        type_line(&mut app, "600");
        press(&mut app, KeyCode::Char('c'));

        let vm = app.manager.view_model();
        assert_eq!(vm.income, 1000.0);
        assert_eq!(vm.categories[0].name, "Rent");
        assert_eq!(vm.categories[0].amount, 600.0);
        assert_eq!(vm.ring_percent, 60.0);
    }

    #[test]
    fn test_escape_cancels_input() {
        let settings = Settings::default();
        let mut app = new_app(&settings);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('X'));
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.manager.state().categories.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_reset_needs_confirmation() {
        let settings = Settings::default();
        let mut app = new_app(&settings);
        press(&mut app, KeyCode::Char('a'));
        type_line(&mut app, "Food");

        press(&mut app, KeyCode::Char('R'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.manager.state().categories.len(), 1);

        press(&mut app, KeyCode::Char('R'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.manager.state().categories.is_empty());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_quit_keys() {
        let settings = Settings::default();
        let mut app = new_app(&settings);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = new_app(&settings);
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_delete_selected_category() {
        let settings = Settings::default();
        let mut app = new_app(&settings);
        press(&mut app, KeyCode::Char('a'));
        type_line(&mut app, "Food");

        press(&mut app, KeyCode::Char('d'));
        assert!(app.manager.state().categories.is_empty());
    }

    #[test]
    fn test_store_failure_keeps_session_running() {
        let settings = Settings::default();
        let manager = BudgetManager::load(ReadOnlyStore, "expenseData").unwrap();
        let mut app = App::new(manager, &settings);

        press(&mut app, KeyCode::Char('i'));
        type_line(&mut app, "1000");

        assert!(!app.should_quit);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.manager.state().income, 0.0);
        let shown = app.notifications.current().unwrap();
        assert_eq!(shown.kind, NotificationKind::Danger);
        assert!(shown.message.contains("disk full"));

        press(&mut app, KeyCode::Char('R'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.notifications.len(), 2);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
