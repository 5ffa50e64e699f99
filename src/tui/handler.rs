//! Event handler for the TUI
//!
//! Routes keyboard events to state changes based on the current view. Key
//! handling never blocks: anything that needs the API comes back as a
//! [`Command`] for the event loop to run.

use crossterm::event::{KeyEvent, KeyEventKind};
use tracing::debug;

use super::app::{App, Command, ViewState};
use super::event::Event;
use super::keybindings::{lookup, KeyAction, KeyContext};
use super::navigation::NavEvent;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Option<Command> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Tick => {
            app.tick();
            None
        }
        Event::Resize(_, _) => None,
    }
}

/// Handle a key event
///
/// Only quitting is honoured while loading or while a command is in flight.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let context = match app.view {
        ViewState::Ready(_) => KeyContext::List,
        ViewState::Failed(_) => KeyContext::Error,
        ViewState::Loading => KeyContext::Global,
    };
    let action = lookup(context, &key)?;

    if app.busy.is_some() && action != KeyAction::Quit {
        return None;
    }

    debug!(?action, "Key action");

    match action {
        KeyAction::Quit => {
            app.quit();
            None
        }
        KeyAction::MoveUp => navigate(app, NavEvent::MoveUp),
        KeyAction::MoveDown => navigate(app, NavEvent::MoveDown),
        KeyAction::MoveFirst => navigate(app, NavEvent::MoveFirst),
        KeyAction::MoveLast => navigate(app, NavEvent::MoveLast),
        KeyAction::Clear => app.selected().map(|t| Command::Clear(t.id.clone())),
        KeyAction::Refresh => Some(Command::Refresh),
    }
}

fn navigate(app: &mut App, event: NavEvent) -> Option<Command> {
    app.navigate(event);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::RowLayout;
    use crate::error::ReviewError;
    use crate::models::{BudgetId, TransactionId};
    use crate::tui::app::tests::{ready_app, txn};
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn three() -> App {
        ready_app(vec![
            txn("1", "Coffee Shop", -4500),
            txn("2", "Supermarket", -32100),
            txn("3", "Gas Station", -6500),
        ])
    }

    fn cursor(app: &App) -> Option<usize> {
        app.navigation().and_then(|nav| nav.cursor())
    }

    #[test]
    fn test_arrow_and_vim_keys_move_cursor() {
        let mut app = three();

        handle_key(&mut app, press(KeyCode::Down));
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(cursor(&app), Some(2));

        handle_key(&mut app, press(KeyCode::Up));
        assert_eq!(cursor(&app), Some(1));
        handle_key(&mut app, press(KeyCode::Char('k')));
        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(cursor(&app), Some(0));
    }

    #[test]
    fn test_jump_keys() {
        let mut app = three();

        handle_key(&mut app, press(KeyCode::End));
        assert_eq!(cursor(&app), Some(2));
        handle_key(&mut app, press(KeyCode::Char('g')));
        assert_eq!(cursor(&app), Some(0));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert_eq!(cursor(&app), Some(2));
        handle_key(&mut app, press(KeyCode::Home));
        assert_eq!(cursor(&app), Some(0));
    }

    #[test]
    fn test_clear_targets_selected() {
        let mut app = three();
        handle_key(&mut app, press(KeyCode::Down));

        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char('c'))),
            Some(Command::Clear(TransactionId::new("2")))
        );
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Enter)),
            Some(Command::Clear(TransactionId::new("2")))
        );
    }

    #[test]
    fn test_clear_on_empty_list_does_nothing() {
        let mut app = ready_app(Vec::new());
        assert_eq!(handle_key(&mut app, press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_refresh() {
        let mut app = three();
        assert_eq!(handle_key(&mut app, press(KeyCode::Char('r'))), Some(Command::Refresh));
    }

    #[test]
    fn test_quit_keys() {
        for key in [
            press(KeyCode::Char('q')),
            press(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = three();
            assert_eq!(handle_key(&mut app, key), None);
            assert!(app.should_quit);
        }
    }

    #[test]
    fn test_loading_ignores_everything_but_quit() {
        let mut app = App::new(BudgetId::new("b"), RowLayout::default());

        assert_eq!(handle_key(&mut app, press(KeyCode::Char('r'))), None);
        assert_eq!(handle_key(&mut app, press(KeyCode::Down)), None);
        assert!(!app.should_quit);

        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_busy_blocks_navigation() {
        let mut app = three();
        app.begin(&Command::Refresh);

        handle_key(&mut app, press(KeyCode::Down));
        assert_eq!(cursor(&app), Some(0));
        assert_eq!(handle_key(&mut app, press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_error_view_allows_retry() {
        let mut app = App::new(BudgetId::new("b"), RowLayout::default());
        app.finish_load(Err(ReviewError::fetch_failed("down")));

        assert_eq!(handle_key(&mut app, press(KeyCode::Down)), None);
        assert_eq!(handle_key(&mut app, press(KeyCode::Char('r'))), Some(Command::Refresh));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = three();
        let release = KeyEvent {
            code: KeyCode::Down,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        handle_key(&mut app, release);
        assert_eq!(cursor(&app), Some(0));
    }

    #[test]
    fn test_resize_is_noop() {
        let mut app = three();
        assert_eq!(handle_event(&mut app, Event::Resize(80, 24)), None);
        assert_eq!(cursor(&app), Some(0));
    }
}
