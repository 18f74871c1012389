/// Keyboard event to action mapping
///
/// Keys only stand in for pointer gestures: wheel scrolling, the badge and
/// sheet controls, and the Clear button. Picking a day still takes a click.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;
use tracing::debug;

use super::action::Action;
use super::state::AppState;
use crate::window::CENTER_INDEX;

/// Rows moved by PageUp/PageDown in the month sheet
const SHEET_PAGE: i32 = 5;

/// Handle keys that work regardless of what is on screen
fn handle_global_keys(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

/// Keys while the month sheet is open
fn handle_sheet_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Esc | KeyCode::Char('m') => Some(Action::CloseMonthSelector),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollMonthSelector(-1)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollMonthSelector(1)),
        KeyCode::PageUp => Some(Action::ScrollMonthSelector(-SHEET_PAGE)),
        KeyCode::PageDown => Some(Action::ScrollMonthSelector(SHEET_PAGE)),
        _ => None,
    }
}

/// Keys for the month list
fn handle_list_keys(state: &AppState, key_code: KeyCode, now: Instant) -> Option<Action> {
    let page = (state.scroll.viewport_height() / 2).max(1) as i32;
    match key_code {
        KeyCode::Char('m') => Some(Action::OpenMonthSelector),
        KeyCode::Char('c') => Some(Action::ClearRange),
        KeyCode::Char('t') => Some(Action::SelectMonth { index: CENTER_INDEX, at: now }),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Scroll { delta: -1, at: now }),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Scroll { delta: 1, at: now }),
        KeyCode::PageUp => Some(Action::Scroll { delta: -page, at: now }),
        KeyCode::PageDown => Some(Action::Scroll { delta: page, at: now }),
        _ => None,
    }
}

/// Convert a key event to an action, `now` stamping scroll events
pub fn key_to_action(key: KeyEvent, state: &AppState, now: Instant) -> Option<Action> {
    debug!("KEY: {:?} (sheet open: {})", key.code, state.selector.open);

    if let Some(action) = handle_global_keys(&key) {
        return Some(action);
    }

    if state.selector.open {
        return handle_sheet_keys(key.code);
    }

    handle_list_keys(state, key.code, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::selection::DateRange;
    use crate::window::MonthWindow;
    use chrono::NaiveDate;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state() -> AppState {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let mut state = AppState::new(Config::default(), today, DateRange::EMPTY);
        state.scroll.mount(&MonthWindow::new(today), 20);
        state
    }

    #[test]
    fn test_quit_keys() {
        let state = state();
        let now = Instant::now();
        assert_eq!(key_to_action(key(KeyCode::Char('q')), &state, now), Some(Action::Quit));
        assert_eq!(
            key_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &state, now),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_list_keys() {
        let state = state();
        let now = Instant::now();
        assert_eq!(key_to_action(key(KeyCode::Char('c')), &state, now), Some(Action::ClearRange));
        assert_eq!(
            key_to_action(key(KeyCode::Char('m')), &state, now),
            Some(Action::OpenMonthSelector)
        );
        assert_eq!(
            key_to_action(key(KeyCode::Down), &state, now),
            Some(Action::Scroll { delta: 1, at: now })
        );
        assert_eq!(
            key_to_action(key(KeyCode::PageUp), &state, now),
            Some(Action::Scroll { delta: -10, at: now })
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char('t')), &state, now),
            Some(Action::SelectMonth { index: CENTER_INDEX, at: now })
        );
    }

    #[test]
    fn test_sheet_keys_take_priority() {
        let mut state = state();
        state.selector.open = true;
        let now = Instant::now();
        assert_eq!(
            key_to_action(key(KeyCode::Esc), &state, now),
            Some(Action::CloseMonthSelector)
        );
        assert_eq!(
            key_to_action(key(KeyCode::Down), &state, now),
            Some(Action::ScrollMonthSelector(1))
        );
        assert_eq!(
            key_to_action(key(KeyCode::PageUp), &state, now),
            Some(Action::ScrollMonthSelector(-SHEET_PAGE))
        );
        assert_eq!(key_to_action(key(KeyCode::Char('c')), &state, now), None);
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(key_to_action(key(KeyCode::Char('x')), &state(), Instant::now()), None);
    }
}
