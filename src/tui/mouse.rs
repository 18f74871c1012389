/// Mouse event to action mapping
///
/// Wheel events scroll whatever list is under the pointer, left clicks are
/// resolved through the hit test.
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::time::Instant;
use tracing::{debug, trace};

use super::action::Action;
use super::hit_test::{hit_test, HitTarget};
use super::layout::{screen_layout, sheet_layout};
use super::state::AppState;

/// Convert a mouse event to an action, `now` stamping scroll events
pub fn mouse_to_action(event: MouseEvent, state: &AppState, now: Instant) -> Option<Action> {
    let area = Rect::new(0, 0, state.system.terminal_width, state.system.terminal_height);
    let position = Position::new(event.column, event.row);

    match event.kind {
        MouseEventKind::ScrollUp => wheel(state, area, position, -1, now),
        MouseEventKind::ScrollDown => wheel(state, area, position, 1, now),
        MouseEventKind::Down(MouseButton::Left) => {
            let target = hit_test(state, area, event.column, event.row);
            trace!("MOUSE: click at ({}, {}) hit {:?}", event.column, event.row, target);
            click(target, now)
        }
        _ => None,
    }
}

fn wheel(state: &AppState, area: Rect, position: Position, direction: i32, now: Instant) -> Option<Action> {
    if state.selector.open {
        return sheet_layout(area)
            .rows
            .contains(position)
            .then_some(Action::ScrollMonthSelector(direction));
    }

    if !screen_layout(area).list.contains(position) {
        return None;
    }
    let delta = direction * state.system.config.scroll.wheel_lines as i32;
    Some(Action::Scroll { delta, at: now })
}

fn click(target: HitTarget, now: Instant) -> Option<Action> {
    match target {
        HitTarget::Day(date) => {
            debug!("MOUSE: day {} clicked", date);
            Some(Action::SelectDate(date))
        }
        HitTarget::ClearButton => Some(Action::ClearRange),
        HitTarget::MonthBadge => Some(Action::OpenMonthSelector),
        HitTarget::SheetRow(index) => Some(Action::SelectMonth { index, at: now }),
        HitTarget::SheetClose | HitTarget::Backdrop => Some(Action::CloseMonthSelector),
        HitTarget::SheetBody | HitTarget::Nothing => None,
    }
}
