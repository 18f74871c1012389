use std::time::Instant;
use tracing::debug;

use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::layout::sheet_visible_rows;
use crate::tui::state::{AppState, SelectorState};
use crate::window::WINDOW_SIZE;

/// Handle the jump-to-month sheet
pub fn reduce_month_selector(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::OpenMonthSelector => Ok((open(state), Effect::None)),
        Action::CloseMonthSelector => {
            let mut new_state = state;
            new_state.selector.open = false;
            Ok((new_state, Effect::None))
        }
        Action::ScrollMonthSelector(delta) => Ok((scroll_sheet(state, *delta), Effect::None)),
        Action::SelectMonth { index, at } => Ok((select_month(state, *index, *at), Effect::None)),
        _ => Err(state),
    }
}

fn visible_rows(state: &AppState) -> usize {
    sheet_visible_rows(state.system.terminal_width, state.system.terminal_height)
}

/// Open the sheet scrolled so the current month sits mid-list
fn open(state: AppState) -> AppState {
    let mut new_state = state;
    let visible = visible_rows(&new_state);
    new_state.selector.open = true;
    new_state.selector.scroll_offset = new_state
        .picker
        .current_month
        .saturating_sub(visible / 2)
        .min(SelectorState::max_offset(visible));
    debug!(
        "SELECTOR: opened at row {} ({} visible)",
        new_state.selector.scroll_offset, visible
    );
    new_state
}

fn scroll_sheet(state: AppState, delta: i32) -> AppState {
    let mut new_state = state;
    if !new_state.selector.open {
        return new_state;
    }
    let max = SelectorState::max_offset(visible_rows(&new_state)) as i64;
    let offset = (new_state.selector.scroll_offset as i64 + delta as i64).clamp(0, max);
    new_state.selector.scroll_offset = offset as usize;
    new_state
}

/// Close the sheet and bring month `index` to the viewport center
fn select_month(state: AppState, index: usize, at: Instant) -> AppState {
    let mut new_state = state;
    if index >= WINDOW_SIZE {
        debug!("SELECTOR: month index {} out of range", index);
        return new_state;
    }

    new_state.selector.open = false;
    new_state.picker.current_month = index;
    new_state.scroll.tracker_mut().cancel();

    let duration = new_state.system.config.scroll.jump_duration();
    if duration.is_zero() {
        new_state.scroll.center_on(index);
    } else {
        new_state.scroll.animate_to(index, at, duration);
    }
    debug!("SELECTOR: jumping to month {}", index);
    new_state
}
