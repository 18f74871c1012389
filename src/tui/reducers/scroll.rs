use std::time::Instant;
use tracing::{debug, trace};

use crate::scroll::ScrollGate;
use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::layout::{list_viewport_height, sheet_visible_rows};
use crate::tui::state::{AppState, SelectorState};

/// Handle terminal resizes, list scrolling, settling and animation frames
pub fn reduce_scroll(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::Resize { width, height } => Ok(resize(state, *width, *height)),
        Action::Scroll { delta, at } => Ok(scroll(state, *delta, *at)),
        Action::ScrollSettled(token) => {
            let mut new_state = state;
            if !new_state.scroll.tracker_mut().settle(*token) {
                trace!("SCROLL: stale settle {:?} ignored", token);
                return Ok((new_state, Effect::None));
            }
            Ok((settle(new_state), Effect::None))
        }
        Action::Tick(now) => Ok(tick(state, *now)),
        _ => Err(state),
    }
}

/// The first resize mounts the list centered on the current month; later
/// ones keep that month centered in the new viewport
fn resize(state: AppState, width: u16, height: u16) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.system.terminal_width = width;
    new_state.system.terminal_height = height;

    let viewport = list_viewport_height(width, height);
    if new_state.scroll.is_mounted() {
        new_state.scroll.set_viewport_height(viewport);
    } else {
        debug!("SCROLL: mounting list with viewport {}", viewport);
        new_state.scroll.mount(&new_state.picker.window, viewport);
    }
    new_state.scroll.center_on(new_state.picker.current_month);

    let max = SelectorState::max_offset(sheet_visible_rows(width, height));
    new_state.selector.scroll_offset = new_state.selector.scroll_offset.min(max);

    (new_state, Effect::None)
}

fn scroll(state: AppState, delta: i32, at: Instant) -> (AppState, Effect) {
    let mut new_state = state;
    if !new_state.scroll.is_mounted() || !new_state.scroll.scroll_by(delta) {
        return (new_state, Effect::None);
    }
    trace!("SCROLL: offset {}", new_state.scroll.offset());
    let effect = track(&mut new_state, at);
    (new_state, effect)
}

fn tick(state: AppState, now: Instant) -> (AppState, Effect) {
    let mut new_state = state;
    if !new_state.scroll.advance(now) {
        return (new_state, Effect::None);
    }
    let effect = track(&mut new_state, now);
    (new_state, effect)
}

/// Feed a viewport movement to the tracker, scheduling a settle if accepted
fn track(state: &mut AppState, at: Instant) -> Effect {
    match state.scroll.tracker_mut().on_scroll(at) {
        ScrollGate::Throttled => Effect::None,
        ScrollGate::Schedule { token, delay } => Effect::Delay {
            after: delay,
            action: Action::ScrollSettled(token),
        },
    }
}

/// Recompute the month nearest the viewport center
fn settle(state: AppState) -> AppState {
    let mut new_state = state;
    let Some(index) = new_state.scroll.centered_month() else {
        return new_state;
    };

    if index != new_state.picker.current_month {
        debug!(
            "SCROLL: current month {} -> {}",
            new_state.picker.current_month, index
        );
        new_state.picker.current_month = index;
    }

    if new_state.system.config.scroll.snap && !new_state.scroll.is_animating() {
        new_state.scroll.center_on(index);
    }
    new_state
}
