use tracing::debug;

use super::action::Action;
use super::component::Effect;
use super::state::AppState;

use crate::tui::reducers::{reduce_month_selector, reduce_scroll, reduce_selection};

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and optional effect.
/// This function is PURE - no side effects, no I/O, no clock reads.
/// All side effects are returned as `Effect` to be executed separately.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    // Day clicks and clearing
    let state = match reduce_selection(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    // Month list scrolling, settling, animation frames, resizes
    let state = match reduce_scroll(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    // Month selector sheet
    let state = match reduce_month_selector(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    match action {
        Action::Quit => (state, Effect::None),
        other => {
            debug!("REDUCER: unhandled action {:?}", other);
            (state, Effect::None)
        }
    }
}
