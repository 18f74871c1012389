use tracing::debug;

use crate::selection::{DateRange, Selection};
use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::state::AppState;

/// Handle day clicks and the Clear button
///
/// Every handled action notifies the host with the resulting range, even when
/// it equals the previous one.
pub fn reduce_selection(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::SelectDate(date) => {
            let mut new_state = state;
            new_state.picker.selection = new_state.picker.selection.click(*date);
            let range = new_state.picker.range();
            debug!("SELECTION: clicked {} -> {}", date, range);
            Ok((new_state, Effect::RangeChanged(range)))
        }
        Action::ClearRange => {
            let mut new_state = state;
            new_state.picker.selection = Selection::Empty;
            debug!("SELECTION: cleared");
            Ok((new_state, Effect::RangeChanged(DateRange::EMPTY)))
        }
        _ => Err(state),
    }
}
