use chrono::NaiveDate;
use std::time::Instant;

use crate::scroll::SettleToken;

/// Global actions - like Redux actions
///
/// All state changes in the picker happen through actions.
/// Actions are dispatched from:
/// - User input (mouse and key events)
/// - Effects (delayed scroll settling)
/// - The event loop (animation ticks, terminal resizes)
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Selection actions
    /// A day cell was clicked
    SelectDate(NaiveDate),
    /// Reset the range to empty
    ClearRange,

    // Month list scrolling
    /// The list was scrolled by `delta` rows at instant `at`
    Scroll { delta: i32, at: Instant },
    /// A delayed centering computation came due
    ScrollSettled(SettleToken),
    /// Animation frame
    Tick(Instant),

    // Month selector sheet
    OpenMonthSelector,
    CloseMonthSelector,
    /// Scroll the sheet's own list by `delta` rows
    ScrollMonthSelector(i32),
    /// Jump to month `index` of the window
    SelectMonth { index: usize, at: Instant },

    // System actions
    Resize { width: u16, height: u16 },
    Quit,
}
