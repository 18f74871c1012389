use chrono::NaiveDate;

use crate::config::Config;
use crate::scroll::ScrollView;
use crate::selection::{DateRange, Selection};
use crate::window::{MonthWindow, CENTER_INDEX, WINDOW_SIZE};

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
/// Components receive slices of this state as props.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Selection, month window and the month shown in the floating label
    pub picker: PickerState,

    /// Month list scroll position and layout
    pub scroll: ScrollView,

    /// Month selector sheet
    pub selector: SelectorState,

    /// System state
    pub system: SystemState,
}

impl AppState {
    pub fn new(config: Config, today: NaiveDate, initial_range: DateRange) -> Self {
        Self {
            picker: PickerState::new(today, initial_range),
            scroll: ScrollView::new(config.scroll.tracker()),
            selector: SelectorState::default(),
            system: SystemState {
                config,
                ..Default::default()
            },
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default(), crate::dates::today(), DateRange::EMPTY)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickerState {
    pub window: MonthWindow,
    /// Date shown as "today", fixed at mount
    pub today: NaiveDate,
    pub selection: Selection,
    /// Index into the window of the month nearest the viewport center
    pub current_month: usize,
}

impl PickerState {
    pub fn new(today: NaiveDate, initial_range: DateRange) -> Self {
        Self {
            window: MonthWindow::new(today),
            today,
            selection: Selection::from_range(initial_range),
            current_month: CENTER_INDEX,
        }
    }

    /// Snapshot of the selected range
    pub fn range(&self) -> DateRange {
        self.selection.range()
    }

    pub fn is_selecting(&self) -> bool {
        self.selection.is_selecting()
    }

    /// First day of the current month
    pub fn current_month_date(&self) -> NaiveDate {
        self.window
            .month(self.current_month)
            .unwrap_or_else(|| self.window.anchor())
    }
}

/// The jump-to-month sheet: open flag plus its own list scroll position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorState {
    pub open: bool,
    /// Index of the first month row shown in the sheet
    pub scroll_offset: usize,
}

impl SelectorState {
    /// Largest first-row index that still fills `visible_rows`
    pub fn max_offset(visible_rows: usize) -> usize {
        WINDOW_SIZE.saturating_sub(visible_rows)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    /// Terminal size, known after the first resize
    pub terminal_width: u16,
    pub terminal_height: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_state_starts_on_current_month() {
        let state = AppState::new(Config::default(), date(2026, 10, 16), DateRange::EMPTY);
        assert_eq!(state.picker.current_month, CENTER_INDEX);
        assert_eq!(state.picker.current_month_date(), date(2026, 10, 1));
        assert!(!state.scroll.is_mounted());
        assert!(!state.selector.open);
    }

    #[test]
    fn test_initial_range_seeds_selection() {
        let range = DateRange::new(Some(date(2026, 10, 3)), Some(date(2026, 10, 9)));
        let state = AppState::new(Config::default(), date(2026, 10, 16), range);
        assert_eq!(state.picker.range(), range);
        assert!(!state.picker.is_selecting());
    }

    #[test]
    fn test_tracker_uses_configured_intervals() {
        let mut config = Config::default();
        config.scroll.settle_ms = 250;
        let state = AppState::new(config, date(2026, 10, 16), DateRange::EMPTY);
        assert_eq!(state.scroll.tracker().settle_delay().as_millis(), 250);
    }
}
