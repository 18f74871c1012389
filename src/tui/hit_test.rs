//! Resolve a terminal cell to the UI element drawn there

use chrono::{Datelike, NaiveDate};
use ratatui::layout::{Position, Rect};

use super::layout::{
    badge_area, clear_button_area, grid_x, screen_layout, sheet_layout, CELL_WIDTH, GRID_WIDTH,
};
use super::state::AppState;
use crate::dates::{format_month_year, start_weekday, DAYS_PER_WEEK};
use crate::scroll::layout::FIRST_WEEK_ROW;
use crate::window::WINDOW_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A day cell of the month list
    Day(NaiveDate),
    ClearButton,
    /// The floating month label
    MonthBadge,
    /// Month row `index` of the selector sheet
    SheetRow(usize),
    SheetClose,
    /// Inside the sheet but not on a control
    SheetBody,
    /// The dimmed area around the open sheet
    Backdrop,
    Nothing,
}

/// What lies under `(column, row)` of a terminal covering `area`
pub fn hit_test(state: &AppState, area: Rect, column: u16, row: u16) -> HitTarget {
    let position = Position::new(column, row);

    if state.selector.open {
        return hit_test_sheet(state, area, position);
    }

    let screen = screen_layout(area);

    if !state.picker.range().is_empty() && clear_button_area(screen.header).contains(position) {
        return HitTarget::ClearButton;
    }

    if screen.list.contains(position) {
        let label = format_month_year(state.picker.current_month_date());
        if badge_area(screen.list, &label).contains(position) {
            return HitTarget::MonthBadge;
        }
        if let Some(day) = day_at(state, screen.list, position) {
            return HitTarget::Day(day);
        }
    }

    HitTarget::Nothing
}

fn hit_test_sheet(state: &AppState, area: Rect, position: Position) -> HitTarget {
    let sheet = sheet_layout(area);

    if !sheet.sheet.contains(position) {
        return HitTarget::Backdrop;
    }
    if sheet.close.contains(position) {
        return HitTarget::SheetClose;
    }
    if sheet.rows.contains(position) {
        let index = state.selector.scroll_offset + (position.y - sheet.rows.y) as usize;
        if index < WINDOW_SIZE {
            return HitTarget::SheetRow(index);
        }
    }
    HitTarget::SheetBody
}

/// Day drawn at `position` inside the month list
fn day_at(state: &AppState, list: Rect, position: Position) -> Option<NaiveDate> {
    let (index, extent, section_row) = state.scroll.month_at_viewport_row(position.y - list.y)?;

    let week = section_row.checked_sub(FIRST_WEEK_ROW)?;
    if week >= extent.week_rows() {
        return None;
    }

    let left = grid_x(list);
    if position.x < left || position.x >= left + GRID_WIDTH {
        return None;
    }
    let column = ((position.x - left) / CELL_WIDTH) as usize;

    let month = state.picker.window.month(index)?;
    let cell = week as usize * DAYS_PER_WEEK + column;
    let day = cell.checked_sub(start_weekday(month))? + 1;
    month.with_day(day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::scroll::layout::MonthExtent;
    use crate::selection::DateRange;
    use crate::window::CENTER_INDEX;

    const WIDTH: u16 = 40;
    const HEIGHT: u16 = 30;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn area() -> Rect {
        Rect::new(0, 0, WIDTH, HEIGHT)
    }

    /// State with the list scrolled so the top of the current month
    /// (October 2026) is the first list row
    fn state_at_current_month_top(range: DateRange) -> AppState {
        let mut state = AppState::new(Config::default(), date(2026, 10, 16), range);
        let viewport = screen_layout(area()).list.height;
        state.scroll.mount(&state.picker.window, viewport);
        let top = state.scroll.layout().get(CENTER_INDEX).unwrap().top;
        state.scroll.scroll_by(top as i32);
        state
    }

    #[test]
    fn test_day_cells() {
        let state = state_at_current_month_top(DateRange::EMPTY);
        let list = screen_layout(area()).list;
        let left = grid_x(list);
        // October 2026 starts on a Thursday (column 4)
        let first_week = list.y + FIRST_WEEK_ROW;
        assert_eq!(
            hit_test(&state, area(), left + 4 * CELL_WIDTH, first_week),
            HitTarget::Day(date(2026, 10, 1))
        );
        assert_eq!(
            hit_test(&state, area(), left + 4 * CELL_WIDTH + 3, first_week),
            HitTarget::Day(date(2026, 10, 1))
        );
        assert_eq!(
            hit_test(&state, area(), left, first_week + 1),
            HitTarget::Day(date(2026, 10, 4))
        );
    }

    #[test]
    fn test_blank_and_chrome_cells_hit_nothing() {
        let state = state_at_current_month_top(DateRange::EMPTY);
        let list = screen_layout(area()).list;
        let left = grid_x(list);
        let first_week = list.y + FIRST_WEEK_ROW;
        // leading blank
        assert_eq!(hit_test(&state, area(), left, first_week), HitTarget::Nothing);
        // title and weekday rows
        assert_eq!(hit_test(&state, area(), left + 4, list.y), HitTarget::Nothing);
        assert_eq!(hit_test(&state, area(), left + 4, list.y + 1), HitTarget::Nothing);
        // left of the grid
        assert_eq!(hit_test(&state, area(), left - 1, first_week + 1), HitTarget::Nothing);
    }

    #[test]
    fn test_trailing_blank_after_last_day() {
        let state = state_at_current_month_top(DateRange::EMPTY);
        let list = screen_layout(area()).list;
        let left = grid_x(list);
        let extent: MonthExtent = state.scroll.layout().get(CENTER_INDEX).unwrap();
        // October 31, 2026 is a Saturday: the last week ends exactly on it
        let last_week = list.y + FIRST_WEEK_ROW + extent.week_rows() - 1;
        assert_eq!(
            hit_test(&state, area(), left + 6 * CELL_WIDTH, last_week),
            HitTarget::Day(date(2026, 10, 31))
        );
        // the spacer row below the grid
        assert_eq!(
            hit_test(&state, area(), left + 6 * CELL_WIDTH, last_week + 1),
            HitTarget::Nothing
        );
    }

    #[test]
    fn test_clear_button_only_with_range() {
        let header = screen_layout(area()).header;
        let button = clear_button_area(header);

        let empty = state_at_current_month_top(DateRange::EMPTY);
        assert_eq!(hit_test(&empty, area(), button.x, button.y), HitTarget::Nothing);

        let selected = state_at_current_month_top(DateRange::new(Some(date(2026, 10, 2)), None));
        assert_eq!(hit_test(&selected, area(), button.x, button.y), HitTarget::ClearButton);
    }

    #[test]
    fn test_badge() {
        let state = state_at_current_month_top(DateRange::EMPTY);
        let list = screen_layout(area()).list;
        let badge = badge_area(list, "October 2026");
        assert_eq!(hit_test(&state, area(), badge.x + 1, badge.y), HitTarget::MonthBadge);
    }

    #[test]
    fn test_sheet_targets() {
        let mut state = state_at_current_month_top(DateRange::EMPTY);
        state.selector.open = true;
        state.selector.scroll_offset = 5;
        let sheet = sheet_layout(area());

        assert_eq!(hit_test(&state, area(), 0, 0), HitTarget::Backdrop);
        assert_eq!(hit_test(&state, area(), sheet.close.x, sheet.close.y), HitTarget::SheetClose);
        assert_eq!(hit_test(&state, area(), sheet.title.x, sheet.title.y), HitTarget::SheetBody);
        assert_eq!(hit_test(&state, area(), sheet.rows.x, sheet.rows.y), HitTarget::SheetRow(5));
        assert_eq!(
            hit_test(&state, area(), sheet.rows.x, sheet.rows.y + 2),
            HitTarget::SheetRow(7)
        );
    }

    #[test]
    fn test_unmounted_list_hits_nothing() {
        let state = AppState::new(Config::default(), date(2026, 10, 16), DateRange::EMPTY);
        let list = screen_layout(area()).list;
        assert_eq!(hit_test(&state, area(), grid_x(list) + 8, list.y + 3), HitTarget::Nothing);
    }
}
