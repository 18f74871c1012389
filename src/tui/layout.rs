//! Screen geometry shared by rendering and mouse hit testing
//!
//! Every clickable region is computed here from the terminal area alone, so
//! the widgets that draw a region and the hit test that resolves a click on it
//! always agree.

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::UnicodeWidthStr;

use crate::dates::DAYS_PER_WEEK;
use crate::window::WINDOW_SIZE;

/// Header rows: title, start/end dates, hint, bottom border
pub const HEADER_HEIGHT: u16 = 4;
/// Key hints at the bottom of the screen
pub const HINT_BAR_HEIGHT: u16 = 1;
/// Columns per day cell
pub const CELL_WIDTH: u16 = 4;
/// Columns of the 7-day grid
pub const GRID_WIDTH: u16 = CELL_WIDTH * DAYS_PER_WEEK as u16;

pub const CLEAR_LABEL: &str = "Clear";
pub const SHEET_TITLE: &str = "Select month";

/// Sheet rows besides the month rows: borders, title, separator
pub const SHEET_CHROME_ROWS: u16 = 4;
/// The sheet never covers more than this share of the screen
pub const SHEET_MAX_PERCENT: u32 = 70;

/// Top-level areas of the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub list: Rect,
    pub hints: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let [header, list, hints] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(HINT_BAR_HEIGHT),
    ])
    .areas(area);
    ScreenLayout { header, list, hints }
}

/// Height of the month list viewport for a terminal of `width` x `height`
pub fn list_viewport_height(width: u16, height: u16) -> u16 {
    screen_layout(Rect::new(0, 0, width, height)).list.height
}

/// The "Clear" button, right-aligned on the header's title row
pub fn clear_button_area(header: Rect) -> Rect {
    let width = (CLEAR_LABEL.width() as u16 + 2).min(header.width);
    Rect {
        x: header.right().saturating_sub(width + 1).max(header.x),
        y: header.y,
        width,
        height: header.height.min(1),
    }
}

/// The floating month label, centered on the last row of the list
pub fn badge_area(list: Rect, label: &str) -> Rect {
    if list.height == 0 {
        return Rect::new(list.x, list.y, 0, 0);
    }
    let width = (label.width() as u16 + 4).min(list.width);
    Rect {
        x: list.x + (list.width - width) / 2,
        y: list.bottom() - 1,
        width,
        height: 1,
    }
}

/// Left edge of the day grid, centered in the list
pub fn grid_x(list: Rect) -> u16 {
    list.x + list.width.saturating_sub(GRID_WIDTH) / 2
}

/// Areas of the month selector sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    /// Whole sheet including its border
    pub sheet: Rect,
    pub title: Rect,
    pub close: Rect,
    /// One row per visible month
    pub rows: Rect,
}

/// The sheet slides up from the bottom of `area`
pub fn sheet_layout(area: Rect) -> SheetLayout {
    let wanted = WINDOW_SIZE as u16 + SHEET_CHROME_ROWS;
    let max = (area.height as u32 * SHEET_MAX_PERCENT / 100) as u16;
    let height = wanted.min(max.max(SHEET_CHROME_ROWS)).min(area.height);

    let sheet = Rect {
        x: area.x,
        y: area.bottom() - height,
        width: area.width,
        height,
    };
    let inner = Rect {
        x: sheet.x.saturating_add(1),
        y: sheet.y.saturating_add(1),
        width: sheet.width.saturating_sub(2),
        height: sheet.height.saturating_sub(2),
    };
    let title = Rect {
        height: inner.height.min(1),
        ..inner
    };
    let close_width = 3.min(inner.width);
    let close = Rect {
        x: inner.right() - close_width,
        width: close_width,
        ..title
    };
    let rows = Rect {
        y: inner.y.saturating_add(2).min(inner.bottom()),
        height: inner.height.saturating_sub(2),
        ..inner
    };

    SheetLayout {
        sheet,
        title,
        close,
        rows,
    }
}

/// Number of month rows the sheet can show at once
pub fn sheet_visible_rows(width: u16, height: u16) -> usize {
    sheet_layout(Rect::new(0, 0, width, height)).rows.height as usize
}
