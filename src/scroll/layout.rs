//! Lookup table from month index to its vertical extent in the list
//!
//! Extents are measured in content rows (row 0 is the top of the first
//! month). The table is filled when the list is mounted and emptied when it
//! is torn down; lookups against an empty table simply find nothing.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::dates::week_rows;
use crate::window::MonthWindow;

/// Section row holding the "Month Year" title
pub const TITLE_ROW: u16 = 0;
/// Section row holding the weekday labels
pub const WEEKDAY_ROW: u16 = 1;
/// Section row of the first week
pub const FIRST_WEEK_ROW: u16 = 2;
/// Rows in a section besides the weeks: title, weekday labels, trailing spacer
pub const SECTION_CHROME_ROWS: u16 = 3;

/// Height of the section that renders `month`
pub fn section_height(month: NaiveDate) -> u16 {
    SECTION_CHROME_ROWS + week_rows(month) as u16
}

/// Vertical placement of one month section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthExtent {
    pub top: u16,
    pub height: u16,
}

impl MonthExtent {
    pub fn new(top: u16, height: u16) -> Self {
        Self { top, height }
    }

    /// First row past the section
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }

    /// Twice the center row, so odd heights stay exact
    pub fn doubled_center(&self) -> u32 {
        2 * self.top as u32 + self.height as u32
    }

    pub fn contains_row(&self, row: u16) -> bool {
        row >= self.top && row < self.bottom()
    }

    /// Number of week rows inside the section
    pub fn week_rows(&self) -> u16 {
        self.height.saturating_sub(SECTION_CHROME_ROWS)
    }
}

/// Month index -> extent, iterated in ascending index order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthLayout {
    extents: BTreeMap<usize, MonthExtent>,
}

impl MonthLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout with every month of `window` stacked top to bottom
    pub fn for_window(window: &MonthWindow) -> Self {
        let mut layout = Self::new();
        let mut top: u16 = 0;
        for (index, month) in window.months() {
            let height = section_height(month);
            layout.mount(index, MonthExtent::new(top, height));
            top = top.saturating_add(height);
        }
        layout
    }

    /// Register (or replace) the extent of month `index`
    pub fn mount(&mut self, index: usize, extent: MonthExtent) {
        self.extents.insert(index, extent);
    }

    /// Forget month `index`
    pub fn unmount(&mut self, index: usize) -> Option<MonthExtent> {
        self.extents.remove(&index)
    }

    pub fn clear(&mut self) {
        self.extents.clear();
    }

    pub fn get(&self, index: usize) -> Option<MonthExtent> {
        self.extents.get(&index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, MonthExtent)> + '_ {
        self.extents.iter().map(|(i, e)| (*i, *e))
    }

    pub fn len(&self) -> usize {
        self.extents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    /// Total rows of scrollable content
    pub fn content_height(&self) -> u16 {
        self.extents.values().map(MonthExtent::bottom).max().unwrap_or(0)
    }

    /// Largest valid scroll offset for a viewport of `viewport_height` rows
    pub fn max_offset(&self, viewport_height: u16) -> u16 {
        self.content_height().saturating_sub(viewport_height)
    }

    /// Month whose section covers content row `row`
    pub fn month_at_row(&self, row: u16) -> Option<(usize, MonthExtent)> {
        self.iter().find(|(_, extent)| extent.contains_row(row))
    }

    /// Months whose sections intersect rows `[offset, offset + height)`
    pub fn visible(&self, offset: u16, height: u16) -> impl Iterator<Item = (usize, MonthExtent)> + '_ {
        let end = offset.saturating_add(height);
        self.iter()
            .filter(move |(_, extent)| extent.top < end && extent.bottom() > offset)
    }

    /// Offset that puts the center of month `index` at the viewport center,
    /// clamped to the scrollable range
    pub fn centered_offset(&self, index: usize, viewport_height: u16) -> Option<u16> {
        let extent = self.get(index)?;
        let doubled = extent.doubled_center().saturating_sub(viewport_height as u32);
        let offset = (doubled / 2).min(u16::MAX as u32) as u16;
        Some(offset.min(self.max_offset(viewport_height)))
    }
}
