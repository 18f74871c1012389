//! The fixed window of months shown in the list

use chrono::{Datelike, NaiveDate};

use crate::dates::{add_months, first_day_of_month, format_month_year};

/// Number of months in the window
pub const WINDOW_SIZE: usize = 24;

/// Index of the anchor (current) month
pub const CENTER_INDEX: usize = 12;

/// 24 consecutive months; index `i` is `i - 12` months from the anchor
///
/// The anchor is fixed when the window is created and never shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    anchor: NaiveDate,
}

impl MonthWindow {
    /// Window centered on the month containing `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            anchor: first_day_of_month(today),
        }
    }

    /// First day of the anchor month
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn len(&self) -> usize {
        WINDOW_SIZE
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// First day of the month at `index`, or None past the window
    pub fn month(&self, index: usize) -> Option<NaiveDate> {
        if index >= WINDOW_SIZE {
            return None;
        }
        Some(add_months(self.anchor, index as i32 - CENTER_INDEX as i32))
    }

    /// All months with their indices, in order
    pub fn months(&self) -> impl Iterator<Item = (usize, NaiveDate)> + '_ {
        (0..WINDOW_SIZE).filter_map(move |i| self.month(i).map(|m| (i, m)))
    }

    /// Index of the month containing `date`, if it is inside the window
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let months = (date.year() - self.anchor.year()) * 12 + date.month() as i32
            - self.anchor.month() as i32;
        let index = months + CENTER_INDEX as i32;
        (0..WINDOW_SIZE as i32)
            .contains(&index)
            .then_some(index as usize)
    }

    /// "Month Year" labels for every month
    pub fn labels(&self) -> Vec<String> {
        self.months().map(|(_, m)| format_month_year(m)).collect()
    }
}

impl Default for MonthWindow {
    fn default() -> Self {
        Self::new(crate::dates::today())
    }
}
