//! Day grid model for one month
//!
//! A month is laid out as rows of 7 cells, Sunday first. Leading blanks pad
//! the first row up to the weekday of the 1st.

use chrono::{Datelike, NaiveDate};

use crate::dates::{days_in_month, first_day_of_month, is_today, start_weekday, DAYS_PER_WEEK};
use crate::selection::DateRange;

/// Visual state of a day cell, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCellStyle {
    /// Start or end of the selected range
    Endpoint,
    /// Strictly inside a complete range
    InRange,
    /// Today, when not part of the range
    Today,
    Default,
}

/// Style for `day` given the current range snapshot and today's date
pub fn day_cell_style(day: NaiveDate, range: &DateRange, today: NaiveDate) -> DayCellStyle {
    if range.is_endpoint(day) {
        DayCellStyle::Endpoint
    } else if range.contains(day) {
        DayCellStyle::InRange
    } else if is_today(day, today) {
        DayCellStyle::Today
    } else {
        DayCellStyle::Default
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub style: DayCellStyle,
}

/// A month's cells ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: NaiveDate,
    leading_blanks: usize,
    days: Vec<DayCell>,
}

impl MonthGrid {
    pub fn build(month: NaiveDate, range: &DateRange, today: NaiveDate) -> Self {
        let days = days_in_month(month)
            .into_iter()
            .map(|date| DayCell {
                date,
                style: day_cell_style(date, range, today),
            })
            .collect();

        Self {
            month: first_day_of_month(month),
            leading_blanks: start_weekday(month),
            days,
        }
    }

    /// First day of the month
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn leading_blanks(&self) -> usize {
        self.leading_blanks
    }

    pub fn days(&self) -> &[DayCell] {
        &self.days
    }

    /// Number of grid rows
    pub fn week_count(&self) -> usize {
        (self.leading_blanks + self.days.len()).div_ceil(DAYS_PER_WEEK)
    }

    /// Cells of grid row `week`; `None` marks a blank
    pub fn week(&self, week: usize) -> [Option<DayCell>; DAYS_PER_WEEK] {
        let mut row = [None; DAYS_PER_WEEK];
        for (col, slot) in row.iter_mut().enumerate() {
            *slot = self.cell(week * DAYS_PER_WEEK + col);
        }
        row
    }

    /// Cell at flat grid position `index`
    pub fn cell(&self, index: usize) -> Option<DayCell> {
        index
            .checked_sub(self.leading_blanks)
            .and_then(|day| self.days.get(day).copied())
    }

    /// Cell holding `date`, if it belongs to this month
    pub fn find(&self, date: NaiveDate) -> Option<DayCell> {
        if first_day_of_month(date) != self.month {
            return None;
        }
        self.days.get(date.day0() as usize).copied()
    }
}
