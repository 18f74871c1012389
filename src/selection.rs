//! Two-click range selection
//!
//! The first click picks a start date, the second click completes the range.
//! A click that lands before the pending start becomes the new start and the
//! old start becomes the end, so a complete range is always ordered.

use chrono::NaiveDate;
use std::fmt;

use crate::dates::{between, format_date, same_day};

/// An inclusive date interval, either bound possibly unset
///
/// When both bounds are set, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// The range with neither bound set
    pub const EMPTY: DateRange = DateRange { start: None, end: None };

    /// Build a range, swapping the bounds if they are out of order
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (start, end) {
            (Some(s), Some(e)) if e < s => Self { start: Some(e), end: Some(s) },
            _ => Self { start, end },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// True when both bounds are set
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// True if `date` is one of the bounds
    pub fn is_endpoint(&self, date: NaiveDate) -> bool {
        same_day(Some(date), self.start) || same_day(Some(date), self.end)
    }

    /// True if `date` falls inside a complete range (bounds included)
    pub fn contains(&self, date: NaiveDate) -> bool {
        between(date, self.start, self.end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |d: Option<NaiveDate>| d.map(format_date).unwrap_or_else(|| "-".to_string());
        write!(f, "{} .. {}", bound(self.start), bound(self.end))
    }
}

/// Selection state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected
    #[default]
    Empty,
    /// Start picked, waiting for the end click
    PendingEnd { start: NaiveDate },
    /// Both bounds picked, `start <= end`
    Complete { start: NaiveDate, end: NaiveDate },
    /// Host seeded only an end date; shown as is until the first click
    EndOnly { end: NaiveDate },
}

impl Selection {
    /// Seed the machine from a host-supplied range
    ///
    /// A range with only a start waits for its end date. A range with only
    /// an end is kept for display and the next click starts over.
    pub fn from_range(range: DateRange) -> Self {
        match (range.start, range.end) {
            (Some(a), Some(b)) => Selection::Complete {
                start: a.min(b),
                end: a.max(b),
            },
            (Some(start), None) => Selection::PendingEnd { start },
            (None, Some(end)) => Selection::EndOnly { end },
            (None, None) => Selection::Empty,
        }
    }

    /// Advance the machine on a click at `date`
    pub fn click(self, date: NaiveDate) -> Self {
        match self {
            Selection::Empty | Selection::Complete { .. } | Selection::EndOnly { .. } => {
                Selection::PendingEnd { start: date }
            }
            Selection::PendingEnd { start } if date >= start => Selection::Complete { start, end: date },
            Selection::PendingEnd { start } => Selection::Complete { start: date, end: start },
        }
    }

    /// The range this state represents
    pub fn range(&self) -> DateRange {
        match *self {
            Selection::Empty => DateRange::EMPTY,
            Selection::PendingEnd { start } => DateRange { start: Some(start), end: None },
            Selection::Complete { start, end } => DateRange { start: Some(start), end: Some(end) },
            Selection::EndOnly { end } => DateRange { start: None, end: Some(end) },
        }
    }

    /// True between the start click and the completing end click
    pub fn is_selecting(&self) -> bool {
        matches!(self, Selection::PendingEnd { .. })
    }
}

/// Receives every range change (each click and each clear)
pub trait RangeListener: Send {
    fn range_changed(&mut self, range: &DateRange);
}

impl<F> RangeListener for F
where
    F: FnMut(&DateRange) + Send,
{
    fn range_changed(&mut self, range: &DateRange) {
        self(range)
    }
}
