//! Date arithmetic for the month grid
//!
//! Everything here is a pure function over `chrono::NaiveDate`. Weeks start on
//! Sunday and display strings use a fixed English locale.

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::error::{InputError, InputResult};

/// Column headers for the 7-column day grid, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Days per grid row
pub const DAYS_PER_WEEK: usize = 7;

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// First day of the month containing `date`
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_day_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}

/// Every day of the month containing `date`, in ascending order
pub fn days_in_month(date: NaiveDate) -> Vec<NaiveDate> {
    let first = first_day_of_month(date);
    first
        .iter_days()
        .take_while(|day| day.month() == first.month())
        .collect()
}

/// Weekday of the 1st of the month, 0 = Sunday ... 6 = Saturday
///
/// This is the number of blank cells that precede day 1 in the grid.
pub fn start_weekday(date: NaiveDate) -> usize {
    first_day_of_month(date).weekday().num_days_from_sunday() as usize
}

/// Number of grid rows needed to lay out the month (4 to 6)
pub fn week_rows(date: NaiveDate) -> usize {
    let cells = start_weekday(date) + last_day_of_month(date).day() as usize;
    cells.div_ceil(DAYS_PER_WEEK)
}

/// First day of the month `offset` months away from the month of `date`
pub fn add_months(date: NaiveDate, offset: i32) -> NaiveDate {
    let first = first_day_of_month(date);
    let shifted = if offset >= 0 {
        first.checked_add_months(Months::new(offset.unsigned_abs()))
    } else {
        first.checked_sub_months(Months::new(offset.unsigned_abs()))
    };
    shifted.unwrap_or(first)
}

/// True iff both dates are present and fall on the same calendar day
pub fn same_day(a: Option<NaiveDate>, b: Option<NaiveDate>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

/// True iff `date` lies in `[min(start, end), max(start, end)]`
///
/// Returns false when either bound is missing.
pub fn between(date: NaiveDate, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    match (start, end) {
        (Some(start), Some(end)) => date >= start.min(end) && date <= start.max(end),
        _ => false,
    }
}

/// True iff `date` is the picker's "today"
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    same_day(Some(date), Some(today))
}

/// "January 2025"
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// "2025-01-05", the stable key for a day cell and the CLI input format
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// "Jan 5, 2025", used in the header
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> InputResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| InputError::InvalidDate(s.to_string()))
}

/// Parse a `YYYY-MM` month into the first day of that month
pub fn parse_month(s: &str) -> InputResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| InputError::InvalidMonth(s.to_string()))
}
