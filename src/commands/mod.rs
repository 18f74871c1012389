pub mod calendar;
pub mod months;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::dates::{parse_date, today};
use crate::selection::DateRange;

/// Parse an optional `YYYY-MM-DD` argument
pub fn parse_optional_date(date: Option<&str>) -> Result<Option<NaiveDate>> {
    date.map(|s| parse_date(s).with_context(|| format!("Failed to parse date argument '{}'", s)))
        .transpose()
}

/// Parse the `--today` override, defaulting to the local date
pub fn resolve_today(date: Option<&str>) -> Result<NaiveDate> {
    Ok(parse_optional_date(date)?.unwrap_or_else(today))
}

/// Build the range given by `--start` / `--end`
pub fn parse_range(start: Option<&str>, end: Option<&str>) -> Result<DateRange> {
    Ok(DateRange::new(parse_optional_date(start)?, parse_optional_date(end)?))
}
