use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

use crate::commands::{parse_range, resolve_today};
use crate::config::DisplayConfig;
use crate::dates::{first_day_of_month, format_month_year, parse_month, WEEKDAY_LABELS};
use crate::formatting::format_header;
use crate::grid::{DayCell, DayCellStyle, MonthGrid};
use crate::selection::DateRange;

const BLANK_CELL: &str = "    ";

/// Text form of a day cell, 4 columns wide
///
/// `[ 5]` marks a range endpoint, `- 6-` a day inside the range and `(16)`
/// today.
fn format_cell(cell: &DayCell) -> String {
    let day = cell.date.day();
    match cell.style {
        DayCellStyle::Endpoint => format!("[{:>2}]", day),
        DayCellStyle::InRange => format!("-{:>2}-", day),
        DayCellStyle::Today => format!("({:>2})", day),
        DayCellStyle::Default => format!(" {:>2} ", day),
    }
}

/// Render one month as a text grid
pub fn format_month(month: NaiveDate, range: &DateRange, today: NaiveDate, display: &DisplayConfig) -> String {
    let grid = MonthGrid::build(month, range, today);
    let mut output = format_header(&format_month_year(grid.month()), true, display);

    let weekdays: String = WEEKDAY_LABELS.iter().map(|l| format!(" {:>2} ", l)).collect();
    output.push_str(weekdays.trim_end());
    output.push('\n');

    for week in 0..grid.week_count() {
        let line: String = grid
            .week(week)
            .iter()
            .map(|cell| cell.as_ref().map(format_cell).unwrap_or_else(|| BLANK_CELL.to_string()))
            .collect();
        output.push_str(line.trim_end());
        output.push('\n');
    }

    if !range.is_empty() {
        output.push_str(&format!("\nSelected: {}\n", range));
    }
    output
}

pub fn run(
    month: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
    today: Option<&str>,
    display: &DisplayConfig,
) -> Result<()> {
    let today = resolve_today(today)?;
    let range = parse_range(start, end)?;

    // Without --month, show the month of the range start, else the current month
    let month = match month {
        Some(m) => parse_month(m).with_context(|| format!("Failed to parse --month '{}'", m))?,
        None => first_day_of_month(range.start.unwrap_or(today)),
    };

    print!("{}", format_month(month, &range, today, display));
    Ok(())
}
