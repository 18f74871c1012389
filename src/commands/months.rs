use anyhow::Result;
use chrono::NaiveDate;

use crate::commands::resolve_today;
use crate::config::DisplayConfig;
use crate::formatting::format_header;
use crate::window::{MonthWindow, CENTER_INDEX};

/// List the month window, marking the current month
pub fn format_months(window: &MonthWindow, display: &DisplayConfig) -> String {
    let selector = display.box_chars().selector;
    let mut output = format_header("Month window", false, display);

    for (index, label) in window.labels().iter().enumerate() {
        let marker = if index == CENTER_INDEX { selector } else { " " };
        output.push_str(&format!("{} {:>2}  {}\n", marker, index, label));
    }
    output
}

pub fn run(today: Option<&str>, display: &DisplayConfig) -> Result<()> {
    let today: NaiveDate = resolve_today(today)?;
    print!("{}", format_months(&MonthWindow::new(today), display));
    Ok(())
}
