/// HeaderWidget - title, the selected range and the Clear button
///
/// Rows:
/// - Title, with the Clear button on the right while a range exists
/// - Start and end dates, a placeholder standing in for a missing bound
/// - Prompt for the end date while a selection is in progress
/// - Bottom border
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::config::DisplayConfig;
use crate::dates::format_display_date;
use crate::selection::DateRange;
use crate::tui::component::ElementWidget;
use crate::tui::layout::{clear_button_area, CLEAR_LABEL, HEADER_HEIGHT};

pub const TITLE: &str = "Select dates";
pub const END_DATE_PROMPT: &str = "Select the end date";

#[derive(Debug, Clone)]
pub struct HeaderWidget {
    pub range: DateRange,
    /// Waiting for the second click
    pub selecting: bool,
}

impl HeaderWidget {
    pub fn new(range: DateRange, selecting: bool) -> Self {
        Self { range, selecting }
    }

    fn date_span(date: Option<chrono::NaiveDate>, config: &DisplayConfig) -> Span<'static> {
        match date {
            Some(date) => Span::styled(
                format_display_date(date),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(
                config.box_chars().placeholder,
                Style::default().fg(config.muted_fg),
            ),
        }
    }
}

impl ElementWidget for HeaderWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 {
            return;
        }
        let chars = config.box_chars();

        buf.set_string(
            area.x + 1,
            area.y,
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        );
        if !self.range.is_empty() {
            let button = clear_button_area(area);
            buf.set_stringn(
                button.x,
                button.y,
                format!("[{}]", CLEAR_LABEL),
                button.width as usize,
                Style::default().fg(config.accent_fg),
            );
        }

        if area.height > 1 {
            let dates = Line::from(vec![
                Span::raw(" "),
                Self::date_span(self.range.start, config),
                Span::raw(format!(" {} ", chars.arrow)),
                Self::date_span(self.range.end, config),
            ]);
            buf.set_line(area.x, area.y + 1, &dates, area.width);
        }

        if area.height > 2 && self.selecting {
            buf.set_string(
                area.x + 1,
                area.y + 2,
                END_DATE_PROMPT,
                Style::default().fg(config.muted_fg),
            );
        }

        if area.height > 3 {
            buf.set_string(
                area.x,
                area.bottom() - 1,
                chars.horizontal.repeat(area.width as usize),
                Style::default().fg(config.muted_fg),
            );
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(HEADER_HEIGHT)
    }
}
