/// MonthListWidget - the scrolled stack of month sections
///
/// Each section is a title row, a weekday label row, one row per week and a
/// blank spacer. Only rows inside the viewport are drawn, so the widget is
/// handed just the sections that intersect it.
use chrono::Datelike;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::dates::{format_month_year, WEEKDAY_LABELS};
use crate::grid::{DayCell, DayCellStyle, MonthGrid};
use crate::scroll::layout::{FIRST_WEEK_ROW, TITLE_ROW, WEEKDAY_ROW};
use crate::scroll::MonthExtent;
use crate::tui::component::ElementWidget;
use crate::tui::layout::{grid_x, CELL_WIDTH};

/// One month positioned in content rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSection {
    pub grid: MonthGrid,
    pub extent: MonthExtent,
}

#[derive(Debug, Clone)]
pub struct MonthListWidget {
    pub sections: Vec<MonthSection>,
    /// Content row shown on the first viewport row
    pub offset: u16,
}

impl MonthListWidget {
    pub fn new(sections: Vec<MonthSection>, offset: u16) -> Self {
        Self { sections, offset }
    }

    fn section_at(&self, content_row: u16) -> Option<&MonthSection> {
        self.sections
            .iter()
            .find(|section| section.extent.contains_row(content_row))
    }
}

/// Style of a day cell
pub fn day_style(style: DayCellStyle, config: &DisplayConfig) -> Style {
    match style {
        DayCellStyle::Endpoint => Style::default()
            .fg(config.endpoint_fg)
            .bg(config.endpoint_bg)
            .add_modifier(Modifier::BOLD),
        DayCellStyle::InRange => Style::default().fg(config.range_fg).bg(config.range_bg),
        DayCellStyle::Today => Style::default()
            .fg(config.today_fg)
            .add_modifier(Modifier::BOLD),
        DayCellStyle::Default => Style::default(),
    }
}

fn render_title(grid: &MonthGrid, area: Rect, y: u16, buf: &mut Buffer) {
    let title = format_month_year(grid.month());
    let x = area.x + area.width.saturating_sub(title.width() as u16) / 2;
    buf.set_stringn(
        x,
        y,
        &title,
        area.width as usize,
        Style::default().add_modifier(Modifier::BOLD),
    );
}

fn render_weekdays(area: Rect, y: u16, buf: &mut Buffer, config: &DisplayConfig) {
    let left = grid_x(area);
    for (col, label) in WEEKDAY_LABELS.iter().enumerate() {
        let x = left + col as u16 * CELL_WIDTH;
        if x >= area.right() {
            break;
        }
        buf.set_stringn(
            x,
            y,
            format!(" {:>2} ", label),
            (area.right() - x) as usize,
            Style::default().fg(config.muted_fg),
        );
    }
}

fn render_week(cells: &[Option<DayCell>], area: Rect, y: u16, buf: &mut Buffer, config: &DisplayConfig) {
    let left = grid_x(area);
    for (col, cell) in cells.iter().enumerate() {
        let x = left + col as u16 * CELL_WIDTH;
        if x >= area.right() {
            break;
        }
        let Some(cell) = cell else {
            continue;
        };
        buf.set_stringn(
            x,
            y,
            format!(" {:>2} ", cell.date.day()),
            (area.right() - x) as usize,
            day_style(cell.style, config),
        );
    }
}

impl ElementWidget for MonthListWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        for row in 0..area.height {
            let content_row = self.offset.saturating_add(row);
            let Some(section) = self.section_at(content_row) else {
                continue;
            };
            let y = area.y + row;

            match content_row - section.extent.top {
                TITLE_ROW => render_title(&section.grid, area, y, buf),
                WEEKDAY_ROW => render_weekdays(area, y, buf, config),
                section_row => {
                    let week = (section_row - FIRST_WEEK_ROW) as usize;
                    if week < section.grid.week_count() {
                        render_week(&section.grid.week(week), area, y, buf, config);
                    }
                }
            }
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
