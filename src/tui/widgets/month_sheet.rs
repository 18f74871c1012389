/// MonthSheetWidget - bottom sheet for jumping to a month
///
/// Features:
/// - Dimmed backdrop over the rest of the screen
/// - Clear background behind the sheet
/// - Border drawn with the configured box characters
/// - Title row with a close button
/// - Scrollable month rows, the current month marked
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Widget},
};

use crate::config::DisplayConfig;
use crate::formatting::BoxChars;
use crate::tui::component::ElementWidget;
use crate::tui::layout::{sheet_layout, SHEET_TITLE};

#[derive(Debug, Clone)]
pub struct MonthSheetWidget {
    /// "Month Year" label of every window month
    pub labels: Vec<String>,
    /// Index of the month nearest the list's viewport center
    pub current: usize,
    /// First label shown
    pub scroll_offset: usize,
}

impl MonthSheetWidget {
    pub fn new(labels: Vec<String>, current: usize, scroll_offset: usize) -> Self {
        Self {
            labels,
            current,
            scroll_offset,
        }
    }
}

fn border_set(chars: &BoxChars) -> border::Set {
    border::Set {
        top_left: chars.top_left,
        top_right: chars.top_right,
        bottom_left: chars.bottom_left,
        bottom_right: chars.bottom_right,
        vertical_left: chars.vertical,
        vertical_right: chars.vertical,
        horizontal_top: chars.horizontal,
        horizontal_bottom: chars.horizontal,
    }
}

impl ElementWidget for MonthSheetWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let chars = config.box_chars();
        let layout = sheet_layout(area);

        buf.set_style(area, Style::default().add_modifier(Modifier::DIM));
        Clear.render(layout.sheet, buf);

        Block::default()
            .borders(Borders::ALL)
            .border_set(border_set(&chars))
            .border_style(Style::default().fg(config.muted_fg))
            .render(layout.sheet, buf);

        if layout.title.height == 0 {
            return;
        }
        buf.set_stringn(
            layout.title.x + 1,
            layout.title.y,
            SHEET_TITLE,
            layout.title.width.saturating_sub(1) as usize,
            Style::default().add_modifier(Modifier::BOLD),
        );
        buf.set_stringn(
            layout.close.x,
            layout.close.y,
            format!(" {} ", chars.close),
            layout.close.width as usize,
            Style::default().fg(config.accent_fg),
        );

        let separator_y = layout.title.y + 1;
        if separator_y < layout.rows.y {
            buf.set_string(
                layout.title.x,
                separator_y,
                chars.horizontal.repeat(layout.title.width as usize),
                Style::default().fg(config.muted_fg),
            );
        }

        let rows = layout.rows;
        for (row, (index, label)) in self
            .labels
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(rows.height as usize)
            .enumerate()
        {
            let y = rows.y + row as u16;
            if index == self.current {
                let style = Style::default()
                    .fg(config.accent_fg)
                    .add_modifier(Modifier::BOLD);
                buf.set_stringn(
                    rows.x,
                    y,
                    format!(" {} {}", chars.selector, label),
                    rows.width as usize,
                    style,
                );
                if rows.width > 2 {
                    buf.set_string(rows.right() - 2, y, chars.check, style);
                }
            } else {
                buf.set_stringn(
                    rows.x,
                    y,
                    format!("   {}", label),
                    rows.width as usize,
                    Style::default(),
                );
            }
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{assert_buffer, test_config_ascii, test_today};
    use crate::window::MonthWindow;

    fn labels() -> Vec<String> {
        MonthWindow::new(test_today()).labels()
    }

    fn render(widget: &MonthSheetWidget, width: u16, height: u16) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        widget.render(buf.area, &mut buf, &test_config_ascii());
        buf
    }

    #[test]
    fn test_sheet_render_ascii() {
        let widget = MonthSheetWidget::new(labels(), 12, 10);
        let buf = render(&widget, 30, 12);
        assert_buffer(
            &buf,
            &[
                "",
                "",
                "",
                "",
                "+----------------------------+",
                "| Select month             x |",
                "|----------------------------|",
                "|   August 2026              |",
                "|   September 2026           |",
                "| > October 2026           * |",
                "|   November 2026            |",
                "+----------------------------+",
            ],
        );
    }

    #[test]
    fn test_backdrop_dimmed_sheet_not() {
        let widget = MonthSheetWidget::new(labels(), 12, 10);
        let buf = render(&widget, 30, 12);
        assert!(buf[(0, 0)].modifier.contains(Modifier::DIM));
        assert!(!buf[(3, 7)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_rows_stop_at_last_month() {
        let widget = MonthSheetWidget::new(labels(), 12, 22);
        let buf = render(&widget, 30, 12);
        let lines = crate::tui::testing::buffer_lines(&buf);
        assert_eq!(lines[7].trim_end(), "|   August 2027              |");
        assert_eq!(lines[8].trim_end(), "|   September 2027           |");
        assert_eq!(lines[9].trim_end(), "|                            |");
    }

    #[test]
    fn test_unicode_border() {
        let widget = MonthSheetWidget::new(labels(), 0, 0);
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 12));
        widget.render(buf.area, &mut buf, &crate::tui::testing::test_config());
        assert_eq!(buf[(0, 4)].symbol(), "╭");
        assert_eq!(buf[(27, 7)].symbol(), "✓");
    }
}
