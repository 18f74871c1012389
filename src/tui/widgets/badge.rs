use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::tui::component::ElementWidget;
use crate::tui::layout::{badge_area, screen_layout};

/// Floating "Month Year" label over the bottom of the month list
///
/// Rendered with the full screen area so its position matches the hit test.
#[derive(Debug, Clone)]
pub struct MonthBadgeWidget {
    pub label: String,
}

impl MonthBadgeWidget {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

impl ElementWidget for MonthBadgeWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let badge = badge_area(screen_layout(area).list, &self.label);
        if badge.area() == 0 {
            return;
        }
        buf.set_stringn(
            badge.x,
            badge.y,
            format!("  {}  ", self.label),
            badge.width as usize,
            Style::default()
                .fg(config.accent_fg)
                .add_modifier(Modifier::REVERSED | Modifier::BOLD),
        );
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{buffer_lines, render_widget};

    #[test]
    fn test_badge_on_last_list_row() {
        let buf = render_widget(&MonthBadgeWidget::new("October 2026"), 40, 12);
        let lines = buffer_lines(&buf);
        // 12 rows: header 0..4, list 4..11, hints 11
        assert_eq!(lines[10], "              October 2026              ");
        assert!(buf[(12, 10)].modifier.contains(Modifier::REVERSED));
        assert!(lines[..10].iter().all(|line| line.trim().is_empty()));
    }

    #[test]
    fn test_badge_skipped_without_list() {
        let buf = render_widget(&MonthBadgeWidget::new("October 2026"), 40, 5);
        assert!(buffer_lines(&buf).iter().all(|line| line.trim().is_empty()));
    }
}
