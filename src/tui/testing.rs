//! General test utilities for TUI tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[cfg(test)]
//! mod tests {
//!     use crate::tui::testing::*;
//!
//!     #[test]
//!     fn test_example() {
//!         let buf = render_widget(&widget, RENDER_WIDTH, 10);
//!         assert_buffer(&buf, &["..."]);
//!     }
//! }
//! ```

use chrono::NaiveDate;
use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::{Config, DisplayConfig};
use crate::selection::DateRange;
use crate::tui::component::ElementWidget;
use crate::tui::state::AppState;

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 80;

/// Fixed "today" used by rendering tests: Friday, October 16, 2026
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

/// Unicode display config with default colors
pub fn test_config() -> DisplayConfig {
    DisplayConfig::default()
}

/// ASCII display config for predictable border output
pub fn test_config_ascii() -> DisplayConfig {
    DisplayConfig {
        use_unicode: false,
        ..DisplayConfig::default()
    }
}

/// State mounted in a `width` x `height` terminal, centered on the current month
pub fn test_state(range: DateRange, width: u16, height: u16) -> AppState {
    let state = AppState::new(Config::default(), test_today(), range);
    let (state, _) = crate::tui::reducer::reduce(
        state,
        crate::tui::action::Action::Resize { width, height },
    );
    state
}

/// Render a widget to a buffer and return it for testing
pub fn render_widget(widget: &impl ElementWidget, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, &test_config());
    buf
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}
