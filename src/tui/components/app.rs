use crate::tui::component::{overlay, vertical, Component, Constraint, Element};
use crate::tui::layout::{HEADER_HEIGHT, HINT_BAR_HEIGHT};
use crate::tui::state::AppState;

use super::{Header, HintBar, MonthBadge, MonthList, MonthSelector};

/// Root App component
///
/// This is the top-level component that renders the entire picker.
/// It uses the global AppState as props and delegates rendering to child components.
/// The badge and the month sheet are overlays drawn over the full screen.
pub struct App;

impl Component for App {
    type Props = AppState;

    fn view(&self, props: &Self::Props) -> Element {
        let screen = vertical(
            [
                Constraint::Length(HEADER_HEIGHT),   // Header
                Constraint::Min(0),                  // Month list
                Constraint::Length(HINT_BAR_HEIGHT), // Key hints
            ],
            vec![
                Header.view(&props.picker),
                MonthList.view(props),
                HintBar.view(props),
            ],
        );

        let with_badge = overlay(screen, MonthBadge.view(&props.picker));
        overlay(with_badge, MonthSelector.view(props))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::selection::DateRange;
    use crate::tui::renderer::Renderer;
    use crate::tui::testing::{buffer_lines, test_state, test_today};
    use ratatui::{buffer::Buffer, layout::Rect};

    fn render(state: &AppState, width: u16, height: u16) -> Vec<String> {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        Renderer::new().render(&App.view(state), buf.area, &mut buf, &DisplayConfig::default());
        buffer_lines(&buf)
    }

    #[test]
    fn test_app_layout() {
        let range = DateRange::new(Some(test_today()), None);
        let lines = render(&test_state(range, 40, 30), 40, 30);

        assert!(lines[0].starts_with(" Select dates"));
        assert!(lines[0].contains("[Clear]"));
        assert!(lines[1].contains("Oct 16, 2026"));
        assert!(lines[2].contains("Select the end date"));
        assert!(lines.iter().any(|line| line.trim() == "October 2026"));
        // badge on the last list row
        assert!(lines[28].contains("October 2026"));
        assert!(lines[29].starts_with(" j/k Scroll"));
    }

    #[test]
    fn test_app_with_sheet_open() {
        let mut state = test_state(DateRange::EMPTY, 40, 30);
        state.selector.open = true;
        let lines = render(&state, 40, 30);
        assert!(lines.iter().any(|line| line.contains("Select month")));
        assert!(lines.iter().any(|line| line.contains("► October 2026")));
    }
}
