use ratatui::{
    buffer::Buffer,
    layout::{Constraint as RatatuiConstraint, Direction, Layout as RatatuiLayout, Rect},
};

use super::component::{Constraint, ContainerLayout, Element};
use crate::config::DisplayConfig;

/// Renders virtual element tree to ratatui buffer
///
/// The Renderer takes a virtual Element tree produced by components
/// and renders it to the terminal using ratatui. The whole tree is drawn on
/// every frame: ratatui hands out a cleared buffer and diffs it against the
/// previous frame itself.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Render an element tree to the given area in the buffer
    pub fn render(&self, element: &Element, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        match element {
            Element::Widget(widget) => widget.render(area, buf, config),

            Element::Container { children, layout } => {
                let chunks = self.calculate_layout(layout, area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    self.render(child, *chunk, buf, config);
                }
            }

            // Base first, then the overlay on top, both over the full area
            Element::Overlay { base, overlay } => {
                self.render(base, area, buf, config);
                self.render(overlay, area, buf, config);
            }

            Element::None => {}
        }
    }

    /// Calculate layout constraints and split the area
    fn calculate_layout(&self, layout: &ContainerLayout, area: Rect) -> Vec<Rect> {
        let (direction, constraints) = match layout {
            ContainerLayout::Vertical(constraints) => (Direction::Vertical, constraints),
        };

        let ratatui_constraints = constraints
            .iter()
            .map(|c| self.convert_constraint(*c))
            .collect::<Vec<_>>();

        RatatuiLayout::default()
            .direction(direction)
            .constraints(ratatui_constraints)
            .split(area)
            .to_vec()
    }

    /// Convert our Constraint type to ratatui's Constraint
    fn convert_constraint(&self, constraint: Constraint) -> RatatuiConstraint {
        match constraint {
            Constraint::Length(n) => RatatuiConstraint::Length(n),
            Constraint::Min(n) => RatatuiConstraint::Min(n),
            Constraint::Max(n) => RatatuiConstraint::Max(n),
            Constraint::Percentage(n) => RatatuiConstraint::Percentage(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::component::{overlay, vertical, ElementWidget};
    use ratatui::{
        text::Text,
        widgets::{Paragraph, Widget},
    };

    #[derive(Clone)]
    struct TestWidget {
        text: String,
    }

    impl ElementWidget for TestWidget {
        fn render(&self, area: Rect, buf: &mut Buffer, _config: &DisplayConfig) {
            Paragraph::new(Text::from(self.text.clone())).render(area, buf);
        }

        fn clone_box(&self) -> Box<dyn ElementWidget> {
            Box::new(self.clone())
        }
    }

    fn text(s: &str) -> Element {
        Element::widget(TestWidget { text: s.to_string() })
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_render_none() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 10, 10));
        Renderer::new().render(&Element::None, buffer.area, &mut buffer, &DisplayConfig::default());

        for y in 0..10 {
            assert_eq!(row(&buffer, y), " ".repeat(10));
        }
    }

    #[test]
    fn test_render_widget() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 10, 3));
        Renderer::new().render(&text("Hello"), buffer.area, &mut buffer, &DisplayConfig::default());
        assert!(row(&buffer, 0).starts_with("Hello"));
    }

    #[test]
    fn test_render_container_vertical() {
        let element = vertical(
            [Constraint::Length(1), Constraint::Length(1)],
            vec![text("Top"), text("Bottom")],
        );
        let mut buffer = Buffer::empty(Rect::new(0, 0, 10, 2));
        Renderer::new().render(&element, buffer.area, &mut buffer, &DisplayConfig::default());

        assert!(row(&buffer, 0).starts_with("Top"));
        assert!(row(&buffer, 1).starts_with("Bottom"));
    }

    #[test]
    fn test_render_overlay_draws_on_top() {
        let element = overlay(text("base text"), text("TOP"));
        let mut buffer = Buffer::empty(Rect::new(0, 0, 10, 1));
        Renderer::new().render(&element, buffer.area, &mut buffer, &DisplayConfig::default());

        assert_eq!(row(&buffer, 0), "TOPe text ");
    }
}
