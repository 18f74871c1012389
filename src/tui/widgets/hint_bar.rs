/// HintBar widget - keyboard hints at the bottom of the screen
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::config::DisplayConfig;
use crate::tui::component::ElementWidget;

/// Represents the style of a key hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHintStyle {
    /// Normal hint (default styling)
    Normal,
    /// Important hint (highlighted)
    Important,
    /// Subtle hint (dimmed)
    Subtle,
}

/// Represents a keyboard hint displayed in the hint bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// The keyboard key (e.g., "q", "Esc")
    pub key: String,
    /// The action description (e.g., "Quit", "Close")
    pub action: String,
    /// The visual style for this hint
    pub style: KeyHintStyle,
}

impl KeyHint {
    /// Create a new normal key hint
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
            style: KeyHintStyle::Normal,
        }
    }

    /// Create a new key hint with a specific style
    pub fn with_style(key: impl Into<String>, action: impl Into<String>, style: KeyHintStyle) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
            style,
        }
    }

    fn spans(&self, config: &DisplayConfig) -> [Span<'_>; 3] {
        let (key_style, action_style) = match self.style {
            KeyHintStyle::Normal => (
                Style::default().fg(config.accent_fg).add_modifier(Modifier::BOLD),
                Style::default(),
            ),
            KeyHintStyle::Important => (
                Style::default()
                    .fg(config.accent_fg)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            KeyHintStyle::Subtle => (
                Style::default().fg(config.muted_fg),
                Style::default().fg(config.muted_fg),
            ),
        };
        [
            Span::styled(self.key.as_str(), key_style),
            Span::raw(" "),
            Span::styled(self.action.as_str(), action_style),
        ]
    }
}

/// Widget for displaying keyboard hints
#[derive(Debug, Clone)]
pub struct HintBarWidget {
    pub hints: Vec<KeyHint>,
}

impl HintBarWidget {
    pub fn new(hints: Vec<KeyHint>) -> Self {
        Self { hints }
    }
}

impl ElementWidget for HintBarWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 {
            return;
        }
        let mut spans = vec![Span::raw(" ")];
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.extend(hint.spans(config));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
