use crate::tui::component::{Component, Element};
use crate::tui::state::AppState;
use crate::tui::widgets::{HintBarWidget, KeyHint, KeyHintStyle};

/// HintBar component - key hints for whatever currently has input
pub struct HintBar;

impl HintBar {
    pub fn hints(state: &AppState) -> Vec<KeyHint> {
        if state.selector.open {
            return vec![
                KeyHint::new("j/k", "Scroll"),
                KeyHint::with_style("Esc", "Close", KeyHintStyle::Important),
                KeyHint::new("q", "Quit"),
            ];
        }

        let clear_style = if state.picker.range().is_empty() {
            KeyHintStyle::Subtle
        } else {
            KeyHintStyle::Normal
        };
        vec![
            KeyHint::new("j/k", "Scroll"),
            KeyHint::new("m", "Months"),
            KeyHint::new("t", "Today"),
            KeyHint::with_style("c", "Clear", clear_style),
            KeyHint::new("q", "Quit"),
        ]
    }
}

impl Component for HintBar {
    type Props = AppState;

    fn view(&self, props: &Self::Props) -> Element {
        Element::widget(HintBarWidget::new(Self::hints(props)))
    }
}
