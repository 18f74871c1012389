use crate::tui::component::{Component, Element};
use crate::tui::state::AppState;
use crate::tui::widgets::MonthSheetWidget;

/// MonthSelector component - the jump-to-month sheet, when open
pub struct MonthSelector;

impl Component for MonthSelector {
    type Props = AppState;

    fn view(&self, props: &Self::Props) -> Element {
        if !props.selector.open {
            return Element::None;
        }
        Element::widget(MonthSheetWidget::new(
            props.picker.window.labels(),
            props.picker.current_month,
            props.selector.scroll_offset,
        ))
    }
}
