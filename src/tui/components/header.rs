use crate::tui::component::{Component, Element};
use crate::tui::state::PickerState;
use crate::tui::widgets::HeaderWidget;

/// Header component - title, selected dates and the Clear button
pub struct Header;

impl Component for Header {
    type Props = PickerState;

    fn view(&self, props: &Self::Props) -> Element {
        Element::widget(HeaderWidget::new(props.range(), props.is_selecting()))
    }
}
