use crate::dates::format_month_year;
use crate::tui::component::{Component, Element};
use crate::tui::state::PickerState;
use crate::tui::widgets::MonthBadgeWidget;

/// Floating label naming the month nearest the viewport center
pub struct MonthBadge;

impl Component for MonthBadge {
    type Props = PickerState;

    fn view(&self, props: &Self::Props) -> Element {
        Element::widget(MonthBadgeWidget::new(format_month_year(
            props.current_month_date(),
        )))
    }
}
