use tracing::trace;

use crate::grid::MonthGrid;
use crate::tui::component::{Component, Element};
use crate::tui::state::AppState;
use crate::tui::widgets::{MonthListWidget, MonthSection};

/// MonthList component - the scrollable stack of month grids
///
/// Grids are built only for the months intersecting the viewport, each from
/// the current range snapshot.
pub struct MonthList;

impl Component for MonthList {
    type Props = AppState;

    fn view(&self, props: &Self::Props) -> Element {
        let range = props.picker.range();
        let sections: Vec<MonthSection> = props
            .scroll
            .visible_months()
            .filter_map(|(index, extent)| {
                let month = props.picker.window.month(index)?;
                Some(MonthSection {
                    grid: MonthGrid::build(month, &range, props.picker.today),
                    extent,
                })
            })
            .collect();

        trace!(
            "MONTH_LIST: {} sections visible at offset {}",
            sections.len(),
            props.scroll.offset()
        );
        Element::widget(MonthListWidget::new(sections, props.scroll.offset()))
    }
}
