/// Widgets rendered by the picker's components
///
/// Each widget implements `ElementWidget`, drawing itself straight into a
/// ratatui `Buffer` so it can be tested against a plain buffer.
pub mod badge;
pub mod header;
pub mod hint_bar;
pub mod month_list;
pub mod month_sheet;

pub use badge::MonthBadgeWidget;
pub use header::HeaderWidget;
pub use hint_bar::{HintBarWidget, KeyHint, KeyHintStyle};
pub use month_list::{MonthListWidget, MonthSection};
pub use month_sheet::MonthSheetWidget;
