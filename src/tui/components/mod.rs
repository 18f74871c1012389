// Component library exports

pub mod app;
pub mod header;
pub mod hint_bar;
pub mod month_badge;
pub mod month_list;
pub mod month_selector;

pub use app::App;
pub use header::Header;
pub use hint_bar::HintBar;
pub use month_badge::MonthBadge;
pub use month_list::MonthList;
pub use month_selector::MonthSelector;
