pub mod month_selector;
pub mod scroll;
pub mod selection;

pub use month_selector::reduce_month_selector;
pub use scroll::reduce_scroll;
pub use selection::reduce_selection;
