pub mod commands;
pub mod config;
pub mod dates;
pub mod error;
pub mod formatting;
pub mod grid;
pub mod scroll;
pub mod selection;
pub mod tui;
pub mod window;
