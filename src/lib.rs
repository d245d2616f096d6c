//! termfolio: a personal portfolio as an interactive terminal UI.

pub mod content;
pub mod error;
pub mod logging;
pub mod report;
pub mod tui;
