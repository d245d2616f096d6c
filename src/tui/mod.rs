//! TUI module for the interactive portfolio view.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, Action, Transition)
//! - `timer`, `typewriter`: clock-free animation machinery
//! - `update`: pure transitions
//! - `view`: pure rendering and hit-testing
//! - `run`: effects (terminal, input thread, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod timer;
pub mod typewriter;
pub mod update;
pub mod view;

pub use run::{run, RunConfig};
