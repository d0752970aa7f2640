//! Interactive terminal UI for searching the post catalog.
//!
//! This crate contains the full TUI application: the event loop, rendering
//! pipeline, state management, and the reusable widgets/style definitions
//! that power the search screen.

mod actions;
mod app;
pub mod components;
mod config;
pub mod input;
mod render;
mod runtime;
pub mod style;

pub use app::App;
pub use config::UiLabels;
pub use runtime::run;

pub use crate::input::SearchInput;
pub use crate::style::{StyleConfig, Theme, default_theme, theme_by_name, theme_names};
