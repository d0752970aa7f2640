//! UI building blocks shared across rendering and state modules.

/// Result card row construction.
pub mod cards;
/// Input prompt rendering and spinner display.
pub mod prompt;
/// Category tab selector.
pub mod tabs;

pub use cards::build_post_rows;
pub use prompt::{InputContext, SpinnerState, render_search_row};
pub use tabs::TabItem;
