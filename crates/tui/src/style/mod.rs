//! Style and theme configuration for the terminal UI.

mod theme;

pub use theme::{Theme, default_theme, theme_by_name, theme_names};

/// Current style configuration for an application instance.
#[derive(Debug, Clone, Copy)]
pub struct StyleConfig {
	pub theme: Theme,
}

impl Default for StyleConfig {
	fn default() -> Self {
		Self {
			theme: default_theme(),
		}
	}
}
