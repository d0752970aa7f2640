use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for the various UI elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Style for headers and borders.
	pub header: Style,
	/// Style for the highlighted result row.
	pub row_highlight: Style,
	/// Style for the prompt title.
	pub prompt: Style,
	/// Style for muted text such as placeholders and empty states.
	pub empty: Style,
	/// Style for category badges.
	pub badge: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn badge_style(&self) -> Style {
		self.badge
	}

	/// Returns the style for inactive category tabs.
	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new().fg(self.empty.fg.unwrap_or(Color::Reset))
	}

	/// Returns the style for the selected category tab.
	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		self.row_highlight
	}
}

/// The theme used when no explicit selection is made.
#[must_use]
pub fn default_theme() -> Theme {
	Theme {
		header: Style::new().fg(Color::Cyan),
		row_highlight: Style::new()
			.fg(Color::Black)
			.bg(Color::Cyan)
			.add_modifier(Modifier::BOLD),
		prompt: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
		empty: Style::new().fg(Color::DarkGray),
		badge: Style::new().fg(Color::Black).bg(Color::Green),
	}
}

fn light_theme() -> Theme {
	Theme {
		header: Style::new().fg(Color::Blue),
		row_highlight: Style::new()
			.fg(Color::White)
			.bg(Color::Blue)
			.add_modifier(Modifier::BOLD),
		prompt: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
		empty: Style::new().fg(Color::Gray),
		badge: Style::new().fg(Color::White).bg(Color::Magenta),
	}
}

fn mono_theme() -> Theme {
	Theme {
		header: Style::new(),
		row_highlight: Style::new().add_modifier(Modifier::REVERSED),
		prompt: Style::new().add_modifier(Modifier::BOLD),
		empty: Style::new().add_modifier(Modifier::DIM),
		badge: Style::new().add_modifier(Modifier::REVERSED),
	}
}

const THEMES: [(&str, fn() -> Theme); 3] = [
	("default", default_theme),
	("light", light_theme),
	("mono", mono_theme),
];

/// Names of the builtin themes, in registration order.
#[must_use]
pub fn theme_names() -> Vec<&'static str> {
	THEMES.iter().map(|(name, _)| *name).collect()
}

/// Look up a builtin theme by name (case-insensitive).
#[must_use]
pub fn theme_by_name(name: &str) -> Option<Theme> {
	let wanted = name.trim().to_ascii_lowercase();
	THEMES
		.iter()
		.find(|(candidate, _)| *candidate == wanted)
		.map(|(_, build)| build())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_listed_theme_resolves() {
		for name in theme_names() {
			assert!(theme_by_name(name).is_some(), "theme {name} missing");
		}
	}

	#[test]
	fn lookup_is_case_insensitive() {
		assert!(theme_by_name("MONO").is_some());
		assert!(theme_by_name("unknown").is_none());
	}
}
