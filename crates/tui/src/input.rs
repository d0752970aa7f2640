//! Single-line search input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Text input widget for the search filter.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	/// Create an input seeded with the provided text, cursor at the end.
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::from([initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current input text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key event into the input. Returns `true` when the text changed.
	///
	/// Enter and Tab never reach the textarea; the input stays single-line
	/// and those keys belong to the surrounding application.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		match key.code {
			KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab => false,
			_ => self.textarea.input(key),
		}
	}

	/// Render the textarea into the provided area.
	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

impl Default for SearchInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyEvent, KeyModifiers};

	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_changes_the_text() {
		let mut input = SearchInput::default();
		assert!(input.input(key(KeyCode::Char('h'))));
		assert!(input.input(key(KeyCode::Char('i'))));
		assert_eq!(input.text(), "hi");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "h");
	}

	#[test]
	fn enter_and_tab_are_ignored() {
		let mut input = SearchInput::new("query");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(key(KeyCode::Tab)));
		assert_eq!(input.text(), "query");
	}

	#[test]
	fn initial_text_is_preserved() {
		let input = SearchInput::new("react");
		assert_eq!(input.text(), "react");
	}
}
