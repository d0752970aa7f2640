use std::time::Instant;

use postscout_core::PickOutcome;
use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;

impl App<'_> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<PickOutcome> {
		match key.code {
			KeyCode::Esc => {
				return Some(self.outcome(false));
			}
			KeyCode::Enter => {
				return Some(self.outcome(true));
			}
			KeyCode::Tab => {
				self.cycle_category(true, now);
			}
			KeyCode::BackTab => {
				self.cycle_category(false, now);
			}
			KeyCode::Up => {
				self.move_selection_up();
			}
			KeyCode::Down => {
				self.move_selection_down();
			}
			_ => {
				if self.search_input.input(key) {
					self.controller.set_term(self.search_input.text(), now);
				}
			}
		}
		None
	}
}

#[cfg(test)]
mod tests {
	use postscout_core::CategoryFilter;
	use ratatui::crossterm::event::KeyModifiers;

	use super::*;
	use crate::app::state::{settle, test_app};

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_updates_the_controller_term() {
		let mut app = test_app();
		let now = Instant::now();
		assert!(app.handle_key(key(KeyCode::Char('c')), now).is_none());
		assert!(app.handle_key(key(KeyCode::Char('s')), now).is_none());
		assert!(app.handle_key(key(KeyCode::Char('s')), now).is_none());
		assert_eq!(app.controller.state().term, "css");
		assert!(app.controller.pending());
	}

	#[test]
	fn tab_cycles_to_the_first_category() {
		let mut app = test_app();
		app.handle_key(key(KeyCode::Tab), Instant::now());
		assert_eq!(
			app.controller.state().category,
			CategoryFilter::One("React".into())
		);
		app.handle_key(key(KeyCode::BackTab), Instant::now());
		assert_eq!(app.controller.state().category, CategoryFilter::All);
	}

	#[test]
	fn escape_reports_a_cancelled_session() {
		let mut app = test_app();
		let outcome = app
			.handle_key(key(KeyCode::Esc), Instant::now())
			.expect("outcome");
		assert!(!outcome.accepted);
	}

	#[test]
	fn enter_accepts_the_highlighted_post() {
		let mut app = test_app();
		app.hydrate(Instant::now());
		settle(&mut app);
		app.handle_key(key(KeyCode::Down), Instant::now());
		let outcome = app
			.handle_key(key(KeyCode::Enter), Instant::now())
			.expect("outcome");
		assert!(outcome.accepted);
		assert_eq!(outcome.selection.map(|post| post.id), Some(2));
	}
}
