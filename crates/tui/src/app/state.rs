//! Core state container for the terminal application's front-end.

use std::sync::Arc;
use std::time::Instant;

use postscout_core::{
	CategoryFilter, PickOutcome, Post, PostCatalog, SearchController, SearchTimings,
};
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use crate::config::UiLabels;
use crate::input::SearchInput;
use crate::style::{StyleConfig, Theme};

/// Sentinel tab index used when the active category filter does not appear in
/// the selector (an unknown category supplied at startup).
pub(crate) const NO_TAB: usize = usize::MAX;

/// Aggregate state shared across the terminal UI.
///
/// The `App` owns the search controller, the input widget, and the UI
/// affordances around them (selection, spinner, labels, theme).
pub struct App<'a> {
	pub(crate) controller: SearchController,
	/// Text input widget for the search term.
	pub search_input: SearchInput<'a>,
	/// Selection state for the results list.
	pub table_state: TableState,
	pub(crate) labels: UiLabels,
	pub(crate) style: StyleConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) categories: Vec<String>,
	pub(crate) category_index: usize,
}

impl<'a> App<'a> {
	/// Construct an [`App`] over the provided catalog.
	#[must_use]
	pub fn new(catalog: Arc<PostCatalog>, timings: SearchTimings) -> Self {
		let categories = catalog.categories().to_vec();
		let controller = SearchController::new(catalog, timings);
		let mut table_state = TableState::default();
		table_state.select(Some(0));

		Self {
			controller,
			search_input: SearchInput::default(),
			table_state,
			labels: UiLabels::default(),
			style: StyleConfig::default(),
			throbber_state: ThrobberState::default(),
			categories,
			category_index: 0,
		}
	}

	/// Replace the UI labels.
	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	/// Apply a theme.
	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.style.theme = theme;
		self
	}

	/// Seed the search input with an initial term.
	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		let query = query.into();
		self.search_input = SearchInput::new(query.clone());
		self.controller.set_term(query, Instant::now());
		self
	}

	/// Start with a category filter. Unknown labels are applied verbatim
	/// (matching nothing) and leave the selector unhighlighted.
	#[must_use]
	pub fn with_category(mut self, label: &str) -> Self {
		let filter = CategoryFilter::parse(label);
		self.category_index = match &filter {
			CategoryFilter::All => 0,
			CategoryFilter::One(category) => self
				.categories
				.iter()
				.position(|candidate| candidate == category)
				.map(|index| index + 1)
				.unwrap_or(NO_TAB),
		};
		self.controller.set_category(filter, Instant::now());
		self
	}

	/// Arm the initial search so the list populates shortly after launch.
	pub(crate) fn hydrate(&mut self, now: Instant) {
		self.controller.hydrate(now);
	}

	/// Number of selector tabs, including the catch-all.
	pub(crate) fn tab_count(&self) -> usize {
		self.categories.len() + 1
	}

	/// Category filter represented by a selector index.
	pub(crate) fn filter_for_index(&self, index: usize) -> CategoryFilter {
		if index == 0 || index == NO_TAB {
			CategoryFilter::All
		} else {
			self.categories
				.get(index - 1)
				.map(|category| CategoryFilter::One(category.clone()))
				.unwrap_or(CategoryFilter::All)
		}
	}

	/// Move the category selector and reschedule the search.
	pub(crate) fn cycle_category(&mut self, forward: bool, now: Instant) {
		let count = self.tab_count();
		self.category_index = if self.category_index == NO_TAB {
			0
		} else if forward {
			(self.category_index + 1) % count
		} else {
			(self.category_index + count - 1) % count
		};
		let filter = self.filter_for_index(self.category_index);
		self.controller.set_category(filter, now);
	}

	/// Number of posts in the current result list.
	pub(crate) fn filtered_len(&self) -> usize {
		self.controller.state().matched.len()
	}

	/// Ensure the row selection remains valid for the current result list.
	pub(crate) fn ensure_selection(&mut self) {
		let len = self.filtered_len();
		if len == 0 {
			self.table_state.select(None);
		} else if self.table_state.selected().is_none() {
			self.table_state.select(Some(0));
		} else if let Some(selected) = self.table_state.selected()
			&& selected >= len
		{
			self.table_state.select(Some(len.saturating_sub(1)));
		}
	}

	/// The post under the cursor, if any.
	pub(crate) fn current_selection(&self) -> Option<Post> {
		let selected = self.table_state.selected()?;
		let index = *self.controller.state().matched.get(selected)?;
		self.controller.catalog().get(index).cloned()
	}

	/// Snapshot the session outcome for the caller.
	pub(crate) fn outcome(&self, accepted: bool) -> PickOutcome {
		PickOutcome {
			accepted,
			query: self.search_input.text().to_string(),
			category: self.controller.state().category.label().to_string(),
			selection: accepted.then(|| self.current_selection()).flatten(),
		}
	}

	pub(crate) fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	pub(crate) fn move_selection_down(&mut self) {
		if let Some(selected) = self.table_state.selected() {
			let len = self.filtered_len();
			if selected + 1 < len {
				self.table_state.select(Some(selected + 1));
			}
		}
	}
}

/// Build an app over the builtin catalog with zero delays, for tests.
#[cfg(test)]
pub(crate) fn test_app() -> App<'static> {
	use std::time::Duration;

	let timings = SearchTimings {
		debounce: Duration::ZERO,
		latency: Duration::ZERO,
	};
	App::new(Arc::new(PostCatalog::builtin()), timings)
}

/// Drive the controller until the pending search completes, for tests.
#[cfg(test)]
pub(crate) fn settle(app: &mut App<'_>) {
	use std::time::Duration;

	let deadline = Instant::now() + Duration::from_secs(2);
	while Instant::now() < deadline {
		app.pump_search(Instant::now());
		if !app.controller.state().loading && !app.controller.pending() {
			return;
		}
		std::thread::sleep(Duration::from_millis(2));
	}
	panic!("search did not settle in time");
}
