//! Debounced search orchestration and observable state.
//!
//! The [`SearchController`] owns the search inputs, the debounce timer, and
//! the channels to the background worker, ensuring requests are sequenced
//! correctly and that only the newest results influence observable state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

use tracing::trace;

use crate::catalog::{Post, PostCatalog};
use crate::search::debounce::Debouncer;
use crate::search::query::{CategoryFilter, SearchQuery};
use crate::search::runtime::{self, SearchCommand, SearchResponse};

/// Fixed delays shaping the simulated search experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTimings {
	/// Quiet period required after the last input change before a search runs.
	pub debounce: Duration,
	/// Artificial latency of each search execution.
	pub latency: Duration,
}

impl Default for SearchTimings {
	fn default() -> Self {
		Self {
			debounce: Duration::from_millis(300),
			latency: Duration::from_millis(500),
		}
	}
}

/// Snapshot of the controller's observable state.
#[derive(Debug, Clone)]
pub struct SearchState {
	/// Current search term.
	pub term: String,
	/// Current category filter.
	pub category: CategoryFilter,
	/// Matching catalog indices as of the most recently completed,
	/// non-superseded search.
	pub matched: Vec<usize>,
	/// Whether a search is in flight.
	pub loading: bool,
}

type Listener = Box<dyn FnMut(&SearchState)>;

/// Maintains search/filter state and keeps the result list consistent with
/// the latest inputs, without redundant or stale recomputation.
///
/// Input changes arm a debounce deadline; [`tick`](Self::tick) dispatches the
/// query once the quiet period elapses and [`pump`](Self::pump) applies
/// completed results. Both take an explicit `now` so hosts drive time from
/// their own event loop.
pub struct SearchController {
	catalog: Arc<PostCatalog>,
	state: SearchState,
	debounce: Debouncer,
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchResponse>,
	latest_query_id: Arc<AtomicU64>,
	next_query_id: u64,
	current_query_id: Option<u64>,
	listeners: Vec<Listener>,
}

impl Drop for SearchController {
	fn drop(&mut self) {
		self.shutdown();
	}
}

impl SearchController {
	/// Construct a controller over the given catalog and spawn its worker.
	///
	/// Results start out as the full catalog, matching what an empty query
	/// would produce.
	#[must_use]
	pub fn new(catalog: Arc<PostCatalog>, timings: SearchTimings) -> Self {
		let (tx, rx, latest_query_id) = runtime::spawn(Arc::clone(&catalog), timings.latency);
		let matched = (0..catalog.len()).collect();

		Self {
			catalog,
			state: SearchState {
				term: String::new(),
				category: CategoryFilter::All,
				matched,
				loading: false,
			},
			debounce: Debouncer::new(timings.debounce),
			tx,
			rx,
			latest_query_id,
			next_query_id: 0,
			current_query_id: None,
			listeners: Vec::new(),
		}
	}

	/// The catalog this controller searches.
	#[must_use]
	pub fn catalog(&self) -> &PostCatalog {
		&self.catalog
	}

	/// Current observable state.
	#[must_use]
	pub fn state(&self) -> &SearchState {
		&self.state
	}

	/// The matched posts, resolved against the catalog.
	#[must_use]
	pub fn results(&self) -> Vec<&Post> {
		self.state
			.matched
			.iter()
			.filter_map(|&index| self.catalog.get(index))
			.collect()
	}

	/// Register a listener invoked after every state change.
	pub fn subscribe(&mut self, listener: impl FnMut(&SearchState) + 'static) {
		self.listeners.push(Box::new(listener));
	}

	/// Update the search term, re-arming the debounce timer. A no-op when
	/// the term is unchanged.
	pub fn set_term(&mut self, term: impl Into<String>, now: Instant) {
		let term = term.into();
		if term == self.state.term {
			return;
		}
		self.state.term = term;
		self.debounce.note_change(now);
		self.notify();
	}

	/// Update the category filter, re-arming the debounce timer. A no-op
	/// when the filter is unchanged.
	pub fn set_category(&mut self, category: CategoryFilter, now: Instant) {
		if category == self.state.category {
			return;
		}
		self.state.category = category;
		self.debounce.note_change(now);
		self.notify();
	}

	/// Arm the debounce on startup so the initial query executes once the
	/// quiet period elapses, mirroring a first render.
	pub fn hydrate(&mut self, now: Instant) {
		if self.current_query_id.is_none() && !self.debounce.is_armed() {
			self.debounce.note_change(now);
		}
	}

	/// Whether an input change is waiting on the quiet period.
	#[must_use]
	pub fn pending(&self) -> bool {
		self.debounce.is_armed()
	}

	/// Advance the debounce timer, dispatching the pending query once the
	/// quiet period has elapsed.
	pub fn tick(&mut self, now: Instant) {
		if self.debounce.fire_if_elapsed(now) {
			self.dispatch();
		}
	}

	/// Drain worker responses, applying only the latest query's results.
	/// Returns `true` when results were applied.
	pub fn pump(&mut self) -> bool {
		let mut applied = false;
		loop {
			match self.rx.try_recv() {
				Ok(response) => {
					if self.matches_latest(response.id) {
						self.state.matched = response.matched;
						self.state.loading = false;
						applied = true;
					}
				}
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
		if applied {
			self.notify();
		}
		applied
	}

	/// Stop the background worker.
	pub fn shutdown(&self) {
		let _ = self.tx.send(SearchCommand::Shutdown);
	}

	fn dispatch(&mut self) {
		self.next_query_id = self.next_query_id.saturating_add(1);
		let id = self.next_query_id;
		self.current_query_id = Some(id);
		self.latest_query_id.store(id, Ordering::Release);
		self.state.loading = true;

		let query = SearchQuery::new(self.state.term.clone(), self.state.category.clone());
		trace!(id, term = %query.term, category = %query.category, "dispatching query");
		let _ = self.tx.send(SearchCommand::Query { id, query });
		self.notify();
	}

	fn matches_latest(&self, id: u64) -> bool {
		Some(id) == self.current_query_id
	}

	fn notify(&mut self) {
		for listener in &mut self.listeners {
			listener(&self.state);
		}
	}

	#[cfg(test)]
	pub(crate) fn issued_queries(&self) -> u64 {
		self.next_query_id
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;
	use std::thread;

	use super::*;

	fn controller(timings: SearchTimings) -> SearchController {
		SearchController::new(Arc::new(PostCatalog::builtin()), timings)
	}

	fn quick_timings() -> SearchTimings {
		SearchTimings {
			debounce: Duration::from_millis(20),
			latency: Duration::from_millis(10),
		}
	}

	/// Drive tick/pump until the controller is idle again.
	fn settle(controller: &mut SearchController) {
		let deadline = Instant::now() + Duration::from_secs(2);
		while Instant::now() < deadline {
			controller.tick(Instant::now());
			controller.pump();
			if !controller.state().loading && !controller.pending() {
				return;
			}
			thread::sleep(Duration::from_millis(2));
		}
		panic!("controller did not settle in time");
	}

	#[test]
	fn hydrate_executes_the_initial_query_once() {
		let mut controller = controller(quick_timings());
		controller.hydrate(Instant::now());
		assert!(controller.pending());
		settle(&mut controller);
		assert_eq!(controller.state().matched, vec![0, 1, 2, 3, 4, 5, 6]);
		assert_eq!(controller.issued_queries(), 1);
	}

	#[test]
	fn burst_of_changes_executes_only_the_last_query() {
		let mut controller = controller(quick_timings());
		let now = Instant::now();
		controller.set_term("t1", now);
		controller.set_term("t2", now + Duration::from_millis(5));
		controller.set_term("tailwind", now + Duration::from_millis(10));
		settle(&mut controller);

		assert_eq!(controller.issued_queries(), 1);
		assert_eq!(controller.state().matched, vec![6]);
		assert!(!controller.state().loading);
	}

	#[test]
	fn pending_change_does_not_set_loading() {
		let mut controller = controller(quick_timings());
		let now = Instant::now();
		controller.set_term("react", now);
		assert!(controller.pending());
		assert!(!controller.state().loading);
		// Well before the quiet period has elapsed nothing is dispatched.
		controller.tick(now + Duration::from_millis(1));
		assert!(!controller.state().loading);
		assert_eq!(controller.issued_queries(), 0);
	}

	#[test]
	fn superseded_in_flight_results_are_never_applied() {
		let mut controller = controller(SearchTimings {
			debounce: Duration::from_millis(5),
			latency: Duration::from_millis(50),
		});
		let react_matches: Vec<usize> = vec![0, 1, 2, 3, 6];
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&seen);
		controller.subscribe(move |state| sink.borrow_mut().push(state.matched.clone()));

		controller.set_term("react", Instant::now());
		// Let the first query reach the worker, then supersede it mid-flight.
		let deadline = Instant::now() + Duration::from_secs(2);
		while !controller.state().loading && Instant::now() < deadline {
			controller.tick(Instant::now());
			thread::sleep(Duration::from_millis(1));
		}
		assert!(controller.state().loading, "first query never dispatched");
		controller.set_term("tailwind", Instant::now());
		settle(&mut controller);

		assert_eq!(controller.issued_queries(), 2);
		assert_eq!(controller.state().matched, vec![6]);
		assert!(
			seen.borrow().iter().all(|matched| matched != &react_matches),
			"stale results leaked into observable state"
		);
	}

	#[test]
	fn listeners_observe_every_state_change() {
		let mut controller = controller(quick_timings());
		let events = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&events);
		controller.subscribe(move |state| {
			sink.borrow_mut().push((state.term.clone(), state.loading));
		});

		controller.set_term("css", Instant::now());
		settle(&mut controller);

		let events = events.borrow();
		assert_eq!(events.first(), Some(&("css".to_string(), false)));
		assert!(events.contains(&("css".to_string(), true)), "no dispatch notification");
		assert_eq!(events.last(), Some(&("css".to_string(), false)));
	}

	#[test]
	fn unchanged_inputs_do_not_rearm_the_debounce() {
		let mut controller = controller(quick_timings());
		controller.set_term("react", Instant::now());
		settle(&mut controller);
		controller.set_term("react", Instant::now());
		controller.set_category(CategoryFilter::All, Instant::now());
		assert!(!controller.pending());
		assert_eq!(controller.issued_queries(), 1);
	}

	#[test]
	fn category_and_term_compose_in_results() {
		let mut controller = controller(quick_timings());
		let now = Instant::now();
		controller.set_term("react", now);
		controller.set_category(CategoryFilter::parse("React"), now);
		settle(&mut controller);

		let titles: Vec<&str> = controller
			.results()
			.into_iter()
			.map(|post| post.title.as_str())
			.collect();
		assert_eq!(
			titles,
			["Introduction to React", "State Management in React"]
		);
	}
}
