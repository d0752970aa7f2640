//! Background search worker thread and command infrastructure.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::catalog::{PostCatalog, PostSource};
use crate::search::query::{SearchQuery, filter_posts};

/// Commands understood by the background search worker.
#[derive(Debug)]
pub enum SearchCommand {
	/// Run the filter for the provided query.
	Query {
		/// Identifier that allows the controller to correlate responses with
		/// the originating query.
		id: u64,
		query: SearchQuery,
	},
	/// Stop the background worker thread.
	Shutdown,
}

/// Completed filter run reported back to the controller.
#[derive(Debug)]
pub struct SearchResponse {
	pub id: u64,
	/// Matching catalog indices, in catalog order.
	pub matched: Vec<usize>,
}

/// Launches the background search worker thread and returns communication
/// channels plus the shared latest-query marker.
pub fn spawn(
	catalog: Arc<PostCatalog>,
	latency: Duration,
) -> (
	Sender<SearchCommand>,
	Receiver<SearchResponse>,
	Arc<AtomicU64>,
) {
	let (command_tx, command_rx) = mpsc::channel();
	let (response_tx, response_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::spawn(move || worker_loop(&catalog, &command_rx, &response_tx, &thread_latest, latency));

	(command_tx, response_rx, latest_query_id)
}

fn worker_loop(
	catalog: &PostCatalog,
	command_rx: &Receiver<SearchCommand>,
	response_tx: &Sender<SearchResponse>,
	latest_query_id: &AtomicU64,
	latency: Duration,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(catalog, response_tx, latest_query_id, latency, command) {
			break;
		}
	}
}

fn handle_command(
	catalog: &PostCatalog,
	response_tx: &Sender<SearchResponse>,
	latest_query_id: &AtomicU64,
	latency: Duration,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Query { id, query } => {
			// Simulated network latency. It is not interruptible mid-flight;
			// staleness is handled by the latest-query check below and by the
			// controller discarding superseded responses.
			if !latency.is_zero() {
				thread::sleep(latency);
			}
			if latest_query_id.load(Ordering::Acquire) != id {
				debug!(id, "dropping superseded query");
				return true;
			}
			let matched = filter_posts(catalog.posts(), &query);
			debug!(id, matches = matched.len(), "query complete");
			response_tx.send(SearchResponse { id, matched }).is_ok()
		}
		SearchCommand::Shutdown => false,
	}
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc::RecvTimeoutError;

	use super::*;
	use crate::search::CategoryFilter;

	fn catalog() -> Arc<PostCatalog> {
		Arc::new(PostCatalog::builtin())
	}

	#[test]
	fn worker_answers_the_latest_query() {
		let (tx, rx, latest) = spawn(catalog(), Duration::ZERO);
		latest.store(1, Ordering::Release);
		tx.send(SearchCommand::Query {
			id: 1,
			query: SearchQuery::new("tailwind", CategoryFilter::All),
		})
		.expect("send");

		let response = rx
			.recv_timeout(Duration::from_secs(1))
			.expect("response for latest query");
		assert_eq!(response.id, 1);
		assert_eq!(response.matched, vec![6]);
		tx.send(SearchCommand::Shutdown).expect("shutdown");
	}

	#[test]
	fn worker_skips_superseded_queries() {
		let (tx, rx, latest) = spawn(catalog(), Duration::ZERO);
		// The burst continued: query 1 is already stale by the time the
		// worker picks it up.
		latest.store(2, Ordering::Release);
		tx.send(SearchCommand::Query {
			id: 1,
			query: SearchQuery::new("react", CategoryFilter::All),
		})
		.expect("send stale");
		tx.send(SearchCommand::Query {
			id: 2,
			query: SearchQuery::new("tailwind", CategoryFilter::All),
		})
		.expect("send latest");

		let response = rx
			.recv_timeout(Duration::from_secs(1))
			.expect("response for latest query");
		assert_eq!(response.id, 2);

		assert!(matches!(
			rx.recv_timeout(Duration::from_millis(50)),
			Err(RecvTimeoutError::Timeout)
		));
		tx.send(SearchCommand::Shutdown).expect("shutdown");
	}
}
