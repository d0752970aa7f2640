use serde::Serialize;

use crate::catalog::Post;

/// Result of an interactive search session, reported when the UI exits.
#[derive(Debug, Clone, Serialize)]
pub struct PickOutcome {
	/// Whether the user accepted a selection rather than cancelling.
	pub accepted: bool,
	/// The search term at exit time.
	pub query: String,
	/// The category filter label at exit time (`"all"` or a category name).
	pub category: String,
	/// The accepted post, if any.
	pub selection: Option<Post>,
}
