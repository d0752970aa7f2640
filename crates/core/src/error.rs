use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or loading a [`PostCatalog`](crate::PostCatalog).
#[derive(Debug, Error)]
pub enum CatalogError {
	/// Two posts in the catalog share the same identifier.
	#[error("post id {id} is defined more than once")]
	DuplicateId { id: u64 },

	/// The catalog file could not be read from disk.
	#[error("failed to read catalog file {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The catalog file is not valid JSON for a list of posts.
	#[error("failed to parse catalog file {path}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}
