//! Core search machinery for the `postscout` terminal interface.
//!
//! The root module primarily re-exports types from the feature modules
//! so that embedders can drive a search session without digging through
//! the module hierarchy.

pub mod catalog;
mod error;
mod outcome;
pub mod search;

pub use crate::catalog::{Post, PostCatalog, PostSource, builtin_posts};
pub use crate::error::CatalogError;
pub use crate::outcome::PickOutcome;
pub use crate::search::{
	CategoryFilter, SearchController, SearchQuery, SearchState, SearchTimings,
};
