//! The post catalog and its data-provider contract.
//!
//! Catalogs are immutable once built: posts are loaded at startup, validated,
//! and never mutated for the lifetime of the session. The search layers only
//! ever see a catalog through the read-only [`PostSource`] trait so the demo
//! data can be swapped for a real backend without touching them.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A single blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
	/// Stable unique identifier.
	pub id: u64,
	pub title: String,
	pub category: String,
	pub content: String,
}

impl Post {
	/// Construct a post from its parts.
	#[must_use]
	pub fn new(
		id: u64,
		title: impl Into<String>,
		category: impl Into<String>,
		content: impl Into<String>,
	) -> Self {
		Self {
			id,
			title: title.into(),
			category: category.into(),
			content: content.into(),
		}
	}
}

/// Read-only provider of the posts available to a search session.
pub trait PostSource {
	/// All posts, in their canonical order.
	fn posts(&self) -> &[Post];
}

/// Validated, ordered collection of posts plus derived metadata.
#[derive(Debug, Clone)]
pub struct PostCatalog {
	posts: Vec<Post>,
	categories: Vec<String>,
}

impl PostCatalog {
	/// Build a catalog from a list of posts, validating id uniqueness and
	/// collecting the distinct categories in first-appearance order.
	pub fn from_posts(posts: Vec<Post>) -> Result<Self, CatalogError> {
		let mut seen = HashSet::new();
		let mut categories: Vec<String> = Vec::new();
		for post in &posts {
			if !seen.insert(post.id) {
				return Err(CatalogError::DuplicateId { id: post.id });
			}
			if !categories.iter().any(|category| category == &post.category) {
				categories.push(post.category.clone());
			}
		}
		Ok(Self { posts, categories })
	}

	/// The builtin demonstration catalog.
	#[must_use]
	pub fn builtin() -> Self {
		Self::from_posts(builtin_posts()).expect("builtin posts have unique ids")
	}

	/// Load a catalog from a JSON file containing an array of posts.
	pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
		let path = path.as_ref();
		let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let posts: Vec<Post> =
			serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
				path: path.to_path_buf(),
				source,
			})?;
		Self::from_posts(posts)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.posts.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.posts.is_empty()
	}

	/// Look up a post by catalog position.
	#[must_use]
	pub fn get(&self, index: usize) -> Option<&Post> {
		self.posts.get(index)
	}

	/// Distinct categories in first-appearance order.
	#[must_use]
	pub fn categories(&self) -> &[String] {
		&self.categories
	}
}

impl PostSource for PostCatalog {
	fn posts(&self) -> &[Post] {
		&self.posts
	}
}

/// The seven demonstration posts.
#[must_use]
pub fn builtin_posts() -> Vec<Post> {
	vec![
		Post::new(
			1,
			"Introduction to React",
			"React",
			"React is a popular JavaScript library for building user interfaces...",
		),
		Post::new(
			2,
			"Getting Started with Next.js",
			"Next.js",
			"Next.js is a powerful framework for building React applications...",
		),
		Post::new(
			3,
			"CSS-in-JS Solutions",
			"CSS",
			"CSS-in-JS is an approach to styling React components...",
		),
		Post::new(
			4,
			"State Management in React",
			"React",
			"Effective state management is crucial for building scalable React applications...",
		),
		Post::new(
			5,
			"Server-Side Rendering with Next.js",
			"Next.js",
			"Server-side rendering (SSR) is a technique for improving the performance and SEO of web applications...",
		),
		Post::new(
			6,
			"App routing with Next.js",
			"Next.js",
			"App routing is a technique that maps a specific URL to the function that performs a task",
		),
		Post::new(
			7,
			"Tailwind CSS",
			"CSS",
			"Tailwind CSS is a framework for styling React components...",
		),
	]
}
