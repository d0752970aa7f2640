use std::fmt;

use crate::catalog::Post;

/// Category restriction applied on top of the text match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
	/// Accept every category.
	All,
	/// Accept only posts whose category equals the label exactly.
	One(String),
}

impl CategoryFilter {
	/// Parse a filter label. `"all"` (case-insensitive) selects every
	/// category; any other label is taken verbatim, so an unknown category
	/// simply matches nothing.
	#[must_use]
	pub fn parse(value: &str) -> Self {
		let trimmed = value.trim();
		if trimmed.eq_ignore_ascii_case("all") {
			Self::All
		} else {
			Self::One(trimmed.to_string())
		}
	}

	/// The label form consumed by [`parse`](Self::parse).
	#[must_use]
	pub fn label(&self) -> &str {
		match self {
			Self::All => "all",
			Self::One(category) => category,
		}
	}

	/// Whether a post with the given category passes this filter.
	#[must_use]
	pub fn accepts(&self, category: &str) -> bool {
		match self {
			Self::All => true,
			Self::One(wanted) => wanted == category,
		}
	}
}

impl Default for CategoryFilter {
	fn default() -> Self {
		Self::All
	}
}

impl fmt::Display for CategoryFilter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// A fully specified search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
	pub term: String,
	pub category: CategoryFilter,
}

impl SearchQuery {
	#[must_use]
	pub fn new(term: impl Into<String>, category: CategoryFilter) -> Self {
		Self {
			term: term.into(),
			category,
		}
	}

	/// Whether the post matches this query: a case-insensitive substring
	/// match against title or content, and the category filter. An empty
	/// term matches every post.
	#[must_use]
	pub fn matches(&self, post: &Post) -> bool {
		if !self.category.accepts(&post.category) {
			return false;
		}
		if self.term.is_empty() {
			return true;
		}
		let needle = self.term.to_lowercase();
		post.title.to_lowercase().contains(&needle)
			|| post.content.to_lowercase().contains(&needle)
	}
}

/// Indices of the posts matching the query, preserving catalog order.
///
/// The predicate is total: every input produces a valid, possibly empty
/// result and the relative order of matches is always the catalog order.
#[must_use]
pub fn filter_posts(posts: &[Post], query: &SearchQuery) -> Vec<usize> {
	posts
		.iter()
		.enumerate()
		.filter(|(_, post)| query.matches(post))
		.map(|(index, _)| index)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::builtin_posts;

	fn ids_for(term: &str, category: CategoryFilter) -> Vec<u64> {
		let posts = builtin_posts();
		let query = SearchQuery::new(term, category);
		filter_posts(&posts, &query)
			.into_iter()
			.map(|index| posts[index].id)
			.collect()
	}

	#[test]
	fn empty_term_and_all_categories_matches_everything_in_order() {
		assert_eq!(ids_for("", CategoryFilter::All), vec![1, 2, 3, 4, 5, 6, 7]);
	}

	#[test]
	fn term_matches_title_and_content_case_insensitively() {
		assert_eq!(ids_for("react", CategoryFilter::All), vec![1, 2, 3, 4, 7]);
		assert_eq!(ids_for("REACT", CategoryFilter::All), vec![1, 2, 3, 4, 7]);
	}

	#[test]
	fn category_filter_restricts_without_a_term() {
		assert_eq!(ids_for("", CategoryFilter::parse("CSS")), vec![3, 7]);
	}

	#[test]
	fn term_and_category_compose() {
		assert_eq!(
			ids_for("react", CategoryFilter::parse("React")),
			vec![1, 4]
		);
	}

	#[test]
	fn unmatched_term_yields_empty_results() {
		assert_eq!(ids_for("xyz-no-match", CategoryFilter::All), Vec::<u64>::new());
	}

	#[test]
	fn unknown_category_yields_empty_results() {
		assert_eq!(ids_for("", CategoryFilter::parse("Svelte")), Vec::<u64>::new());
	}

	#[test]
	fn filtering_is_idempotent() {
		let posts = builtin_posts();
		let query = SearchQuery::new("next", CategoryFilter::All);
		assert_eq!(filter_posts(&posts, &query), filter_posts(&posts, &query));
	}

	#[test]
	fn all_label_parses_case_insensitively() {
		assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
		assert_eq!(CategoryFilter::parse(" ALL "), CategoryFilter::All);
		assert_eq!(
			CategoryFilter::parse("React"),
			CategoryFilter::One("React".into())
		);
	}
}
