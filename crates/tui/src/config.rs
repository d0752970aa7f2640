/// Textual configuration used when rendering the search screen.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Prompt title rendered before the search input.
	pub prompt_title: String,
	/// Placeholder text shown while the input is empty.
	pub placeholder: String,
	/// Title rendered on the results block.
	pub table_title: String,
	/// Label for the catch-all category tab.
	pub all_categories: String,
	/// Headline of the empty-results state.
	pub empty_title: String,
	/// Secondary line of the empty-results state.
	pub empty_hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			prompt_title: "Blog Search".to_string(),
			placeholder: "Search posts...".to_string(),
			table_title: "Posts".to_string(),
			all_categories: "All Categories".to_string(),
			empty_title: "No results found".to_string(),
			empty_hint: "Try a different search term or filter.".to_string(),
		}
	}
}
