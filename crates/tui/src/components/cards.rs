use postscout_core::Post;
use ratatui::text::Span;
use ratatui::widgets::{Cell, Row};
use unicode_width::UnicodeWidthChar;

use crate::style::Theme;

/// Build table rows for the matched posts: title, category badge, and a
/// truncated slice of the content.
#[must_use]
pub fn build_post_rows<'a>(
	matched: &[usize],
	posts: &'a [Post],
	content_width: Option<u16>,
	theme: &Theme,
) -> Vec<Row<'a>> {
	matched
		.iter()
		.filter_map(|&index| {
			let post = posts.get(index)?;
			let content = match content_width {
				Some(width) => truncate_to_width(&post.content, width as usize),
				None => post.content.clone(),
			};
			Some(Row::new([
				Cell::from(post.title.as_str()),
				Cell::from(Span::styled(
					format!(" {} ", post.category),
					theme.badge_style(),
				)),
				Cell::from(content),
			]))
		})
		.collect()
}

/// Truncate `text` to at most `max_width` display columns, appending an
/// ellipsis when anything was cut.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
	if max_width == 0 {
		return String::new();
	}
	let total: usize = text.chars().map(|ch| ch.width().unwrap_or(0)).sum();
	if total <= max_width {
		return text.to_string();
	}

	// Reserve one column for the ellipsis.
	let limit = max_width - 1;
	let mut width = 0usize;
	let mut truncated = String::new();
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if width + ch_width > limit {
			break;
		}
		width += ch_width;
		truncated.push(ch);
	}
	truncated.push('…');
	truncated
}

#[cfg(test)]
mod tests {
	use postscout_core::builtin_posts;

	use super::*;
	use crate::style::default_theme;

	#[test]
	fn rows_follow_the_matched_order() {
		let posts = builtin_posts();
		let rows = build_post_rows(&[2, 6], &posts, None, &default_theme());
		assert_eq!(rows.len(), 2);
	}

	#[test]
	fn out_of_range_indices_are_skipped() {
		let posts = builtin_posts();
		let rows = build_post_rows(&[0, 99], &posts, None, &default_theme());
		assert_eq!(rows.len(), 1);
	}

	#[test]
	fn short_text_is_untouched() {
		assert_eq!(truncate_to_width("hello", 10), "hello");
		assert_eq!(truncate_to_width("hello", 5), "hello");
	}

	#[test]
	fn long_text_gains_an_ellipsis() {
		assert_eq!(truncate_to_width("hello world", 6), "hello…");
	}

	#[test]
	fn zero_width_yields_empty() {
		assert_eq!(truncate_to_width("hello", 0), "");
	}
}
