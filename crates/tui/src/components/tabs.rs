use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Tabs;

use crate::style::Theme;

/// Render metadata for a category tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabItem<'a> {
	/// Text label displayed on the tab.
	pub label: &'a str,
}

/// Render the category selector tabs.
///
/// `selected` may be out of range, in which case no tab is highlighted; this
/// happens when an unknown category filter was supplied at startup.
pub fn render_category_tabs(
	frame: &mut Frame,
	area: Rect,
	tabs: &[TabItem<'_>],
	selected: usize,
	theme: &Theme,
) {
	let titles = build_tab_titles(theme, selected, tabs);
	let widget = Tabs::new(titles)
		.select(selected)
		.divider("")
		.padding("", " ")
		.highlight_style(theme.tab_highlight_style());
	frame.render_widget(widget, area);
}

fn build_tab_titles(theme: &Theme, selected: usize, tabs: &[TabItem<'_>]) -> Vec<Line<'static>> {
	let inactive = theme.tab_inactive_style();
	tabs.iter()
		.enumerate()
		.map(|(index, tab)| {
			let label = format!(" {} ", tab.label);
			let style = if index == selected {
				theme.tab_highlight_style()
			} else {
				inactive
			};
			Line::from(label).style(style)
		})
		.collect()
}

/// Width needed to render the given tabs on one row.
#[must_use]
pub fn calculate_tabs_width(tabs: &[TabItem<'_>]) -> u16 {
	let mut width = 0u16;
	for tab in tabs {
		let label_len = tab.label.chars().count() as u16;
		width = width.saturating_add(label_len.saturating_add(3));
	}
	width.max(12)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tab_width_accounts_for_padding() {
		let tabs = [TabItem { label: "All" }, TabItem { label: "CSS" }];
		// Each label plus surrounding spaces and divider padding.
		assert_eq!(calculate_tabs_width(&tabs), 12);
	}

	#[test]
	fn tab_width_has_a_floor() {
		assert_eq!(calculate_tabs_width(&[]), 12);
	}
}
