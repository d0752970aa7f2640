use std::fmt::Write as _;

use postscout_core::{CategoryFilter, PostSource};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table};

use crate::app::App;
use crate::components::cards::build_post_rows;
use crate::components::prompt::{InputContext, SpinnerState, render_search_row};
use crate::components::tabs::TabItem;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let area = area.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
			])
			.split(area);

		let tabs = self.tab_items();
		let input_ctx = InputContext {
			search_input: &self.search_input,
			prompt_title: &self.labels.prompt_title,
			placeholder: &self.labels.placeholder,
			tabs: &tabs,
			selected_tab: self.category_index,
			area: layout[0],
			theme: &self.style.theme,
		};
		let spinner = SpinnerState {
			loading: self.controller.state().loading,
			throbber_state: &self.throbber_state,
		};
		render_search_row(frame, input_ctx, spinner);

		let state = self.controller.state();
		let summary = count_message(state.matched.len(), &state.term, &state.category);
		let summary_widget =
			Paragraph::new(summary).style(self.style.theme.empty_style());
		frame.render_widget(summary_widget, layout[1]);

		self.render_results(frame, layout[2]);
	}

	fn tab_items(&self) -> Vec<TabItem<'_>> {
		let mut tabs = vec![TabItem {
			label: self.labels.all_categories.as_str(),
		}];
		tabs.extend(self.categories.iter().map(|category| TabItem {
			label: category.as_str(),
		}));
		tabs
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		let theme = self.style.theme;
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.header_style())
			.title(self.labels.table_title.clone());
		let inner = block.inner(area);
		frame.render_widget(block, area);

		if self.controller.state().matched.is_empty() {
			render_empty_state(frame, inner, &self.labels.empty_title, &self.labels.empty_hint, &theme);
			return;
		}

		let badge_width = self
			.categories
			.iter()
			.map(|category| category.chars().count() + 2)
			.max()
			.unwrap_or(8) as u16;
		let widths = [
			Constraint::Length(34),
			Constraint::Length(badge_width),
			Constraint::Fill(1),
		];
		let column_widths = resolve_column_widths(inner, &widths);
		let content_width = column_widths.get(2).copied().unwrap_or(0);

		let header = Row::new(
			["Title", "Category", "Content"]
				.into_iter()
				.map(Cell::from)
				.collect::<Vec<_>>(),
		)
		.style(theme.header_style())
		.height(1)
		.bottom_margin(1);

		let rows = build_post_rows(
			&self.controller.state().matched,
			self.controller.catalog().posts(),
			Some(content_width.saturating_sub(1)),
			&theme,
		);

		let table = Table::new(rows, widths)
			.header(header)
			.column_spacing(TABLE_COLUMN_SPACING)
			.highlight_spacing(HighlightSpacing::WhenSelected)
			.row_highlight_style(theme.row_highlight)
			.highlight_symbol(HIGHLIGHT_SYMBOL);
		frame.render_stateful_widget(table, inner, &mut self.table_state);
	}
}

/// Summary line above the results, e.g. `Showing 2 results for "react" in React`.
pub(crate) fn count_message(count: usize, term: &str, category: &CategoryFilter) -> String {
	let mut message = format!(
		"Showing {count} result{}",
		if count == 1 { "" } else { "s" }
	);
	if !term.is_empty() {
		let _ = write!(message, " for \"{term}\"");
	}
	if let CategoryFilter::One(category) = category {
		let _ = write!(message, " in {category}");
	}
	message
}

fn render_empty_state(frame: &mut Frame, area: Rect, title: &str, hint: &str, theme: &crate::style::Theme) {
	if area.height < 2 || area.width == 0 {
		return;
	}
	// Sit a third of the way down the results pane.
	let offset = area.height / 3;
	let message_area = Rect {
		x: area.x,
		y: area.y + offset,
		width: area.width,
		height: 2,
	};
	let message = Paragraph::new(vec![
		Line::from(Span::styled(
			title.to_string(),
			Style::default().add_modifier(Modifier::BOLD),
		)),
		Line::from(Span::styled(hint.to_string(), theme.empty_style())),
	])
	.alignment(Alignment::Center);
	frame.render_widget(message, message_area);
}

/// Resolve column constraints into concrete widths within a table's inner
/// area, accounting for the selection symbol gutter.
pub(crate) fn resolve_column_widths(area: Rect, widths: &[Constraint]) -> Vec<u16> {
	if widths.is_empty() || area.width == 0 {
		return Vec::new();
	}

	let gutter = HIGHLIGHT_SYMBOL.chars().count() as u16;
	let columns_width = area.width.saturating_sub(gutter);
	if columns_width == 0 {
		return Vec::new();
	}

	Layout::horizontal(widths.to_vec())
		.spacing(TABLE_COLUMN_SPACING)
		.split(Rect::new(0, 0, columns_width, 1))
		.iter()
		.map(|rect| rect.width)
		.collect()
}
