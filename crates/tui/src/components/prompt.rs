use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::components::tabs::{self, TabItem};
use crate::input::SearchInput;
use crate::style::Theme;

/// Argument bundle for rendering the search row.
pub struct InputContext<'a> {
	/// The search input widget.
	pub search_input: &'a SearchInput<'a>,
	/// Prompt title shown before the input.
	pub prompt_title: &'a str,
	/// Placeholder text shown while the input is empty.
	pub placeholder: &'a str,
	/// Category tabs to display at the right edge.
	pub tabs: &'a [TabItem<'a>],
	/// Index of the selected tab.
	pub selected_tab: usize,
	/// Rendering area.
	pub area: Rect,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Spinner state for the in-flight search indicator.
pub struct SpinnerState<'a> {
	/// Whether a search is currently in flight.
	pub loading: bool,
	/// Spinner animation state.
	pub throbber_state: &'a ThrobberState,
}

/// Render the search row: prompt, input, loading spinner, and category tabs.
pub fn render_search_row(frame: &mut Frame, input: InputContext<'_>, spinner: SpinnerState<'_>) {
	let InputContext {
		search_input,
		prompt_title,
		placeholder,
		tabs,
		selected_tab,
		area,
		theme,
	} = input;

	let prompt = if prompt_title.is_empty() {
		String::new()
	} else {
		format!("{prompt_title} > ")
	};
	let prompt_width = prompt.chars().count() as u16;
	let tabs_width = tabs::calculate_tabs_width(tabs);

	let sections = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(prompt_width),
			Constraint::Min(1),
			Constraint::Length(tabs_width),
		])
		.split(area);

	if !prompt.is_empty() {
		let widget = Paragraph::new(prompt).style(theme.prompt_style());
		frame.render_widget(widget, sections[0]);
	}

	let input_area = sections[1];
	search_input.render_textarea(frame, input_area);
	if search_input.text().is_empty() {
		render_placeholder(frame, input_area, placeholder, theme);
	}
	render_spinner(frame, input_area, spinner, theme);

	tabs::render_category_tabs(frame, sections[2], tabs, selected_tab, theme);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	let dimmed = theme.empty_style();
	let available = area.width as usize;
	let display: String = text.chars().take(available).collect();
	let buffer = frame.buffer_mut();
	buffer.set_line(
		area.left(),
		area.top(),
		&Line::from(Span::styled(display, dimmed)),
		area.width,
	);
}

fn render_spinner(frame: &mut Frame, area: Rect, spinner: SpinnerState<'_>, theme: &Theme) {
	if !spinner.loading || area.width == 0 || area.height == 0 {
		return;
	}

	let muted = theme.empty_style();
	let throbber = Throbber::default().style(muted).throbber_style(muted);
	let mut line = Line::default();
	line.spans.push(throbber.to_symbol_span(spinner.throbber_state));
	line.spans.push(Span::styled("Searching", muted));

	let line_width = line.width() as u16;
	let buffer = frame.buffer_mut();
	let mut start_x = if line_width >= area.width {
		area.left()
	} else {
		area.right().saturating_sub(line_width)
	};

	// Keep a gap between the typed text and the indicator.
	let input_row = area.top();
	let mut last_char_x: Option<u16> = None;
	for x in area.left()..area.right() {
		if let Some(cell) = buffer.cell((x, input_row))
			&& !cell.symbol().trim().is_empty()
		{
			last_char_x = Some(x);
		}
	}
	if let Some(last_x) = last_char_x {
		let min_start = last_x.saturating_add(3);
		if min_start > start_x {
			start_x = min_start;
		}
	}
	if start_x >= area.right() {
		return;
	}

	let max_width = area
		.right()
		.saturating_sub(start_x)
		.min(line_width)
		.min(area.width);
	if max_width == 0 {
		return;
	}

	buffer.set_line(start_x, input_row, &line, max_width);
}
