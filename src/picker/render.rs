//! Projection of picker state into terminal lines.
//!
//! [`render`] produces the full text frame (one line per filtered entry plus
//! the filter prompt). [`draw`] lays that frame out on a ratatui [`Frame`],
//! adding the title bar and scrolling the list so the cursor stays visible.

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::entry::Entry;
use crate::theme::Theme;

use super::Picker;

pub const CURSOR_MARKER: &str = "> ";
pub const BLANK_MARKER: &str = "  ";

const DEFAULT_TITLE: &str = "select start-session instance";
const DEFAULT_FILTER_LABEL: &str = "Filter";
const EMPTY_MESSAGE: &str = "No matches";

/// Presentation choices made once per session.
#[derive(Debug, Clone)]
pub struct RenderOptions {
	pub theme: Theme,
	pub title: String,
	pub filter_label: String,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			theme: Theme::default(),
			title: DEFAULT_TITLE.to_string(),
			filter_label: DEFAULT_FILTER_LABEL.to_string(),
		}
	}
}

impl RenderOptions {
	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	#[must_use]
	pub fn with_filter_label(mut self, label: impl Into<String>) -> Self {
		self.filter_label = label.into();
		self
	}
}

/// Text frame for one picker state.
#[derive(Debug, Clone)]
pub struct RenderedFrame {
	pub rows: Vec<Line<'static>>,
	pub filter_line: Line<'static>,
}

impl RenderedFrame {
	/// Every line of the frame, list rows first.
	pub fn lines(&self) -> impl Iterator<Item = &Line<'static>> {
		self.rows.iter().chain(std::iter::once(&self.filter_line))
	}

	/// Frame content with styling stripped.
	#[must_use]
	pub fn plain_lines(&self) -> Vec<String> {
		self.lines().map(plain_text).collect()
	}
}

/// Render every filtered entry followed by the filter prompt.
#[must_use]
pub fn render(picker: &Picker, options: &RenderOptions) -> RenderedFrame {
	let cursor = picker.cursor();
	let rows = picker
		.filtered()
		.enumerate()
		.map(|(index, entry)| {
			render_row(entry, Some(index) == cursor, picker.filter(), &options.theme)
		})
		.collect();

	RenderedFrame {
		rows,
		filter_line: filter_line(picker.filter(), options),
	}
}

/// Concatenate span contents, dropping styles.
#[must_use]
pub fn plain_text(line: &Line<'_>) -> String {
	line.spans.iter().map(|span| span.content.as_ref()).collect()
}

fn render_row(entry: &Entry, is_cursor: bool, filter: &str, theme: &Theme) -> Line<'static> {
	let text = entry.display_text();

	if is_cursor {
		return Line::from(vec![
			Span::styled(CURSOR_MARKER, theme.marker_style()),
			Span::raw(text),
		])
		.style(theme.cursor_row_style());
	}

	let mut spans = vec![Span::raw(BLANK_MARKER)];
	match match_range(&text, filter) {
		Some(range) => spans.extend(split_highlight(&text, range, theme.highlight_style())),
		None => spans.push(Span::raw(text)),
	}
	Line::from(spans)
}

fn filter_line(filter: &str, options: &RenderOptions) -> Line<'static> {
	Line::from(vec![
		Span::styled(
			format!("{}: ", options.filter_label),
			options.theme.prompt_style(),
		),
		Span::raw(filter.to_string()),
	])
}

/// Character range of the first case-insensitive occurrence of `filter` in
/// `text`. A filter longer than the text is cut to the text length first.
pub(crate) fn match_range(text: &str, filter: &str) -> Option<Range<usize>> {
	let haystack: Vec<char> = text.chars().map(fold_case).collect();
	let needle: Vec<char> = filter
		.chars()
		.map(fold_case)
		.take(haystack.len())
		.collect();
	if needle.is_empty() {
		return None;
	}

	haystack
		.windows(needle.len())
		.position(|window| window == needle.as_slice())
		.map(|start| start..start + needle.len())
}

fn fold_case(ch: char) -> char {
	ch.to_lowercase().next().unwrap_or(ch)
}

fn split_highlight(text: &str, range: Range<usize>, style: Style) -> Vec<Span<'static>> {
	let mut before = String::new();
	let mut matched = String::new();
	let mut after = String::new();
	for (index, ch) in text.chars().enumerate() {
		if index < range.start {
			before.push(ch);
		} else if index < range.end {
			matched.push(ch);
		} else {
			after.push(ch);
		}
	}

	let mut spans = Vec::with_capacity(3);
	if !before.is_empty() {
		spans.push(Span::raw(before));
	}
	spans.push(Span::styled(matched, style));
	if !after.is_empty() {
		spans.push(Span::raw(after));
	}
	spans
}

/// First list row to show so that `cursor` fits in a window of `height` rows.
pub(crate) fn viewport_offset(cursor: usize, len: usize, height: usize) -> usize {
	if height == 0 || len <= height || cursor < height {
		return 0;
	}
	(cursor + 1 - height).min(len - height)
}

/// Lay the picker out on the terminal frame.
pub fn draw(frame: &mut Frame, picker: &Picker, options: &RenderOptions) {
	let [title_area, list_area, filter_area] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Min(1),
		Constraint::Length(1),
	])
	.areas(frame.area());

	let rendered = render(picker, options);
	draw_title(frame, title_area, picker, options);
	draw_rows(frame, list_area, picker, rendered.rows, &options.theme);

	let prompt_width = options.filter_label.width() + 2 + picker.filter().width();
	frame.render_widget(Paragraph::new(rendered.filter_line), filter_area);
	let cursor_x = filter_area
		.x
		.saturating_add(u16::try_from(prompt_width).unwrap_or(u16::MAX))
		.min(filter_area.right().saturating_sub(1));
	frame.set_cursor_position(Position::new(cursor_x, filter_area.y));
}

fn draw_title(frame: &mut Frame, area: Rect, picker: &Picker, options: &RenderOptions) {
	let counter = format!("{}/{}", picker.filtered_len(), picker.entries().len());
	let counter_width = u16::try_from(counter.width()).unwrap_or(u16::MAX);
	let [title_area, counter_area] =
		Layout::horizontal([Constraint::Min(0), Constraint::Length(counter_width)]).areas(area);

	frame.render_widget(
		Paragraph::new(options.title.as_str()).style(options.theme.title_style()),
		title_area,
	);
	frame.render_widget(
		Paragraph::new(counter)
			.alignment(Alignment::Right)
			.style(options.theme.counter_style()),
		counter_area,
	);
}

fn draw_rows(
	frame: &mut Frame,
	area: Rect,
	picker: &Picker,
	rows: Vec<Line<'static>>,
	theme: &Theme,
) {
	if rows.is_empty() {
		let empty = Paragraph::new(EMPTY_MESSAGE)
			.alignment(Alignment::Center)
			.style(theme.empty_style());
		frame.render_widget(empty, area);
		return;
	}

	let height = usize::from(area.height);
	let offset = viewport_offset(picker.cursor().unwrap_or(0), rows.len(), height);
	let visible: Vec<Line<'static>> = rows.into_iter().skip(offset).take(height).collect();
	frame.render_widget(Paragraph::new(visible), area);
}
