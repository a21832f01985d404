use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeDefinition};

pub const SLATE: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	counter: Style::new().fg(Color::Rgb(100, 116, 139)),
	cursor_row: Style::new()
		.fg(Color::Rgb(248, 250, 252))
		.bg(Color::Rgb(51, 65, 85))
		.add_modifier(Modifier::BOLD),
	marker: Style::new().fg(Color::Rgb(244, 114, 182)),
	prompt: Style::new().fg(Color::Rgb(56, 189, 248)),
	empty: Style::new().fg(Color::Rgb(100, 116, 139)),
	highlight: Style::new()
		.fg(Color::Rgb(250, 204, 21))
		.add_modifier(Modifier::BOLD),
};

pub const LIGHT: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	counter: Style::new().fg(Color::Rgb(100, 100, 100)),
	cursor_row: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(200, 200, 200)),
	marker: Style::new().fg(Color::Rgb(190, 24, 93)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
};

/// Attribute-only theme for terminals without colour support.
pub const MONOCHROME: Theme = Theme {
	title: Style::new().add_modifier(Modifier::BOLD),
	counter: Style::new(),
	cursor_row: Style::new().add_modifier(Modifier::REVERSED),
	marker: Style::new().add_modifier(Modifier::BOLD),
	prompt: Style::new().add_modifier(Modifier::BOLD),
	empty: Style::new().add_modifier(Modifier::DIM),
	highlight: Style::new().add_modifier(Modifier::UNDERLINED),
};

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition::new("slate", SLATE).with_aliases(&["default", "dark"]),
	ThemeDefinition::new("light", LIGHT),
	ThemeDefinition::new("monochrome", MONOCHROME).with_aliases(&["mono", "none"]),
];
