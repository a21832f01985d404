//! Colour schemes for the picker.
//!
//! A [`Theme`] is picked once per session and handed to the renderer; nothing
//! here holds mutable global state.

mod builtins;
mod types;

pub use builtins::{LIGHT, MONOCHROME, SLATE};
pub use types::{Theme, ThemeDefinition};

/// Theme used when no name is configured.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Look up a built-in theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	builtins::BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| definition.answers_to(name))
		.map(|definition| definition.theme)
}

/// Canonical names of the built-in themes.
pub fn names() -> impl Iterator<Item = &'static str> {
	builtins::BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_accepts_aliases_and_any_case() {
		assert_eq!(by_name("Default"), Some(SLATE));
		assert_eq!(by_name(" LIGHT "), Some(LIGHT));
		assert_eq!(by_name("mono"), Some(MONOCHROME));
		assert_eq!(by_name("solarized"), None);
	}

	#[test]
	fn names_lists_canonical_entries_only() {
		let names: Vec<&str> = names().collect();
		assert_eq!(names, ["slate", "light", "monochrome"]);
	}
}
