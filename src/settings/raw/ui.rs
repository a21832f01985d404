use serde::Deserialize;

use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) initial_filter: Option<String>,
	pub(super) filter_label: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) title: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) initial_filter: String,
	pub(super) filter_label: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(filter) = cli.filter_phrase() {
			self.initial_filter = Some(filter);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		UiResolution {
			title: non_blank(self.title),
			theme: non_blank(self.theme),
			initial_filter: self.initial_filter.unwrap_or_default(),
			filter_label: non_blank(self.filter_label),
		}
	}
}

fn non_blank(value: Option<String>) -> Option<String> {
	value.filter(|value| !value.trim().is_empty())
}
