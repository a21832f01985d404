use std::io::{self, IsTerminal};
use std::process::ExitStatus;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use rnss::aws::AwsCommand;
use rnss::inventory::read_rows;
use rnss::picker::{self, RenderOptions};
use rnss::{
	AwsCliInventory, FileCache, Picker, RowCache, RowOrigin, SessionLauncher, SessionOutcome,
	ordered_entries, resolve_rows, theme,
};

use crate::cli::{CliArgs, warn_cache};
use crate::settings::ResolvedConfig;

/// How a run ended.
#[derive(Debug)]
pub(crate) enum WorkflowOutcome {
	/// Nothing to pick from.
	NoRows,
	/// The picker closed without a selection.
	Cancelled,
	/// `--show-command` was set; the command was not run.
	ShowCommand(AwsCommand),
	/// The session ran and exited.
	Session(ExitStatus),
}

/// Per-run switches that do not belong in configuration files.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RunFlags {
	pub(crate) refresh: bool,
	pub(crate) stdin: bool,
	pub(crate) show_command: bool,
}

impl From<&CliArgs> for RunFlags {
	fn from(cli: &CliArgs) -> Self {
		Self {
			refresh: cli.flush_cache,
			stdin: cli.stdin,
			show_command: cli.show_command,
		}
	}
}

/// Gathers rows, runs the picker and starts the session.
pub(crate) struct SessionWorkflow {
	config: ResolvedConfig,
	flags: RunFlags,
}

impl SessionWorkflow {
	pub(crate) fn new(config: ResolvedConfig, flags: RunFlags) -> Self {
		Self { config, flags }
	}

	pub(crate) fn run(self) -> Result<WorkflowOutcome> {
		let rows = self.rows()?;
		if rows.is_empty() {
			return Ok(WorkflowOutcome::NoRows);
		}

		let entries = ordered_entries(&rows);
		let outcome = picker::run(
			Picker::with_filter(entries, self.config.initial_filter.clone()),
			&self.render_options(),
		)?;

		let SessionOutcome::Selected(entry) = outcome else {
			return Ok(WorkflowOutcome::Cancelled);
		};
		info!(id = %entry.id, label = %entry.label, "instance selected");

		let launcher =
			SessionLauncher::with_program(self.config.program.as_str(), self.config.target.clone());
		if self.flags.show_command {
			return Ok(WorkflowOutcome::ShowCommand(launcher.command(&entry.id)));
		}

		let status = launcher.launch(&entry.id)?;
		Ok(WorkflowOutcome::Session(status))
	}

	fn rows(&self) -> Result<Vec<String>> {
		if self.flags.stdin {
			return rows_from_stdin();
		}

		let inventory =
			AwsCliInventory::with_program(self.config.program.as_str(), self.config.target.clone());
		let scope = self.config.target.scope();

		let cache = if self.config.cache_enabled {
			match FileCache::in_cache_dir() {
				Ok(cache) => {
					debug!(dir = %cache.dir().display(), "using row cache");
					Some(cache)
				}
				Err(err) => {
					warn_cache(&err);
					None
				}
			}
		} else {
			None
		};

		let resolved = resolve_rows(
			&scope,
			&inventory,
			cache.as_ref().map(|cache| cache as &dyn RowCache),
			self.flags.refresh,
		)
		.context("failed to get running instances")?;

		for err in &resolved.cache_errors {
			warn_cache(err);
		}
		info!(
			scope = %scope,
			rows = resolved.rows.len(),
			cached = resolved.origin == RowOrigin::Cache,
			"rows resolved"
		);
		Ok(resolved.rows)
	}

	fn render_options(&self) -> RenderOptions {
		let mut options = RenderOptions::default().with_theme(
			self.config
				.theme
				.as_deref()
				.and_then(theme::by_name)
				.unwrap_or_default(),
		);
		if let Some(title) = &self.config.title {
			options = options.with_title(title.as_str());
		}
		if let Some(label) = &self.config.filter_label {
			options = options.with_filter_label(label.as_str());
		}
		options
	}
}

fn rows_from_stdin() -> Result<Vec<String>> {
	let stdin = io::stdin();
	if stdin.is_terminal() {
		bail!("set --stdin however stdin is empty.");
	}
	read_rows(stdin.lock()).context("failed to read the instance list from stdin")
}
