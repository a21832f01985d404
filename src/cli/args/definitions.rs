use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `rnss` binary.
#[derive(Parser, Debug)]
#[command(
	name = "rnss",
	version,
	long_version = long_version(),
	about = "Pick a running EC2 instance and start an SSM session on it",
	long_about = "Pick a running EC2 instance and start an SSM session on it.\n\n\
		rnss lists running instances (from a local cache when available), lets you \
		narrow them down by typing, and runs `aws ssm start-session --target <id>` \
		for the one you choose.",
	after_help = "Any FILTER words are joined with spaces and used as the initial filter, \
		e.g. `rnss web` starts with only instances whose name, id or address contains `web`.",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "FILTER",
		help = "Initial filter phrase (default: empty)"
	)]
	pub(crate) filter: Vec<String>,
	#[arg(
		short = 'f',
		long = "flush-cache",
		help = "Ignore the cached instance list and fetch a fresh one (default: disabled)"
	)]
	pub(crate) flush_cache: bool,
	#[arg(
		long,
		value_name = "REGION",
		help = "Target AWS region (default: AWS_REGION or the CLI default)"
	)]
	pub(crate) region: Option<String>,
	#[arg(
		long,
		value_name = "PROFILE",
		help = "AWS CLI profile to use (default: none)"
	)]
	pub(crate) profile: Option<String>,
	#[arg(
		long = "show-command",
		help = "Print the start-session command instead of running it (default: disabled)"
	)]
	pub(crate) show_command: bool,
	#[arg(
		long = "stdin",
		help = "Read the instance list from stdin; lines start with `instance-id<TAB>` (default: disabled)"
	)]
	pub(crate) stdin: bool,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "RNSS_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the picker title (default: select start-session instance)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Log filter written to the log file, overridden by RNSS_LOG (default: warn)"
	)]
	pub(crate) log_level: Option<String>,
}

impl CliArgs {
	/// Positional filter words joined into one phrase.
	pub(crate) fn filter_phrase(&self) -> Option<String> {
		if self.filter.is_empty() {
			None
		} else {
			Some(self.filter.join(" "))
		}
	}
}
