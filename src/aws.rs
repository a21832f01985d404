//! AWS CLI invocation shared by the inventory and the session launcher.

use std::process::Command;

/// Program used when nothing else is configured.
pub const DEFAULT_PROGRAM: &str = "aws";

/// Cache scope used when no region is set.
pub const DEFAULT_SCOPE: &str = "default";

/// Account and region every AWS CLI call is pointed at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsTarget {
	pub region: Option<String>,
	pub profile: Option<String>,
}

impl AwsTarget {
	#[must_use]
	pub fn new(region: Option<String>, profile: Option<String>) -> Self {
		let non_empty = |value: Option<String>| {
			value
				.map(|value| value.trim().to_string())
				.filter(|value| !value.is_empty())
		};
		Self {
			region: non_empty(region),
			profile: non_empty(profile),
		}
	}

	/// Key for the row cache. Different profiles usually mean different
	/// accounts, so the profile takes part in the key.
	#[must_use]
	pub fn scope(&self) -> String {
		let region = self.region.as_deref().unwrap_or(DEFAULT_SCOPE);
		match &self.profile {
			Some(profile) => format!("{profile}_{region}"),
			None => region.to_string(),
		}
	}

	/// Global CLI options selecting region and profile.
	#[must_use]
	pub fn cli_args(&self) -> Vec<String> {
		let mut args = Vec::new();
		if let Some(region) = &self.region {
			args.push("--region".to_string());
			args.push(region.clone());
		}
		if let Some(profile) = &self.profile {
			args.push("--profile".to_string());
			args.push(profile.clone());
		}
		args
	}
}

/// A fully assembled AWS CLI call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsCommand {
	pub program: String,
	pub args: Vec<String>,
}

impl AwsCommand {
	pub fn new<I, S>(program: impl Into<String>, args: I, target: &AwsTarget) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut args: Vec<String> = args.into_iter().map(Into::into).collect();
		args.extend(target.cli_args());
		Self {
			program: program.into(),
			args,
		}
	}

	#[must_use]
	pub fn to_command(&self) -> Command {
		let mut command = Command::new(&self.program);
		command.args(&self.args);
		command
	}

	/// Shell-like rendering for display purposes.
	#[must_use]
	pub fn command_line(&self) -> String {
		std::iter::once(self.program.as_str())
			.chain(self.args.iter().map(String::as_str))
			.collect::<Vec<_>>()
			.join(" ")
	}
}
