use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod aws;
mod ui;

use aws::AwsSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	aws: AwsSection,
	cache: CacheSection,
	ui: UiSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CacheSection {
	enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.aws.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			theme: detect_source(
				cli.theme.is_some().then_some("--theme"),
				self.ui.theme.is_some(),
				"RNSS__UI__THEME",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some().then_some("--log-level"),
				self.logging.level.is_some(),
				"RNSS__LOGGING__LEVEL",
				"logging.level",
			),
			program: detect_source(
				None,
				self.aws.program.is_some(),
				"RNSS__AWS__PROGRAM",
				"aws.program",
			),
		};

		let (target, program) = self.aws.resolve(|name| env::var(name).ok());
		let ui = self.ui.finalize();

		let config = ResolvedConfig {
			target,
			program,
			cache_enabled: self.cache.enabled.unwrap_or(true),
			title: ui.title,
			theme: ui.theme,
			initial_filter: ui.initial_filter,
			filter_label: ui.filter_label,
			log_level: self
				.logging
				.level
				.unwrap_or_else(|| rnss::logging::DEFAULT_LEVEL.to_string()),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_flag: Option<&'static str>,
	value_present: bool,
	env_var: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if let Some(flag) = cli_flag {
		return Some(SettingSource::CliFlag(flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
