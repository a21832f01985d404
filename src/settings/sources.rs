use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};

use crate::cli::CliArgs;
use rnss::app_dirs;

pub(super) const ENV_PREFIX: &str = "rnss";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix(ENV_PREFIX)
			.prefix_separator("__")
			.separator("__"),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Default configuration file locations, lowest precedence first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".rnss.toml"));
		files.push(current_dir.join("rnss.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".rnss.toml")));
		assert!(files.iter().any(|path| path.ends_with("rnss.toml")));
	}

	#[test]
	fn explicit_config_file_is_merged() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("extra.toml");
		fs::write(&path, "[aws]\nregion = \"eu-west-1\"\n").unwrap();

		let cli = CliArgs::parse_from(["rnss", "--no-config", "--config", path.to_str().unwrap()]);
		let config = build_config(&cli).unwrap();

		assert_eq!(config.get_string("aws.region").unwrap(), "eu-west-1");
	}

	#[test]
	fn environment_strings_keep_their_text() {
		// SAFETY: only this test reads or writes these variables.
		unsafe {
			env::set_var("RNSS__UI__INITIAL_FILTER", "10.0");
			env::set_var("RNSS__UI__TITLE", "007");
			env::set_var("RNSS__CACHE__ENABLED", "false");
		}

		let loaded = crate::settings::load(&CliArgs::parse_from(["rnss", "--no-config"]));

		// SAFETY: restoring the variables set above.
		unsafe {
			env::remove_var("RNSS__UI__INITIAL_FILTER");
			env::remove_var("RNSS__UI__TITLE");
			env::remove_var("RNSS__CACHE__ENABLED");
		}

		let config = loaded.unwrap();
		assert_eq!(config.initial_filter, "10.0");
		assert_eq!(config.title.as_deref(), Some("007"));
		assert!(!config.cache_enabled);
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("absent.toml");

		let cli = CliArgs::parse_from(["rnss", "--no-config", "--config", path.to_str().unwrap()]);

		assert!(build_config(&cli).is_err());
	}
}
