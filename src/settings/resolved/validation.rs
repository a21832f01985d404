use rnss::{logging, theme};

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Some(name) = config.theme.as_deref()
		&& theme::by_name(name).is_none()
	{
		let known: Vec<&str> = theme::names().collect();
		return Err(ConfigError::invalid(
			"ui.theme",
			name,
			sources.source_for_theme(),
			format!("unknown theme, expected one of {}", known.join(", ")),
		));
	}

	if let Err(err) = logging::parse_level(&config.log_level) {
		return Err(ConfigError::invalid(
			"logging.level",
			config.log_level.clone(),
			sources.source_for_log_level(),
			format!("{err:#}"),
		));
	}

	if config.program.trim().is_empty() {
		return Err(ConfigError::invalid(
			"aws.program",
			config.program.clone(),
			sources.source_for_program(),
			"must not be empty",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use rnss::AwsTarget;

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			target: AwsTarget::default(),
			program: "aws".into(),
			cache_enabled: true,
			title: None,
			theme: None,
			initial_filter: String::new(),
			filter_label: None,
			log_level: "warn".into(),
		}
	}

	#[test]
	fn defaults_pass_validation() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_unknown_theme() {
		let config = ResolvedConfig {
			theme: Some("neon".into()),
			..config()
		};
		let sources = ConfigSources {
			theme: Some(SettingSource::Environment("RNSS__UI__THEME")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "ui.theme");
		let message = err.to_string();
		assert!(message.contains("value: neon"));
		assert!(message.contains("environment variable"));
		assert!(message.contains("slate"));
	}

	#[test]
	fn validation_accepts_theme_aliases() {
		let config = ResolvedConfig {
			theme: Some("Mono".into()),
			..config()
		};
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_bad_log_level() {
		let config = ResolvedConfig {
			log_level: "rnss=loud".into(),
			..config()
		};
		let sources = ConfigSources {
			log_level: Some(SettingSource::CliFlag("--log-level")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "logging.level");
		assert_eq!(err.origin, SettingSource::CliFlag("--log-level"));
	}

	#[test]
	fn validation_rejects_blank_program() {
		let config = ResolvedConfig {
			program: "  ".into(),
			..config()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "aws.program");
		assert!(err.to_string().contains("configuration key `aws.program`"));
	}
}
