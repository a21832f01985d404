//! File-backed tracing setup.
//!
//! The picker owns the terminal, so log output goes to
//! `<data dir>/logs/rnss.log` instead of stderr. `RNSS_LOG` overrides the
//! configured filter.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

pub const LOG_ENV: &str = "RNSS_LOG";
pub const DEFAULT_LEVEL: &str = "warn";
const LOG_FILE_NAME: &str = "rnss.log";

/// Keeps the background log writer alive; drop it last.
#[must_use = "logs are flushed when the guard is dropped"]
pub struct LogGuard {
	_worker: Option<WorkerGuard>,
	path: Option<PathBuf>,
}

impl LogGuard {
	fn disabled() -> Self {
		Self {
			_worker: None,
			path: None,
		}
	}

	/// Log file in use, if logging could be set up.
	#[must_use]
	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}
}

/// Build the filter from `RNSS_LOG`, falling back to `level`.
pub fn filter_for(level: &str) -> Result<EnvFilter> {
	match EnvFilter::try_from_env(LOG_ENV) {
		Ok(filter) => Ok(filter),
		Err(_) => parse_level(level),
	}
}

/// Parse a filter directive such as `warn` or `rnss=debug,warn`.
pub fn parse_level(level: &str) -> Result<EnvFilter> {
	EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))
}

/// Install the global subscriber writing to the default log directory.
///
/// Failing to create the log directory disables logging rather than
/// aborting the run.
pub fn initialize(level: &str) -> Result<LogGuard> {
	let filter = filter_for(level)?;
	let dir = match app_dirs::get_data_dir() {
		Ok(dir) => dir.join("logs"),
		Err(_) => return Ok(LogGuard::disabled()),
	};
	initialize_in(&dir, filter)
}

fn initialize_in(dir: &Path, filter: EnvFilter) -> Result<LogGuard> {
	if fs::create_dir_all(dir).is_err() {
		return Ok(LogGuard::disabled());
	}

	let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
	let (writer, guard) = tracing_appender::non_blocking(appender);

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(writer)
		.with_ansi(false)
		.with_target(true)
		.try_init()
		.map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;

	Ok(LogGuard {
		_worker: Some(guard),
		path: Some(dir.join(LOG_FILE_NAME)),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn configured_level_is_parsed() {
		assert!(filter_for("debug").is_ok());
		assert!(filter_for("rnss=trace,warn").is_ok());
	}

	#[test]
	fn events_reach_the_file_once_the_guard_drops() {
		let dir = tempfile::tempdir().unwrap();
		let guard = initialize_in(dir.path(), parse_level("error").unwrap()).unwrap();
		let path = guard.path().unwrap().to_path_buf();

		tracing::error!("failed to get running instances: exited with 255");
		drop(guard);

		let contents = fs::read_to_string(path).unwrap();
		assert!(contents.contains("failed to get running instances: exited with 255"));
	}

	#[test]
	fn invalid_level_is_rejected() {
		assert!(parse_level("rnss=loud").is_err());
		assert!(parse_level("warn").is_ok());
	}
}
