//! Start an SSM session against the chosen instance.

use std::io;
use std::process::ExitStatus;

use thiserror::Error;
use tracing::info;

use crate::aws::{AwsCommand, AwsTarget, DEFAULT_PROGRAM};

#[derive(Debug, Error)]
#[error("failed to run `{command}`")]
pub struct SessionError {
	pub command: String,
	#[source]
	pub source: io::Error,
}

/// Builds and runs `aws ssm start-session --target <id>`.
#[derive(Debug, Clone)]
pub struct SessionLauncher {
	program: String,
	target: AwsTarget,
}

impl SessionLauncher {
	#[must_use]
	pub fn new(target: AwsTarget) -> Self {
		Self::with_program(DEFAULT_PROGRAM, target)
	}

	#[must_use]
	pub fn with_program(program: impl Into<String>, target: AwsTarget) -> Self {
		Self {
			program: program.into(),
			target,
		}
	}

	#[must_use]
	pub fn command(&self, instance_id: &str) -> AwsCommand {
		AwsCommand::new(
			self.program.as_str(),
			["ssm", "start-session", "--target", instance_id],
			&self.target,
		)
	}

	/// Run the session attached to the current terminal and wait for it.
	///
	/// Interrupts are left to the session; `rnss` itself keeps running until
	/// the child exits.
	pub fn launch(&self, instance_id: &str) -> Result<ExitStatus, SessionError> {
		let command = self.command(instance_id);
		info!(command = %command.command_line(), "starting session");

		ignore_interrupts();
		command
			.to_command()
			.status()
			.map_err(|source| SessionError {
				command: command.command_line(),
				source,
			})
	}
}

#[cfg(unix)]
extern "C" fn swallow_signal(_: std::ffi::c_int) {}

#[cfg(unix)]
fn ignore_interrupts() {
	use nix::sys::signal::{SigHandler, Signal, signal};

	// SIG_IGN survives exec; a handler does not, so the child keeps the
	// default disposition.
	// SAFETY: the handler does nothing and touches no state.
	if let Err(err) = unsafe { signal(Signal::SIGINT, SigHandler::Handler(swallow_signal)) } {
		tracing::warn!(%err, "unable to install SIGINT handler");
	}
}

#[cfg(not(unix))]
fn ignore_interrupts() {}
