mod cli;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use tracing::{debug, error};

use cli::{CANCELLED_MESSAGE, NO_ROWS_MESSAGE, parse_cli, print_command};
use workflow::{RunFlags, SessionWorkflow, WorkflowOutcome};

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(err) => {
			eprintln!("rnss: {err:#}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in rnss::theme::names() {
			println!("{name}");
		}
		return Ok(ExitCode::SUCCESS);
	}

	let resolved = settings::load(&cli)?;
	let log_guard = rnss::logging::initialize(&resolved.log_level)?;
	debug!(?resolved, "configuration loaded");

	if cli.print_config {
		resolved.print_summary();
		if let Some(path) = log_guard.path() {
			println!("  Log file: {}", path.display());
		}
	}

	// Must be logged while `log_guard` is alive.
	let outcome = SessionWorkflow::new(resolved, RunFlags::from(&cli))
		.run()
		.inspect_err(|err| error!("{err:#}"))?;
	Ok(report(outcome))
}

/// Print what the user needs to see and pick the exit code.
fn report(outcome: WorkflowOutcome) -> ExitCode {
	match outcome {
		WorkflowOutcome::NoRows => {
			println!("{NO_ROWS_MESSAGE}");
			ExitCode::SUCCESS
		}
		WorkflowOutcome::Cancelled => {
			println!("{CANCELLED_MESSAGE}");
			ExitCode::SUCCESS
		}
		WorkflowOutcome::ShowCommand(command) => {
			print_command(&command);
			ExitCode::SUCCESS
		}
		WorkflowOutcome::Session(status) => {
			debug!(%status, "session finished");
			match status.code() {
				Some(0) => ExitCode::SUCCESS,
				Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
				None => ExitCode::FAILURE,
			}
		}
	}
}
