use rnss::CacheError;
use rnss::aws::AwsCommand;

pub(crate) const CANCELLED_MESSAGE: &str = "none selected instance ID.";
pub(crate) const NO_ROWS_MESSAGE: &str = "there is no running instance.";

/// Print the command that would start the session.
pub(crate) fn print_command(command: &AwsCommand) {
	println!("{}", command.command_line());
}

/// Report a cache problem that did not stop the run.
pub(crate) fn warn_cache(err: &CacheError) {
	eprintln!("warning: {}, continuing without the cache", format_chain(err));
}

/// Render an error and its sources on one line.
fn format_chain(err: &(dyn std::error::Error + 'static)) -> String {
	let mut message = err.to_string();
	let mut source = err.source();
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	message
}
