mod args;
mod output;

pub(crate) use args::{CliArgs, parse_cli};
pub(crate) use output::{CANCELLED_MESSAGE, NO_ROWS_MESSAGE, print_command, warn_cache};
