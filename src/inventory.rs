//! Sources of candidate rows.
//!
//! [`AwsCliInventory`] lists running EC2 instances through the AWS CLI and
//! formats each as `InstanceId<TAB>Name<TAB>PrivateIp<TAB>PublicIp`.
//! [`read_rows`] accepts the same row format from any reader (stdin).

use std::io::{self, BufRead};
use std::process::{ExitStatus, Stdio};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::aws::{AwsCommand, AwsTarget, DEFAULT_PROGRAM};
use crate::entry::NO_NAME_TAG;

const RUNNING_STATE: &str = "running";
const NAME_TAG: &str = "Name";

#[derive(Debug, Error)]
pub enum InventoryError {
	#[error("failed to run `{program}`")]
	Spawn {
		program: String,
		#[source]
		source: io::Error,
	},
	#[error("`{command}` exited with {status}")]
	Failed { command: String, status: ExitStatus },
	#[error("unable to decode instance list")]
	Decode(#[from] serde_json::Error),
	#[error("failed to read rows")]
	Read(#[source] io::Error),
}

/// Something that can list candidate rows.
pub trait Inventory {
	fn fetch_rows(&self) -> Result<Vec<String>, InventoryError>;
}

/// Lists running instances with `aws ec2 describe-instances`.
#[derive(Debug, Clone)]
pub struct AwsCliInventory {
	program: String,
	target: AwsTarget,
}

impl AwsCliInventory {
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
	pub fn command(&self) -> AwsCommand {
		AwsCommand::new(
			self.program.as_str(),
			[
				"ec2",
				"describe-instances",
				"--filters",
				"Name=instance-state-name,Values=running",
				"--output",
				"json",
			],
			&self.target,
		)
	}
}

impl Inventory for AwsCliInventory {
	fn fetch_rows(&self) -> Result<Vec<String>, InventoryError> {
		let command = self.command();
		info!(command = %command.command_line(), "listing instances");

		// stdin and stderr stay attached so MFA prompts reach the operator.
		let output = command
			.to_command()
			.stdin(Stdio::inherit())
			.stderr(Stdio::inherit())
			.stdout(Stdio::piped())
			.output()
			.map_err(|source| InventoryError::Spawn {
				program: self.program.clone(),
				source,
			})?;

		if !output.status.success() {
			return Err(InventoryError::Failed {
				command: command.command_line(),
				status: output.status,
			});
		}

		let rows = decode_instances(&output.stdout)?;
		debug!(rows = rows.len(), "decoded instances");
		Ok(rows)
	}
}

/// Read rows from `reader`, skipping empty lines.
pub fn read_rows(reader: impl BufRead) -> Result<Vec<String>, InventoryError> {
	let mut rows = Vec::new();
	for line in reader.lines() {
		let line = line.map_err(InventoryError::Read)?;
		let line = line.trim_end_matches('\r');
		if !line.is_empty() {
			rows.push(line.to_string());
		}
	}
	Ok(rows)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeInstances {
	#[serde(default)]
	reservations: Vec<Reservation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Reservation {
	#[serde(default)]
	instances: Vec<Instance>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Instance {
	instance_id: Option<String>,
	state: Option<InstanceState>,
	#[serde(default)]
	tags: Vec<Tag>,
	private_ip_address: Option<String>,
	public_ip_address: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InstanceState {
	name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Tag {
	key: Option<String>,
	value: Option<String>,
}

impl Instance {
	fn is_running(&self) -> bool {
		self.state
			.as_ref()
			.and_then(|state| state.name.as_deref())
			== Some(RUNNING_STATE)
	}

	fn name(&self) -> &str {
		self.tags
			.iter()
			.find(|tag| tag.key.as_deref() == Some(NAME_TAG))
			.and_then(|tag| tag.value.as_deref())
			.unwrap_or(NO_NAME_TAG)
	}

	fn to_row(&self) -> String {
		format!(
			"{}\t{}\t{}\t{}",
			self.instance_id.as_deref().unwrap_or_default(),
			self.name(),
			self.private_ip_address.as_deref().unwrap_or_default(),
			self.public_ip_address.as_deref().unwrap_or_default(),
		)
	}
}

/// Turn `describe-instances` JSON into rows for running instances.
pub fn decode_instances(json: &[u8]) -> Result<Vec<String>, InventoryError> {
	let response: DescribeInstances = serde_json::from_slice(json)?;
	Ok(response
		.reservations
		.iter()
		.flat_map(|reservation| &reservation.instances)
		.filter(|instance| instance.is_running())
		.map(Instance::to_row)
		.collect())
}
