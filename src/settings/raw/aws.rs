use serde::Deserialize;

use rnss::AwsTarget;
use rnss::aws::DEFAULT_PROGRAM;

use crate::cli::CliArgs;

/// Environment variables the AWS CLI itself reads for the region, in order.
const REGION_ENV_VARS: [&str; 2] = ["AWS_REGION", "AWS_DEFAULT_REGION"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct AwsSection {
	pub(super) region: Option<String>,
	pub(super) profile: Option<String>,
	pub(super) program: Option<String>,
}

impl AwsSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(region) = cli.region.clone() {
			self.region = Some(region);
		}
		if let Some(profile) = cli.profile.clone() {
			self.profile = Some(profile);
		}
	}

	/// Target and program name. `lookup` reads environment variables and
	/// supplies the region when nothing set one.
	pub(super) fn resolve(self, lookup: impl Fn(&str) -> Option<String>) -> (AwsTarget, String) {
		let region = self
			.region
			.filter(|region| !region.trim().is_empty())
			.or_else(|| {
				REGION_ENV_VARS
					.into_iter()
					.filter_map(&lookup)
					.find(|region| !region.trim().is_empty())
			});
		let program = self
			.program
			.unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
		(AwsTarget::new(region, self.profile), program)
	}
}
