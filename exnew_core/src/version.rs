use std::str::FromStr;

use crate::ExnewError;

/// The host language release the generated scaffold targets. Parsed into a
/// [`VersionSpec`] at the start of a run to populate the manifest
/// requirement string.
pub const ELIXIR_VERSION: &str = "1.18.4";

/// The pieces of a semantic version string the manifest requirement needs:
/// major, minor, and an optional pre-release tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpec {
	pub major: u64,
	pub minor: u64,
	pub pre: Option<String>,
}

impl VersionSpec {
	/// The requirement string embedded in the generated manifest:
	/// `major.minor`, with the first pre-release segment appended when one is
	/// present (`1.18`, `1.19-rc`).
	pub fn requirement(&self) -> String {
		match &self.pre {
			Some(pre) => format!("{}.{}-{pre}", self.major, self.minor),
			None => format!("{}.{}", self.major, self.minor),
		}
	}
}

impl FromStr for VersionSpec {
	type Err = ExnewError;

	fn from_str(input: &str) -> Result<Self, Self::Err> {
		let invalid = || ExnewError::InvalidVersion(input.to_string());

		// Build metadata never reaches the requirement string.
		let stripped = input.split_once('+').map_or(input, |(version, _)| version);
		let (core, pre) = match stripped.split_once('-') {
			Some((core, pre)) => (core, Some(pre)),
			None => (stripped, None),
		};

		let mut parts = core.split('.');
		let major = parts
			.next()
			.ok_or_else(invalid)?
			.parse()
			.map_err(|_| invalid())?;
		let minor = parts
			.next()
			.ok_or_else(invalid)?
			.parse()
			.map_err(|_| invalid())?;

		// Only the first dot-separated pre-release segment is kept, so
		// `1.19.0-rc.0` produces the requirement `1.19-rc`.
		let pre = match pre {
			Some(pre) => {
				let segment = pre.split('.').next().unwrap_or(pre);
				if segment.is_empty() {
					return Err(invalid());
				}
				Some(segment.to_string())
			}
			None => None,
		};

		Ok(Self { major, minor, pre })
	}
}
