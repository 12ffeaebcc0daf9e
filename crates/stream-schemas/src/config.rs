use serde::{Deserialize, Serialize};

/// Decoding policy for incoming envelopes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeConfig {
	/// Fail with `CodecError::UnrecognizedDiscriminant` instead of accepting tags this build
	/// doesn't know. Off by default so newer producers don't break older consumers.
	pub reject_unrecognized: bool,
}

impl DecodeConfig {
	/// Load configuration from environment variables, falling back to the permissive default
	#[must_use]
	pub fn from_env() -> Self {
		Self {
			reject_unrecognized: std::env::var("SCHEMAS_REJECT_UNRECOGNIZED").ok().map(|v| parse_flag(&v)).unwrap_or(false),
		}
	}

	#[must_use]
	pub const fn strict() -> Self {
		Self { reject_unrecognized: true }
	}
}

fn parse_flag(value: &str) -> bool {
	matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
