use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(Debug, Error)]
pub enum CodecError {
	/// The outer object could not be read: not JSON, not an object, no string tag, or
	/// envelope fields of the wrong shape
	#[error("Malformed payload: {0}")]
	MalformedPayload(String),

	/// The tag was recognized but the nested content does not fit that variant's shape
	#[error("Malformed {kind} variant: {source}")]
	MalformedVariant {
		kind: String,
		#[source]
		source: serde_json::Error,
	},

	/// Only raised when decoding with `reject_unrecognized` enabled
	#[error("Unrecognized discriminant: {0}")]
	UnrecognizedDiscriminant(String),

	#[error("Failed to encode {kind}: {reason}")]
	EncodeFailed { kind: String, reason: String },
}

impl CodecError {
	/// Tag of the variant that failed, when the failure is tied to one
	#[must_use]
	pub fn kind(&self) -> Option<&str> {
		match self {
			Self::MalformedVariant { kind, .. } | Self::EncodeFailed { kind, .. } => Some(kind),
			Self::UnrecognizedDiscriminant(kind) => Some(kind),
			Self::MalformedPayload(_) => None,
		}
	}
}
