use stream_schemas::twitch::UnrecognizedTier;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdapterError>;

#[derive(Debug, Error)]
pub enum AdapterError {
	#[error("Unsupported EventSub type: {0}")]
	UnsupportedNotificationType(String),

	#[error("Failed to parse {subscription_type} event: {source}")]
	MalformedNotification {
		subscription_type: String,
		#[source]
		source: serde_json::Error,
	},

	#[error(transparent)]
	Tier(#[from] UnrecognizedTier),
}

impl AdapterError {
	/// Unsupported types are expected whenever we're subscribed to more than we convert;
	/// everything else means Twitch sent something we can't make sense of
	#[must_use]
	pub const fn is_unsupported(&self) -> bool {
		matches!(self, Self::UnsupportedNotificationType(_))
	}
}
