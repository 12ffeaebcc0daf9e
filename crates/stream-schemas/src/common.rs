use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user interacting with the stream, either directly on Twitch or via the website
/// (authenticated through Twitch)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewer {
	pub twitch_user_id: String,
	pub twitch_display_name: String,
}

impl Viewer {
	#[must_use]
	pub fn new(twitch_user_id: impl Into<String>, twitch_display_name: impl Into<String>) -> Self {
		Self {
			twitch_user_id: twitch_user_id.into(),
			twitch_display_name: twitch_display_name.into(),
		}
	}
}

/// Current broadcast state, derived from the latest series of broadcast events.
///
/// The default value (nothing set) means we're off the air.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
	pub broadcast_id: Option<i64>,
	pub screening_id: Option<Uuid>,
	pub tape_id: Option<i64>,
}

impl State {
	#[must_use]
	pub const fn is_live(&self) -> bool {
		self.broadcast_id.is_some()
	}

	#[must_use]
	pub const fn is_screening(&self) -> bool {
		self.screening_id.is_some()
	}
}
