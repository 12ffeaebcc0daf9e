//! Stream-level notifications carry nothing we need beyond their type

use stream_schemas::twitch::{Event, Payload};

#[must_use]
pub const fn from_stream_online() -> Event {
	Event::anonymous(Payload::StreamStarted)
}

#[must_use]
pub const fn from_stream_offline() -> Event {
	Event::anonymous(Payload::StreamEnded)
}

#[must_use]
pub const fn from_hype_train_begin() -> Event {
	Event::anonymous(Payload::StreamHypeStarted)
}
