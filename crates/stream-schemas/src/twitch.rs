//! Events describing actions that occur on Twitch: stream state changes and viewer
//! interactions

use crate::codec::{discriminant, envelope_serde, Envelope, TaggedUnion};
use crate::common::Viewer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

mod tier;

pub use tier::{credit_multiplier, UnrecognizedTier};

discriminant! {
	pub enum EventType {
		StreamStarted => "stream-started",
		StreamEnded => "stream-ended",
		StreamHypeStarted => "stream-hype-started",
		ViewerFollowed => "viewer-followed",
		ViewerRaided => "viewer-raided",
		ViewerCheered => "viewer-cheered",
		ViewerRedeemedFunPoints => "viewer-redeemed-fun-points",
		ViewerSubscribed => "viewer-subscribed",
		ViewerResubscribed => "viewer-resubscribed",
		ViewerReceivedGiftSub => "viewer-received-gift-sub",
		ViewerGiftedSubs => "viewer-gifted-subs",
	}
}

/// Something that happened on Twitch. `viewer` is `None` for stream-level events and for
/// anonymous cheers and gift subs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
	pub viewer: Option<Viewer>,
	pub payload: Payload,
}

/// Event-type-specific details; cases without data are encoded as `"payload": null`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
	StreamStarted,
	StreamEnded,
	StreamHypeStarted,
	ViewerFollowed,
	ViewerRaided(ViewerRaided),
	ViewerCheered(ViewerCheered),
	ViewerRedeemedFunPoints(ViewerRedeemedFunPoints),
	ViewerSubscribed(ViewerSubscribed),
	ViewerResubscribed(ViewerResubscribed),
	ViewerReceivedGiftSub(ViewerReceivedGiftSub),
	ViewerGiftedSubs(ViewerGiftedSubs),
	Unrecognized(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerRaided {
	pub num_raiders: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerCheered {
	pub num_bits: u32,
	pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerRedeemedFunPoints {
	pub num_points: u32,
	pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerSubscribed {
	pub credit_multiplier: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerResubscribed {
	pub credit_multiplier: u32,
	pub num_cumulative_months: u32,
	pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerReceivedGiftSub {
	pub credit_multiplier: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerGiftedSubs {
	pub credit_multiplier: u32,
	pub num_subscriptions: u32,
}

impl Event {
	#[must_use]
	pub const fn new(viewer: Viewer, payload: Payload) -> Self {
		Self { viewer: Some(viewer), payload }
	}

	/// An event with no acting viewer: stream state changes, anonymous cheers and gifts
	#[must_use]
	pub const fn anonymous(payload: Payload) -> Self {
		Self { viewer: None, payload }
	}

	#[must_use]
	pub fn kind(&self) -> EventType {
		self.payload.kind()
	}
}

impl TaggedUnion for Payload {
	type Kind = EventType;

	fn kind(&self) -> EventType {
		match self {
			Self::StreamStarted => EventType::StreamStarted,
			Self::StreamEnded => EventType::StreamEnded,
			Self::StreamHypeStarted => EventType::StreamHypeStarted,
			Self::ViewerFollowed => EventType::ViewerFollowed,
			Self::ViewerRaided(_) => EventType::ViewerRaided,
			Self::ViewerCheered(_) => EventType::ViewerCheered,
			Self::ViewerRedeemedFunPoints(_) => EventType::ViewerRedeemedFunPoints,
			Self::ViewerSubscribed(_) => EventType::ViewerSubscribed,
			Self::ViewerResubscribed(_) => EventType::ViewerResubscribed,
			Self::ViewerReceivedGiftSub(_) => EventType::ViewerReceivedGiftSub,
			Self::ViewerGiftedSubs(_) => EventType::ViewerGiftedSubs,
			Self::Unrecognized(tag) => EventType::Unrecognized(tag.clone()),
		}
	}

	fn encode_content(&self) -> serde_json::Result<Option<Value>> {
		let content = match self {
			Self::StreamStarted | Self::StreamEnded | Self::StreamHypeStarted | Self::ViewerFollowed | Self::Unrecognized(_) => return Ok(None),
			Self::ViewerRaided(p) => serde_json::to_value(p)?,
			Self::ViewerCheered(p) => serde_json::to_value(p)?,
			Self::ViewerRedeemedFunPoints(p) => serde_json::to_value(p)?,
			Self::ViewerSubscribed(p) => serde_json::to_value(p)?,
			Self::ViewerResubscribed(p) => serde_json::to_value(p)?,
			Self::ViewerReceivedGiftSub(p) => serde_json::to_value(p)?,
			Self::ViewerGiftedSubs(p) => serde_json::to_value(p)?,
		};
		Ok(Some(content))
	}

	fn decode_content(kind: EventType, content: Value) -> serde_json::Result<Self> {
		Ok(match kind {
			EventType::StreamStarted => Self::StreamStarted,
			EventType::StreamEnded => Self::StreamEnded,
			EventType::StreamHypeStarted => Self::StreamHypeStarted,
			EventType::ViewerFollowed => Self::ViewerFollowed,
			EventType::ViewerRaided => Self::ViewerRaided(serde_json::from_value(content)?),
			EventType::ViewerCheered => Self::ViewerCheered(serde_json::from_value(content)?),
			EventType::ViewerRedeemedFunPoints => Self::ViewerRedeemedFunPoints(serde_json::from_value(content)?),
			EventType::ViewerSubscribed => Self::ViewerSubscribed(serde_json::from_value(content)?),
			EventType::ViewerResubscribed => Self::ViewerResubscribed(serde_json::from_value(content)?),
			EventType::ViewerReceivedGiftSub => Self::ViewerReceivedGiftSub(serde_json::from_value(content)?),
			EventType::ViewerGiftedSubs => Self::ViewerGiftedSubs(serde_json::from_value(content)?),
			EventType::Unrecognized(tag) => Self::Unrecognized(tag),
		})
	}
}

#[derive(Serialize, Deserialize)]
pub struct EventFields {
	viewer: Option<Viewer>,
}

impl Envelope for Event {
	type Variant = Payload;
	type Fields = EventFields;

	const CONTENT_KEY: &'static str = "payload";

	fn fields(&self) -> EventFields {
		EventFields { viewer: self.viewer.clone() }
	}

	fn variant(&self) -> &Payload {
		&self.payload
	}

	fn from_parts(fields: EventFields, payload: Payload) -> Self {
		Self { viewer: fields.viewer, payload }
	}
}

envelope_serde!(Event);
