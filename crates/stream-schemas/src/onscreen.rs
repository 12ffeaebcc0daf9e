//! Events that should be displayed onscreen during the stream: changes in stream status,
//! toasts recognizing viewer interactions and images shown for a viewer

use crate::codec::{discriminant, envelope_serde, Envelope, NoFields, TaggedUnion};
use serde::{Deserialize, Serialize};
use serde_json::Value;

mod image;
mod toast;

pub use image::{FriendImage, GhostImage, ImageAlert, ImageDetails, ImageType, StaticImage};
pub use toast::{Cheered, GiftedSubs, Raided, Resubscribed, Toast, ToastData, ToastType};

discriminant! {
	/// Each type is displayed differently by the onscreen graphics
	pub enum EventType {
		Status => "status",
		Toast => "toast",
		Image => "image",
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
	pub payload: Payload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
	Status(Status),
	Toast(Toast),
	Image(ImageAlert),
	Unrecognized(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
	pub current_tape_id: i64,
}

impl Event {
	#[must_use]
	pub const fn status(current_tape_id: i64) -> Self {
		Self {
			payload: Payload::Status(Status { current_tape_id }),
		}
	}

	#[must_use]
	pub const fn toast(toast: Toast) -> Self {
		Self { payload: Payload::Toast(toast) }
	}

	#[must_use]
	pub const fn image(alert: ImageAlert) -> Self {
		Self { payload: Payload::Image(alert) }
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
			Self::Status(_) => EventType::Status,
			Self::Toast(_) => EventType::Toast,
			Self::Image(_) => EventType::Image,
			Self::Unrecognized(tag) => EventType::Unrecognized(tag.clone()),
		}
	}

	fn encode_content(&self) -> serde_json::Result<Option<Value>> {
		match self {
			Self::Status(p) => serde_json::to_value(p).map(Some),
			Self::Toast(p) => serde_json::to_value(p).map(Some),
			Self::Image(p) => serde_json::to_value(p).map(Some),
			Self::Unrecognized(_) => Ok(None),
		}
	}

	fn decode_content(kind: EventType, payload: Value) -> serde_json::Result<Self> {
		Ok(match kind {
			EventType::Status => Self::Status(serde_json::from_value(payload)?),
			EventType::Toast => Self::Toast(serde_json::from_value(payload)?),
			EventType::Image => Self::Image(serde_json::from_value(payload)?),
			EventType::Unrecognized(tag) => Self::Unrecognized(tag),
		})
	}
}

impl Envelope for Event {
	type Variant = Payload;
	type Fields = NoFields;

	const CONTENT_KEY: &'static str = "payload";

	fn fields(&self) -> NoFields {
		NoFields {}
	}

	fn variant(&self) -> &Payload {
		&self.payload
	}

	fn from_parts(_: NoFields, payload: Payload) -> Self {
		Self { payload }
	}
}

envelope_serde!(Event);
