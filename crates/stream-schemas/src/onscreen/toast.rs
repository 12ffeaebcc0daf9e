use crate::codec::{discriminant, envelope_serde, EmptyContent, Envelope, TaggedUnion};
use crate::common::Viewer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

discriminant! {
	pub enum ToastType {
		Followed => "followed",
		Raided => "raided",
		Cheered => "cheered",
		Subscribed => "subscribed",
		Resubscribed => "resubscribed",
		GiftedSubs => "gifted-subs",
	}
}

/// An onscreen notification that shouts out a viewer in response to something they did.
/// `viewer` is `None` for anonymous cheers and gift subs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
	pub viewer: Option<Viewer>,
	pub data: ToastData,
}

/// Toast-type-specific details; `data` is left out of the JSON for types that carry none
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastData {
	Followed,
	Raided(Raided),
	Cheered(Cheered),
	Subscribed,
	Resubscribed(Resubscribed),
	GiftedSubs(GiftedSubs),
	Unrecognized(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Raided {
	pub num_viewers: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cheered {
	pub num_bits: u32,
	pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resubscribed {
	pub num_cumulative_months: u32,
	pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftedSubs {
	pub num_subscriptions: u32,
}

impl Toast {
	#[must_use]
	pub fn kind(&self) -> ToastType {
		self.data.kind()
	}
}

impl TaggedUnion for ToastData {
	type Kind = ToastType;

	fn kind(&self) -> ToastType {
		match self {
			Self::Followed => ToastType::Followed,
			Self::Raided(_) => ToastType::Raided,
			Self::Cheered(_) => ToastType::Cheered,
			Self::Subscribed => ToastType::Subscribed,
			Self::Resubscribed(_) => ToastType::Resubscribed,
			Self::GiftedSubs(_) => ToastType::GiftedSubs,
			Self::Unrecognized(tag) => ToastType::Unrecognized(tag.clone()),
		}
	}

	fn encode_content(&self) -> serde_json::Result<Option<Value>> {
		match self {
			Self::Followed | Self::Subscribed | Self::Unrecognized(_) => Ok(None),
			Self::Raided(d) => serde_json::to_value(d).map(Some),
			Self::Cheered(d) => serde_json::to_value(d).map(Some),
			Self::Resubscribed(d) => serde_json::to_value(d).map(Some),
			Self::GiftedSubs(d) => serde_json::to_value(d).map(Some),
		}
	}

	fn decode_content(kind: ToastType, data: Value) -> serde_json::Result<Self> {
		Ok(match kind {
			ToastType::Followed => Self::Followed,
			ToastType::Raided => Self::Raided(serde_json::from_value(data)?),
			ToastType::Cheered => Self::Cheered(serde_json::from_value(data)?),
			ToastType::Subscribed => Self::Subscribed,
			ToastType::Resubscribed => Self::Resubscribed(serde_json::from_value(data)?),
			ToastType::GiftedSubs => Self::GiftedSubs(serde_json::from_value(data)?),
			ToastType::Unrecognized(tag) => Self::Unrecognized(tag),
		})
	}
}

#[derive(Serialize, Deserialize)]
pub struct ToastFields {
	viewer: Option<Viewer>,
}

impl Envelope for Toast {
	type Variant = ToastData;
	type Fields = ToastFields;

	const CONTENT_KEY: &'static str = "data";
	const EMPTY_CONTENT: EmptyContent = EmptyContent::Omit;

	fn fields(&self) -> ToastFields {
		ToastFields { viewer: self.viewer.clone() }
	}

	fn variant(&self) -> &ToastData {
		&self.data
	}

	fn from_parts(fields: ToastFields, data: ToastData) -> Self {
		Self { viewer: fields.viewer, data }
	}
}

envelope_serde!(Toast);
