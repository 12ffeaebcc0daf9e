//! Requests that kick off asynchronous asset generation for a viewer, e.g. an image
//! generated in response to a cheer

use crate::codec::{discriminant, envelope_serde, Envelope, TaggedUnion};
use crate::common::Viewer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

mod color;
mod image;

pub use color::{match_color, Color, NoColor};
pub use image::{ClipArtInputs, GhostInputs, ImagePayload, ImageStyle};

discriminant! {
	/// The kind of asset(s) we want to generate
	pub enum RequestType {
		Image => "image",
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
	pub viewer: Viewer,
	pub payload: RequestPayload,
}

/// Request-type-specific details of what to generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestPayload {
	Image(ImagePayload),
	Unrecognized(String),
}

impl Request {
	#[must_use]
	pub const fn image(viewer: Viewer, payload: ImagePayload) -> Self {
		Self {
			viewer,
			payload: RequestPayload::Image(payload),
		}
	}

	#[must_use]
	pub fn kind(&self) -> RequestType {
		self.payload.kind()
	}
}

impl TaggedUnion for RequestPayload {
	type Kind = RequestType;

	fn kind(&self) -> RequestType {
		match self {
			Self::Image(_) => RequestType::Image,
			Self::Unrecognized(tag) => RequestType::Unrecognized(tag.clone()),
		}
	}

	fn encode_content(&self) -> serde_json::Result<Option<Value>> {
		match self {
			Self::Image(image) => serde_json::to_value(image).map(Some),
			Self::Unrecognized(_) => Ok(None),
		}
	}

	fn decode_content(kind: RequestType, content: Value) -> serde_json::Result<Self> {
		Ok(match kind {
			RequestType::Image => Self::Image(serde_json::from_value(content)?),
			RequestType::Unrecognized(tag) => Self::Unrecognized(tag),
		})
	}
}

#[derive(Serialize, Deserialize)]
pub struct RequestFields {
	viewer: Viewer,
}

impl Envelope for Request {
	type Variant = RequestPayload;
	type Fields = RequestFields;

	const CONTENT_KEY: &'static str = "payload";

	fn fields(&self) -> RequestFields {
		RequestFields { viewer: self.viewer.clone() }
	}

	fn variant(&self) -> &RequestPayload {
		&self.payload
	}

	fn from_parts(fields: RequestFields, payload: RequestPayload) -> Self {
		Self { viewer: fields.viewer, payload }
	}
}

envelope_serde!(Request);
