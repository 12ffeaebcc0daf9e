use crate::codec::{discriminant, envelope_serde, Envelope, TaggedUnion};
use crate::common::Viewer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

discriminant! {
	pub enum ImageType {
		Static => "static",
		Ghost => "ghost",
		Friend => "friend",
	}
}

/// Display of an image for a viewer: either a prebuilt one or one generated in response to
/// an earlier request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAlert {
	pub viewer: Viewer,
	pub details: ImageDetails,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageDetails {
	Static(StaticImage),
	Ghost(GhostImage),
	Friend(FriendImage),
	Unrecognized(String),
}

/// One of the stock images bundled with the onscreen graphics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticImage {
	pub image_id: String,
	pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GhostImage {
	pub image_url: String,
	pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendImage {
	pub image_url: String,
	pub description: String,
	pub name: String,
	pub background_color: String,
}

impl ImageAlert {
	#[must_use]
	pub fn kind(&self) -> ImageType {
		self.details.kind()
	}
}

impl TaggedUnion for ImageDetails {
	type Kind = ImageType;

	fn kind(&self) -> ImageType {
		match self {
			Self::Static(_) => ImageType::Static,
			Self::Ghost(_) => ImageType::Ghost,
			Self::Friend(_) => ImageType::Friend,
			Self::Unrecognized(tag) => ImageType::Unrecognized(tag.clone()),
		}
	}

	fn encode_content(&self) -> serde_json::Result<Option<Value>> {
		match self {
			Self::Static(d) => serde_json::to_value(d).map(Some),
			Self::Ghost(d) => serde_json::to_value(d).map(Some),
			Self::Friend(d) => serde_json::to_value(d).map(Some),
			Self::Unrecognized(_) => Ok(None),
		}
	}

	fn decode_content(kind: ImageType, details: Value) -> serde_json::Result<Self> {
		Ok(match kind {
			ImageType::Static => Self::Static(serde_json::from_value(details)?),
			ImageType::Ghost => Self::Ghost(serde_json::from_value(details)?),
			ImageType::Friend => Self::Friend(serde_json::from_value(details)?),
			ImageType::Unrecognized(tag) => Self::Unrecognized(tag),
		})
	}
}

#[derive(Serialize, Deserialize)]
pub struct ImageAlertFields {
	viewer: Viewer,
}

impl Envelope for ImageAlert {
	type Variant = ImageDetails;
	type Fields = ImageAlertFields;

	const CONTENT_KEY: &'static str = "details";

	fn fields(&self) -> ImageAlertFields {
		ImageAlertFields { viewer: self.viewer.clone() }
	}

	fn variant(&self) -> &ImageDetails {
		&self.details
	}

	fn from_parts(fields: ImageAlertFields, details: ImageDetails) -> Self {
		Self { viewer: fields.viewer, details }
	}
}

envelope_serde!(ImageAlert);
