use super::color::{match_color, Color, NoColor};
use crate::codec::{discriminant, envelope_serde, Envelope, NoFields, TaggedUnion};
use serde::{Deserialize, Serialize};
use serde_json::Value;

discriminant! {
	/// The style of alert we want to generate an image for
	pub enum ImageStyle {
		Ghost => "ghost",
		ClipArt => "clip-art",
	}
}

/// A request to generate one or more images for an alert. The user-provided inputs we
/// build a prompt from vary by style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePayload {
	Ghost(GhostInputs),
	ClipArt(ClipArtInputs),
	Unrecognized(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GhostInputs {
	pub subject: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipArtInputs {
	pub color: Color,
	pub subject: String,
}

impl ClipArtInputs {
	/// Splits a description like "yellow caterpillar in a top hat" into its leading color
	/// and the subject that follows
	///
	/// # Errors
	///
	/// [`NoColor`] when the description does not start with a color name.
	pub fn from_description(description: &str) -> Result<Self, NoColor> {
		let (color, subject) = match_color(description)?;
		Ok(Self {
			color,
			subject: subject.to_string(),
		})
	}
}

impl ImagePayload {
	#[must_use]
	pub fn ghost(subject: impl Into<String>) -> Self {
		Self::Ghost(GhostInputs { subject: subject.into() })
	}

	#[must_use]
	pub fn clip_art(color: Color, subject: impl Into<String>) -> Self {
		Self::ClipArt(ClipArtInputs {
			color,
			subject: subject.into(),
		})
	}

	#[must_use]
	pub fn style(&self) -> ImageStyle {
		self.kind()
	}
}

impl TaggedUnion for ImagePayload {
	type Kind = ImageStyle;

	fn kind(&self) -> ImageStyle {
		match self {
			Self::Ghost(_) => ImageStyle::Ghost,
			Self::ClipArt(_) => ImageStyle::ClipArt,
			Self::Unrecognized(style) => ImageStyle::Unrecognized(style.clone()),
		}
	}

	fn encode_content(&self) -> serde_json::Result<Option<Value>> {
		match self {
			Self::Ghost(inputs) => serde_json::to_value(inputs).map(Some),
			Self::ClipArt(inputs) => serde_json::to_value(inputs).map(Some),
			Self::Unrecognized(_) => Ok(None),
		}
	}

	fn decode_content(style: ImageStyle, inputs: Value) -> serde_json::Result<Self> {
		Ok(match style {
			ImageStyle::Ghost => Self::Ghost(serde_json::from_value(inputs)?),
			ImageStyle::ClipArt => Self::ClipArt(serde_json::from_value(inputs)?),
			ImageStyle::Unrecognized(style) => Self::Unrecognized(style),
		})
	}
}

impl Envelope for ImagePayload {
	type Variant = Self;
	type Fields = NoFields;

	const TAG_KEY: &'static str = "style";
	const CONTENT_KEY: &'static str = "inputs";

	fn fields(&self) -> NoFields {
		NoFields {}
	}

	fn variant(&self) -> &Self {
		self
	}

	fn from_parts(_: NoFields, payload: Self) -> Self {
		payload
	}
}

envelope_serde!(ImagePayload);

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn test_image_payload_json() {
		assert_eq!(
			serde_json::to_value(ImagePayload::clip_art(Color::SkyBlue, "a kite")).unwrap(),
			json!({"style": "clip-art", "inputs": {"color": "sky-blue", "subject": "a kite"}})
		);
		let payload: ImagePayload = serde_json::from_value(json!({"style": "ghost", "inputs": {"subject": "a seal"}})).unwrap();
		assert_eq!(payload, ImagePayload::ghost("a seal"));
		assert_eq!(payload.style(), ImageStyle::Ghost);
	}

	#[test]
	fn test_unrecognized_style() {
		let payload: ImagePayload = serde_json::from_value(json!({"style": "friend", "inputs": {"name": "Sealy"}})).unwrap();
		assert_eq!(payload, ImagePayload::Unrecognized("friend".to_string()));
		assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"style": "friend", "inputs": null}));
	}

	#[test]
	fn test_clip_art_color_must_be_known() {
		let err = serde_json::from_value::<ImagePayload>(json!({"style": "clip-art", "inputs": {"color": "taupe", "subject": "a mouse"}})).unwrap_err();
		assert!(err.to_string().contains("clip-art"), "{err}");
	}

	#[test]
	fn test_clip_art_from_description() {
		assert_eq!(
			ClipArtInputs::from_description("Yellow caterpillar in a top hat"),
			Ok(ClipArtInputs {
				color: Color::Yellow,
				subject: "caterpillar in a top hat".to_string(),
			})
		);
		assert_eq!(
			ClipArtInputs::from_description("orange-red  fox"),
			Ok(ClipArtInputs {
				color: Color::RedOrange,
				subject: "fox".to_string(),
			})
		);
		assert_eq!(ClipArtInputs::from_description("a ripe orange on a tree"), Err(NoColor));
	}
}
