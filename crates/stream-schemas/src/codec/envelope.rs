use super::{CodecError, Discriminant, Result};
use crate::config::DecodeConfig;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// A sum type whose active case is named by a discriminant and whose case-specific data
/// travels as a single nested JSON value.
pub trait TaggedUnion: Sized {
	type Kind: Discriminant;

	fn kind(&self) -> Self::Kind;

	/// Content for the active case, or `None` when the case carries no detail
	///
	/// # Errors
	///
	/// Fails when the content cannot be represented as JSON.
	fn encode_content(&self) -> serde_json::Result<Option<Value>>;

	/// Builds the case selected by `kind` from its content. Cases without detail ignore
	/// `content`; an unrecognized kind yields the unrecognized case.
	///
	/// # Errors
	///
	/// Fails when `content` does not fit the selected case.
	fn decode_content(kind: Self::Kind, content: Value) -> serde_json::Result<Self>;
}

/// How an envelope writes its content key when the active case has nothing to carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyContent {
	/// `"<key>": null`
	Null,
	/// key left out entirely
	Omit,
}

/// A JSON object made of a tag, a fixed set of envelope fields and one content key
/// holding the data of a `TaggedUnion`.
pub trait Envelope: Sized {
	type Variant: TaggedUnion;
	type Fields: Serialize + DeserializeOwned;

	const TAG_KEY: &'static str = "type";
	const CONTENT_KEY: &'static str;
	const EMPTY_CONTENT: EmptyContent = EmptyContent::Null;

	fn fields(&self) -> Self::Fields;
	fn variant(&self) -> &Self::Variant;
	fn from_parts(fields: Self::Fields, variant: Self::Variant) -> Self;
}

/// Envelope fields for envelopes that carry nothing besides tag and content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoFields {}

/// Encodes an envelope as a JSON object: tag first, then envelope fields in declaration
/// order, then content.
///
/// # Errors
///
/// Fails with [`CodecError::EncodeFailed`] when the content or envelope fields cannot be
/// represented as JSON, or when an `Unrecognized` case holds a tag this build knows.
pub fn to_value<E: Envelope>(envelope: &E) -> Result<Value> {
	let variant = envelope.variant();
	let kind = variant.kind();
	if !kind.is_consistent() {
		return Err(CodecError::EncodeFailed {
			kind: kind.to_string(),
			reason: "unrecognized variant holds a known tag".to_string(),
		});
	}

	let fields = match serde_json::to_value(envelope.fields()) {
		Ok(Value::Object(fields)) => fields,
		Ok(other) => {
			return Err(CodecError::EncodeFailed {
				kind: kind.to_string(),
				reason: format!("envelope fields must encode as an object, got {}", describe(&other)),
			});
		}
		Err(e) => {
			return Err(CodecError::EncodeFailed {
				kind: kind.to_string(),
				reason: e.to_string(),
			});
		}
	};

	let content = variant.encode_content().map_err(|e| CodecError::EncodeFailed {
		kind: kind.to_string(),
		reason: e.to_string(),
	})?;

	let mut object = Map::with_capacity(fields.len() + 2);
	object.insert(E::TAG_KEY.to_string(), Value::String(kind.as_str().to_string()));
	object.extend(fields);
	match (content, E::EMPTY_CONTENT) {
		(Some(content), _) => {
			object.insert(E::CONTENT_KEY.to_string(), content);
		}
		(None, EmptyContent::Null) => {
			object.insert(E::CONTENT_KEY.to_string(), Value::Null);
		}
		(None, EmptyContent::Omit) => {}
	}
	Ok(Value::Object(object))
}

/// Encodes an envelope as JSON bytes.
///
/// # Errors
///
/// See [`to_value`].
pub fn encode<E: Envelope>(envelope: &E) -> Result<Vec<u8>> {
	let value = to_value(envelope)?;
	serde_json::to_vec(&value).map_err(|e| CodecError::EncodeFailed {
		kind: envelope.variant().kind().to_string(),
		reason: e.to_string(),
	})
}

/// Decodes an envelope from a JSON value, accepting unknown tags.
///
/// # Errors
///
/// See [`from_value_with`].
pub fn from_value<E: Envelope>(value: Value) -> Result<E> {
	from_value_with(value, &DecodeConfig::default())
}

/// Two-phase decode: the tag and envelope fields are read eagerly, the content is held
/// back and decoded once the tag has selected a case.
///
/// # Errors
///
/// Fails when the value is not an object with a string tag, when a known case's content or
/// the envelope fields do not fit, or when the tag is unknown and `config` rejects unknown tags.
pub fn from_value_with<E: Envelope>(value: Value, config: &DecodeConfig) -> Result<E> {
	let mut object = match value {
		Value::Object(object) => object,
		other => return Err(CodecError::MalformedPayload(format!("expected a JSON object, got {}", describe(&other)))),
	};

	let kind = match object.remove(E::TAG_KEY) {
		Some(Value::String(tag)) => <<E::Variant as TaggedUnion>::Kind as Discriminant>::from_wire(&tag),
		Some(other) => {
			return Err(CodecError::MalformedPayload(format!("'{}' must be a string, got {}", E::TAG_KEY, describe(&other))));
		}
		None => return Err(CodecError::MalformedPayload(format!("missing '{}' field", E::TAG_KEY))),
	};

	let content = object.remove(E::CONTENT_KEY).unwrap_or(Value::Null);
	let fields: E::Fields = serde_json::from_value(Value::Object(object)).map_err(|e| CodecError::MalformedPayload(format!("invalid envelope for '{kind}': {e}")))?;

	if !kind.is_recognized() {
		if config.reject_unrecognized {
			return Err(CodecError::UnrecognizedDiscriminant(kind.to_string()));
		}
		debug!("Unrecognized {} '{}', decoding with empty content", E::TAG_KEY, kind);
	}

	trace!("Decoding content for '{}'", kind);
	let variant = E::Variant::decode_content(kind.clone(), content).map_err(|source| CodecError::MalformedVariant {
		kind: kind.to_string(),
		source,
	})?;
	Ok(E::from_parts(fields, variant))
}

/// Decodes an envelope from JSON bytes, accepting unknown tags.
///
/// # Errors
///
/// Fails on invalid JSON and otherwise as [`from_value_with`] does.
pub fn decode<E: Envelope>(bytes: &[u8]) -> Result<E> {
	decode_with(bytes, &DecodeConfig::default())
}

/// Decodes an envelope from JSON bytes under `config`.
///
/// # Errors
///
/// Fails on invalid JSON and otherwise as [`from_value_with`] does.
pub fn decode_with<E: Envelope>(bytes: &[u8], config: &DecodeConfig) -> Result<E> {
	let value: Value = serde_json::from_slice(bytes).map_err(|e| CodecError::MalformedPayload(e.to_string()))?;
	from_value_with(value, config)
}

fn describe(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

/// Byte-level helpers available on every envelope type
pub trait Wire: Envelope {
	/// # Errors
	///
	/// See [`encode`].
	fn to_json_bytes(&self) -> Result<Vec<u8>> {
		encode(self)
	}

	/// # Errors
	///
	/// See [`decode`].
	fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
		decode(bytes)
	}
}

impl<E: Envelope> Wire for E {}

/// Implements `Serialize`/`Deserialize` for an envelope by routing through the codec, so
/// envelopes nest inside one another as ordinary serde values.
macro_rules! envelope_serde {
	($name:ty) => {
		impl ::serde::Serialize for $name {
			fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
				let value = $crate::codec::to_value(self).map_err(<S::Error as ::serde::ser::Error>::custom)?;
				::serde::Serialize::serialize(&value, serializer)
			}
		}

		impl<'de> ::serde::Deserialize<'de> for $name {
			fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
				let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
				$crate::codec::from_value(value).map_err(<D::Error as ::serde::de::Error>::custom)
			}
		}
	};
}

pub(crate) use envelope_serde;
