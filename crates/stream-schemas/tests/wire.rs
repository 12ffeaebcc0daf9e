use pretty_assertions::assert_eq;
use serde_json::json;
use stream_schemas::codec::{decode, decode_with, encode, from_value, Discriminant, Envelope, NoFields, TaggedUnion};
use stream_schemas::genreq::{ClipArtInputs, ImagePayload, Request, RequestPayload};
use stream_schemas::onscreen::{self, ImageAlert, ImageDetails, Toast, ToastData};
use stream_schemas::twitch::{self, Payload, ViewerCheered, ViewerGiftedSubs};
use stream_schemas::{broadcast, CodecError, DecodeConfig, State, Viewer, Wire};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_test_writer().try_init();
}

fn viewer() -> Viewer {
	Viewer::new("90790024", "wasabimilkshake")
}

#[test]
fn cheer_flows_into_generation_request_and_onscreen_alert() {
	init_tracing();

	let cheer = twitch::Event::new(
		viewer(),
		Payload::ViewerCheered(ViewerCheered {
			num_bits: 300,
			message: "red-orange fox in a canoe".to_string(),
		}),
	);
	let cheer = twitch::Event::from_json_bytes(&cheer.to_json_bytes().unwrap()).unwrap();
	let Payload::ViewerCheered(details) = &cheer.payload else {
		panic!("expected a cheer, got {cheer:?}");
	};

	let inputs = ClipArtInputs::from_description(&details.message).unwrap();
	let viewer = cheer.viewer.clone().unwrap();
	let req = Request::image(viewer.clone(), ImagePayload::ClipArt(inputs));
	assert_eq!(
		serde_json::to_value(&req).unwrap(),
		json!({
			"type": "image",
			"viewer": {"twitch_user_id": "90790024", "twitch_display_name": "wasabimilkshake"},
			"payload": {"style": "clip-art", "inputs": {"color": "red-orange", "subject": "fox in a canoe"}},
		})
	);

	let req: Request = decode(&encode(&req).unwrap()).unwrap();
	let RequestPayload::Image(ImagePayload::ClipArt(inputs)) = &req.payload else {
		panic!("expected a clip art request, got {req:?}");
	};
	let alert = onscreen::Event::image(ImageAlert {
		viewer,
		details: ImageDetails::Friend(onscreen::FriendImage {
			image_url: "https://my-cool-images.biz/fox.png".to_string(),
			description: inputs.subject.clone(),
			name: "Foxy".to_string(),
			background_color: format!("{}", inputs.color.complement()),
		}),
	});
	let bytes = alert.to_json_bytes().unwrap();
	assert_eq!(
		serde_json::from_slice::<serde_json::Value>(&bytes).unwrap()["payload"]["details"]["background_color"],
		json!("cyan")
	);
	assert_eq!(onscreen::Event::from_json_bytes(&bytes).unwrap(), alert);
}

#[test]
fn anonymous_gift_becomes_anonymous_toast() {
	let gift = twitch::Event::anonymous(Payload::ViewerGiftedSubs(ViewerGiftedSubs {
		credit_multiplier: 5,
		num_subscriptions: 2,
	}));
	let Payload::ViewerGiftedSubs(subs) = &gift.payload else {
		unreachable!();
	};
	let toast = onscreen::Event::toast(Toast {
		viewer: gift.viewer.clone(),
		data: ToastData::GiftedSubs(onscreen::GiftedSubs {
			num_subscriptions: subs.num_subscriptions,
		}),
	});
	assert_eq!(
		String::from_utf8(toast.to_json_bytes().unwrap()).unwrap(),
		r#"{"type":"toast","payload":{"type":"gifted-subs","viewer":null,"data":{"num_subscriptions":2}}}"#
	);
}

#[test]
fn strict_config_applies_to_top_level_discriminant() {
	init_tracing();

	let strict = DecodeConfig::strict();
	let unknown = br#"{"type":"viewer-hosted","viewer":null,"payload":null}"#;
	assert!(matches!(decode_with::<twitch::Event>(unknown, &strict), Err(CodecError::UnrecognizedDiscriminant(tag)) if tag == "viewer-hosted"));

	let permissive = decode_with::<twitch::Event>(unknown, &DecodeConfig::default()).unwrap();
	assert_eq!(permissive.kind().to_string(), "viewer-hosted");

	let known = br#"{"type":"stream-started","viewer":null,"payload":null}"#;
	assert_eq!(decode_with::<twitch::Event>(known, &strict).unwrap(), twitch::Event::anonymous(Payload::StreamStarted));
}

#[test]
fn malformed_input_is_rejected_by_every_family() {
	let inputs: [&[u8]; 4] = [b"", b"null", b"\"toast\"", br#"{"payload":null}"#];
	for input in inputs {
		assert!(matches!(decode::<twitch::Event>(input), Err(CodecError::MalformedPayload(_))));
		assert!(matches!(decode::<onscreen::Event>(input), Err(CodecError::MalformedPayload(_))));
		assert!(matches!(decode::<Request>(input), Err(CodecError::MalformedPayload(_))));
		assert!(matches!(broadcast::Event::from_json_bytes(input), Err(CodecError::MalformedPayload(_))));
	}
}

#[test]
fn broadcast_history_replays_to_current_state() {
	let history = json!([
		{"type": "broadcast-started", "broadcast": {"id": 13, "started_at": "2023-11-02T19:00:00Z"}},
		{"type": "screening-started", "broadcast": {"id": 13, "started_at": "2023-11-02T19:00:00Z"},
			"screening": {"id": "96d1ca5c-7658-48c9-8193-9d1739854467", "started_at": "2023-11-02T19:05:00Z", "tape_id": 124}},
		{"type": "intermission-started", "broadcast": {"id": 13, "started_at": "2023-11-02T19:00:00Z"}},
	]);
	let events: Vec<broadcast::Event> = serde_json::from_value(history).unwrap();
	let state = broadcast::replay(&events);
	assert_eq!(
		serde_json::to_value(state).unwrap(),
		json!({"broadcast_id": 13, "screening_id": "96d1ca5c-7658-48c9-8193-9d1739854467", "tape_id": 124})
	);
	assert!(state.is_screening());
	assert_ne!(state, State::default());
}

#[test]
fn envelopes_nest_as_plain_serde_values() {
	let toasts: Vec<onscreen::Event> = from_value::<Batch>(json!({
		"type": "batch",
		"items": [
			{"type": "status", "payload": {"current_tape_id": 7}},
			{"type": "toast", "payload": {"type": "subscribed", "viewer": null}},
		],
	}))
	.map(|b| b.0)
	.unwrap();
	assert_eq!(toasts[0], onscreen::Event::status(7));
	assert_eq!(
		toasts[1],
		onscreen::Event::toast(Toast {
			viewer: None,
			data: ToastData::Subscribed,
		})
	);
}

// A minimal envelope defined outside the crate, holding a list of onscreen events
#[derive(Debug)]
struct Batch(Vec<onscreen::Event>);

#[derive(Debug, Clone, PartialEq, Eq)]
enum BatchKind {
	Batch,
	Other(String),
}

impl std::fmt::Display for BatchKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(Discriminant::as_str(self))
	}
}

impl Discriminant for BatchKind {
	const KNOWN: &'static [&'static str] = &["batch"];

	fn as_str(&self) -> &str {
		match self {
			Self::Batch => "batch",
			Self::Other(s) => s,
		}
	}

	fn from_wire(tag: &str) -> Self {
		match tag {
			"batch" => Self::Batch,
			other => Self::Other(other.to_string()),
		}
	}

	fn is_recognized(&self) -> bool {
		matches!(self, Self::Batch)
	}
}

impl TaggedUnion for Batch {
	type Kind = BatchKind;

	fn kind(&self) -> BatchKind {
		BatchKind::Batch
	}

	fn encode_content(&self) -> serde_json::Result<Option<serde_json::Value>> {
		serde_json::to_value(&self.0).map(Some)
	}

	fn decode_content(_: BatchKind, content: serde_json::Value) -> serde_json::Result<Self> {
		serde_json::from_value(content).map(Batch)
	}
}

impl Envelope for Batch {
	type Variant = Self;
	type Fields = NoFields;

	const CONTENT_KEY: &'static str = "items";

	fn fields(&self) -> NoFields {
		NoFields {}
	}

	fn variant(&self) -> &Self {
		self
	}

	fn from_parts(_: NoFields, batch: Self) -> Self {
		batch
	}
}
