//! Events describing changes in the overall broadcast state

use crate::codec::{discriminant, CodecError, Result};
use crate::common::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod projector;

pub use projector::{project, replay};

discriminant! {
	/// Which state change has taken place
	pub enum EventType {
		BroadcastStarted => "broadcast-started",
		BroadcastFinished => "broadcast-finished",
		ScreeningStarted => "screening-started",
		ScreeningFinished => "screening-finished",
	}
}

/// A change in the overall broadcast state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
	#[serde(rename = "type")]
	pub kind: EventType,
	pub broadcast: BroadcastData,
	/// Only present for screening events
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub screening: Option<ScreeningData>,
}

/// The broadcast in which an event occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastData {
	pub id: i64,
	pub started_at: DateTime<Utc>,
}

/// The screening in which an event occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningData {
	pub id: Uuid,
	pub started_at: DateTime<Utc>,
	pub tape_id: i64,
}

impl Event {
	#[must_use]
	pub const fn broadcast_started(broadcast: BroadcastData) -> Self {
		Self {
			kind: EventType::BroadcastStarted,
			broadcast,
			screening: None,
		}
	}

	#[must_use]
	pub const fn broadcast_finished(broadcast: BroadcastData) -> Self {
		Self {
			kind: EventType::BroadcastFinished,
			broadcast,
			screening: None,
		}
	}

	#[must_use]
	pub const fn screening_started(broadcast: BroadcastData, screening: ScreeningData) -> Self {
		Self {
			kind: EventType::ScreeningStarted,
			broadcast,
			screening: Some(screening),
		}
	}

	#[must_use]
	pub const fn screening_finished(broadcast: BroadcastData, screening: ScreeningData) -> Self {
		Self {
			kind: EventType::ScreeningFinished,
			broadcast,
			screening: Some(screening),
		}
	}

	/// The state that results from applying this event on top of `prev`
	#[must_use]
	pub fn to_state(&self, prev: &State) -> State {
		project(prev, self)
	}

	/// Encodes the event as JSON bytes.
	///
	/// # Errors
	///
	/// Fails when the event type is `Unrecognized` but holds a tag this build knows.
	pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
		serde_json::to_vec(self).map_err(|e| CodecError::EncodeFailed {
			kind: self.kind.to_string(),
			reason: e.to_string(),
		})
	}

	/// Decodes an event from JSON bytes.
	///
	/// # Errors
	///
	/// Fails on invalid JSON or when a required field is missing or mistyped.
	pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
		serde_json::from_slice(bytes).map_err(|e| CodecError::MalformedPayload(e.to_string()))
	}
}
