use super::{Event, EventType};
use crate::common::State;
use tracing::warn;

/// Derives the broadcast state that follows `prev` once `event` has happened.
///
/// Each recognized event fully determines the new state; events of an unrecognized type
/// leave the previous state untouched.
#[must_use]
pub fn project(prev: &State, event: &Event) -> State {
	match &event.kind {
		EventType::BroadcastStarted | EventType::ScreeningFinished => State {
			broadcast_id: Some(event.broadcast.id),
			..State::default()
		},
		EventType::BroadcastFinished => State::default(),
		EventType::ScreeningStarted => match &event.screening {
			Some(screening) => State {
				broadcast_id: Some(event.broadcast.id),
				screening_id: Some(screening.id),
				tape_id: Some(screening.tape_id),
			},
			None => {
				warn!("screening-started event for broadcast {} carries no screening data", event.broadcast.id);
				State {
					broadcast_id: Some(event.broadcast.id),
					..State::default()
				}
			}
		},
		EventType::Unrecognized(_) => *prev,
	}
}

/// Folds a sequence of events, oldest first, starting from the off-air state
#[must_use]
pub fn replay<'a>(events: impl IntoIterator<Item = &'a Event>) -> State {
	events.into_iter().fold(State::default(), |state, event| project(&state, event))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::broadcast::{BroadcastData, ScreeningData};
	use chrono::{TimeZone, Utc};
	use pretty_assertions::assert_eq;
	use uuid::Uuid;

	fn broadcast() -> BroadcastData {
		BroadcastData {
			id: 55,
			started_at: Utc.with_ymd_and_hms(1997, 9, 1, 12, 0, 0).unwrap(),
		}
	}

	fn screening_id() -> Uuid {
		Uuid::parse_str("f29a4ffe-cb9f-43ba-9f91-a3b1fa350472").unwrap()
	}

	fn screening() -> ScreeningData {
		ScreeningData {
			id: screening_id(),
			started_at: Utc.with_ymd_and_hms(1997, 9, 1, 12, 15, 0).unwrap(),
			tape_id: 109,
		}
	}

	#[test]
	fn test_state_sequence() {
		let events = [
			Event::broadcast_started(broadcast()),
			Event::screening_started(broadcast(), screening()),
			Event::screening_finished(broadcast(), screening()),
			Event::broadcast_finished(broadcast()),
		];
		let want = [
			State {
				broadcast_id: Some(55),
				screening_id: None,
				tape_id: None,
			},
			State {
				broadcast_id: Some(55),
				screening_id: Some(screening_id()),
				tape_id: Some(109),
			},
			State {
				broadcast_id: Some(55),
				screening_id: None,
				tape_id: None,
			},
			State::default(),
		];

		let mut state = State::default();
		for (event, want) in events.iter().zip(want) {
			state = event.to_state(&state);
			assert_eq!(state, want, "after {}", event.kind);
		}
		assert_eq!(replay(&events), State::default());
		assert_eq!(replay(&events[..2]), want[1]);
	}

	#[test]
	fn test_broadcast_started_clears_screening() {
		let prev = State {
			broadcast_id: Some(54),
			screening_id: Some(screening_id()),
			tape_id: Some(3),
		};
		let state = project(&prev, &Event::broadcast_started(broadcast()));
		assert_eq!(
			state,
			State {
				broadcast_id: Some(55),
				..State::default()
			}
		);
	}

	#[test]
	fn test_unrecognized_event_keeps_previous_state() {
		let prev = State {
			broadcast_id: Some(55),
			screening_id: Some(screening_id()),
			tape_id: Some(109),
		};
		let event = Event {
			kind: EventType::Unrecognized("intermission-started".to_string()),
			broadcast: broadcast(),
			screening: None,
		};
		assert_eq!(project(&prev, &event), prev);
	}

	#[test]
	fn test_screening_started_without_screening_data() {
		let event = Event {
			kind: EventType::ScreeningStarted,
			broadcast: broadcast(),
			screening: None,
		};
		let state = project(&State::default(), &event);
		assert_eq!(state.broadcast_id, Some(55));
		assert!(!state.is_screening());
	}
}
