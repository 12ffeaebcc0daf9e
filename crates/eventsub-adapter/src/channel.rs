//! Channel notifications: the fields we read from each EventSub `event` object and how
//! they become platform events

use crate::AdapterError;
use serde::de::Error as _;
use serde::Deserialize;
use stream_schemas::twitch::{credit_multiplier, Event, Payload, UnrecognizedTier, ViewerCheered, ViewerGiftedSubs, ViewerRaided, ViewerResubscribed, ViewerReceivedGiftSub, ViewerSubscribed};
use stream_schemas::Viewer;

#[derive(Debug, Deserialize)]
pub struct ChannelFollow {
	pub user_id: String,
	pub user_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ChannelRaid {
	pub from_broadcaster_user_id: String,
	pub from_broadcaster_user_name: String,
	pub viewers: u32,
}

#[derive(Debug, Deserialize)]
pub struct ChannelCheer {
	pub is_anonymous: bool,
	pub user_id: Option<String>,
	pub user_name: Option<String>,
	pub message: String,
	pub bits: u32,
}

#[derive(Debug, Deserialize)]
pub struct ChannelSubscribe {
	pub user_id: String,
	pub user_name: String,
	pub tier: String,
	pub is_gift: bool,
}

#[derive(Debug, Deserialize)]
pub struct ChannelSubscriptionMessage {
	pub user_id: String,
	pub user_name: String,
	pub tier: String,
	pub message: SubscriptionMessage,
	pub cumulative_months: u32,
}

#[derive(Debug, Deserialize)]
pub struct SubscriptionMessage {
	pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ChannelSubscriptionGift {
	pub user_id: Option<String>,
	pub user_name: Option<String>,
	pub total: u32,
	pub tier: String,
	pub is_anonymous: bool,
}

/// The viewer behind an event that may have been made anonymously. A non-anonymous event
/// must name its user.
fn viewer_unless_anonymous(subscription_type: &str, is_anonymous: bool, user_id: Option<String>, user_name: Option<String>) -> Result<Option<Viewer>, AdapterError> {
	if is_anonymous {
		return Ok(None);
	}
	let missing = |field| AdapterError::MalformedNotification {
		subscription_type: subscription_type.to_string(),
		source: serde_json::Error::missing_field(field),
	};
	let id = user_id.ok_or_else(|| missing("user_id"))?;
	let name = user_name.ok_or_else(|| missing("user_name"))?;
	Ok(Some(Viewer::new(id, name)))
}

impl From<ChannelFollow> for Event {
	fn from(ev: ChannelFollow) -> Self {
		Self::new(Viewer::new(ev.user_id, ev.user_name), Payload::ViewerFollowed)
	}
}

/// The raiding broadcaster is the viewer we credit
impl From<ChannelRaid> for Event {
	fn from(ev: ChannelRaid) -> Self {
		Self::new(
			Viewer::new(ev.from_broadcaster_user_id, ev.from_broadcaster_user_name),
			Payload::ViewerRaided(ViewerRaided { num_raiders: ev.viewers }),
		)
	}
}

impl TryFrom<ChannelCheer> for Event {
	type Error = AdapterError;

	fn try_from(ev: ChannelCheer) -> Result<Self, Self::Error> {
		Ok(Self {
			viewer: viewer_unless_anonymous(crate::CHANNEL_CHEER, ev.is_anonymous, ev.user_id, ev.user_name)?,
			payload: Payload::ViewerCheered(ViewerCheered {
				num_bits: ev.bits,
				message: ev.message,
			}),
		})
	}
}

impl TryFrom<ChannelSubscribe> for Event {
	type Error = UnrecognizedTier;

	fn try_from(ev: ChannelSubscribe) -> Result<Self, Self::Error> {
		let credit_multiplier = credit_multiplier(&ev.tier)?;
		let payload = if ev.is_gift {
			Payload::ViewerReceivedGiftSub(ViewerReceivedGiftSub { credit_multiplier })
		} else {
			Payload::ViewerSubscribed(ViewerSubscribed { credit_multiplier })
		};
		Ok(Self::new(Viewer::new(ev.user_id, ev.user_name), payload))
	}
}

impl TryFrom<ChannelSubscriptionMessage> for Event {
	type Error = UnrecognizedTier;

	fn try_from(ev: ChannelSubscriptionMessage) -> Result<Self, Self::Error> {
		Ok(Self::new(
			Viewer::new(ev.user_id, ev.user_name),
			Payload::ViewerResubscribed(ViewerResubscribed {
				credit_multiplier: credit_multiplier(&ev.tier)?,
				num_cumulative_months: ev.cumulative_months,
				message: ev.message.text,
			}),
		))
	}
}

impl TryFrom<ChannelSubscriptionGift> for Event {
	type Error = AdapterError;

	fn try_from(ev: ChannelSubscriptionGift) -> Result<Self, Self::Error> {
		Ok(Self {
			viewer: viewer_unless_anonymous(crate::CHANNEL_SUBSCRIPTION_GIFT, ev.is_anonymous, ev.user_id, ev.user_name)?,
			payload: Payload::ViewerGiftedSubs(ViewerGiftedSubs {
				credit_multiplier: credit_multiplier(&ev.tier)?,
				num_subscriptions: ev.total,
			}),
		})
	}
}
