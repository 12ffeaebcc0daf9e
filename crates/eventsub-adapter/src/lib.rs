//! Converts notifications received from Twitch EventSub into platform events
//! ([`stream_schemas::twitch::Event`]).
//!
//! Only the notification types we care about are supported; anything else is reported as
//! [`AdapterError::UnsupportedNotificationType`] so the caller can decide whether to ignore it.

mod channel;
mod error;
mod notification;
mod stream;

use serde::de::DeserializeOwned;
use stream_schemas::twitch::Event;
use tracing::{debug, warn};

pub use error::{AdapterError, Result};
pub use notification::{Notification, RawNotification, Subscription};

pub const STREAM_ONLINE: &str = "stream.online";
pub const STREAM_OFFLINE: &str = "stream.offline";
pub const CHANNEL_HYPE_TRAIN_BEGIN: &str = "channel.hype_train.begin";
pub const CHANNEL_FOLLOW: &str = "channel.follow";
pub const CHANNEL_RAID: &str = "channel.raid";
pub const CHANNEL_CHEER: &str = "channel.cheer";
pub const CHANNEL_SUBSCRIBE: &str = "channel.subscribe";
pub const CHANNEL_SUBSCRIPTION_MESSAGE: &str = "channel.subscription.message";
pub const CHANNEL_SUBSCRIPTION_GIFT: &str = "channel.subscription.gift";

/// Every subscription type [`to_platform_event`] knows how to convert
pub const SUPPORTED_TYPES: &[&str] = &[
	STREAM_ONLINE,
	STREAM_OFFLINE,
	CHANNEL_HYPE_TRAIN_BEGIN,
	CHANNEL_FOLLOW,
	CHANNEL_RAID,
	CHANNEL_CHEER,
	CHANNEL_SUBSCRIBE,
	CHANNEL_SUBSCRIPTION_MESSAGE,
	CHANNEL_SUBSCRIPTION_GIFT,
];

/// Converts one EventSub notification into the platform event it describes.
///
/// # Errors
///
/// Fails when the subscription type is not one we convert, when the `event` object
/// does not have the fields that type needs, or when it names an unknown subscription tier.
pub fn to_platform_event<N: RawNotification + ?Sized>(notification: &N) -> Result<Event> {
	let subscription_type = notification.subscription_type();
	let result = match subscription_type {
		STREAM_ONLINE => Ok(stream::from_stream_online()),
		STREAM_OFFLINE => Ok(stream::from_stream_offline()),
		CHANNEL_HYPE_TRAIN_BEGIN => Ok(stream::from_hype_train_begin()),
		CHANNEL_FOLLOW => parse::<channel::ChannelFollow>(notification).map(Event::from),
		CHANNEL_RAID => parse::<channel::ChannelRaid>(notification).map(Event::from),
		CHANNEL_CHEER => parse::<channel::ChannelCheer>(notification).and_then(Event::try_from),
		CHANNEL_SUBSCRIBE => parse::<channel::ChannelSubscribe>(notification).and_then(|ev| Event::try_from(ev).map_err(AdapterError::from)),
		CHANNEL_SUBSCRIPTION_MESSAGE => parse::<channel::ChannelSubscriptionMessage>(notification).and_then(|ev| Event::try_from(ev).map_err(AdapterError::from)),
		CHANNEL_SUBSCRIPTION_GIFT => parse::<channel::ChannelSubscriptionGift>(notification).and_then(Event::try_from),
		other => Err(AdapterError::UnsupportedNotificationType(other.to_string())),
	};

	match &result {
		Ok(event) => debug!("Converted {} notification to {}", subscription_type, event.kind()),
		Err(e) if e.is_unsupported() => debug!("Ignoring notification: {}", e),
		Err(e) => warn!("Failed to convert {} notification: {}", subscription_type, e),
	}
	result
}

fn parse<T: DeserializeOwned>(notification: &(impl RawNotification + ?Sized)) -> Result<T> {
	T::deserialize(notification.event()).map_err(|source| AdapterError::MalformedNotification {
		subscription_type: notification.subscription_type().to_string(),
		source,
	})
}

