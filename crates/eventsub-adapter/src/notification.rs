use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A notification delivered by EventSub, however the caller happened to receive it
pub trait RawNotification {
	/// e.g. `channel.cheer`
	fn subscription_type(&self) -> &str;

	/// The type-specific `event` object
	fn event(&self) -> &Value;
}

/// Body of an EventSub webhook notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
	pub subscription: Subscription,
	pub event: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
	#[serde(default)]
	pub id: String,
	#[serde(rename = "type")]
	pub kind: String,
	#[serde(default)]
	pub version: String,
}

impl Notification {
	#[must_use]
	pub fn new(subscription_type: impl Into<String>, event: Value) -> Self {
		Self {
			subscription: Subscription {
				id: String::new(),
				kind: subscription_type.into(),
				version: "1".to_string(),
			},
			event,
		}
	}
}

impl RawNotification for Notification {
	fn subscription_type(&self) -> &str {
		&self.subscription.kind
	}

	fn event(&self) -> &Value {
		&self.event
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_parse_webhook_body() {
		let body = json!({
			"subscription": {
				"id": "f1c2a387-161a-49f9-a165-0f21d7a4e1c4",
				"type": "channel.follow",
				"version": "2",
				"status": "enabled",
				"cost": 0,
				"condition": {"broadcaster_user_id": "1337", "moderator_user_id": "1337"},
				"transport": {"method": "webhook", "callback": "https://example.com/webhooks/callback"},
				"created_at": "2019-11-16T10:11:12.634234626Z"
			},
			"event": {"user_id": "1234", "user_name": "Cool_User"}
		});
		let notification: Notification = serde_json::from_value(body).unwrap();
		assert_eq!(notification.subscription_type(), "channel.follow");
		assert_eq!(notification.subscription.version, "2");
		assert_eq!(notification.event()["user_name"], "Cool_User");
	}
}
