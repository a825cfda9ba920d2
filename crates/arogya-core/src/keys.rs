//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of objects in the Arogya S3 bucket.

use uuid::Uuid;

pub fn prediction(user_id: &str, id: Uuid) -> String {
    format!("predictions/{user_id}/{id}.json")
}

pub fn predictions_prefix(user_id: &str) -> String {
    format!("predictions/{user_id}/")
}

pub fn chat_log(user_id: &str, id: Uuid) -> String {
    format!("chatlogs/{user_id}/{id}.json")
}

pub fn chat_logs_prefix(user_id: &str) -> String {
    format!("chatlogs/{user_id}/")
}

/// Subscriptions are keyed by the digits of the E.164 number so that a
/// re-subscribe lands on the same object.
pub fn subscription(phone_digits: &str) -> String {
    format!("subscriptions/{phone_digits}.json")
}

pub const SUBSCRIPTIONS_PREFIX: &str = "subscriptions/";

pub fn message_log(id: Uuid) -> String {
    format!("message-logs/{id}.json")
}

pub const MESSAGE_LOGS_PREFIX: &str = "message-logs/";

pub const ALERT_INDEX: &str = "_state/alerts.json";
