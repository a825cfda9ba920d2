use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// An SMS/WhatsApp health-alert subscription, keyed by phone number.
///
/// Unsubscribing deactivates rather than deletes, so a later re-subscribe
/// keeps the original `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subscription {
    pub id: Uuid,
    /// E.164, e.g. `+919876543210`.
    pub phone_number: String,
    pub language: Language,
    /// Service tags the subscriber opted into (e.g. "health_alerts",
    /// "vaccination_reminders").
    pub services: Vec<String>,
    pub active: bool,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// Subscriber-facing message language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Language {
    #[default]
    En,
    Hi,
}

/// Delivery channel for outbound messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Sms,
    WhatsApp,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Sms => "sms",
            Channel::WhatsApp => "whatsapp",
        }
    }
}

/// Outcome of a send attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

/// A log entry for one outbound message, successful or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageLog {
    pub id: Uuid,
    pub phone_number: String,
    pub body: String,
    pub channel: Channel,
    pub status: DeliveryStatus,
    /// Provider-assigned message id, when the send succeeded.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub provider_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    pub sent_at: jiff::Timestamp,
}
