use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted chatbot exchange: one user message and the model's reply.
///
/// Uploaded to S3 after every call/response pair so the conversation
/// is durable and traceable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatLog {
    pub id: Uuid,
    pub user_id: String,
    pub bot: BotKind,
    pub message: String,
    pub response: String,
    pub created_at: jiff::Timestamp,
}

/// Which chatbot persona handled the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotKind {
    GeneralHealth,
    MentalHealth,
}

impl BotKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BotKind::GeneralHealth => "general_health",
            BotKind::MentalHealth => "mental_health",
        }
    }
}
