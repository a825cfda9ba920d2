//! Outbound message transport.

use uuid::Uuid;

use arogya_core::models::Channel;

use crate::error::MessagingError;

/// A transport that can deliver one message and return the provider's id
/// for it.
pub trait MessageSender: Send + Sync {
    fn send(
        &self,
        channel: Channel,
        to: &str,
        body: &str,
    ) -> impl Future<Output = Result<String, MessagingError>> + Send;
}

/// Sender that delivers nothing and fabricates provider ids.
///
/// Stands in for the SMS gateway in development and tests; every send
/// "succeeds" and is visible in the logs.
pub struct MockSender;

impl MessageSender for MockSender {
    async fn send(&self, channel: Channel, to: &str, body: &str) -> Result<String, MessagingError> {
        let provider_id = format!("mock_{}", Uuid::new_v4().simple());
        tracing::info!(
            channel = channel.as_str(),
            to,
            body_len = body.len(),
            provider_id = %provider_id,
            "mock send"
        );
        Ok(provider_id)
    }
}
