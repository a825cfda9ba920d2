//! Subscription and send flows: normalize, persist, deliver, log, audit.

use aws_sdk_s3::Client;
use tracing::warn;
use uuid::Uuid;

use arogya_audit::AuditEvent;
use arogya_core::models::{Channel, DeliveryStatus, Language, MessageLog, Subscription};
use arogya_storage::subscriptions;

use crate::error::MessagingError;
use crate::phone;
use crate::sender::MessageSender;
use crate::templates;

/// Subscribe (or re-subscribe) a phone number to health alerts.
///
/// The welcome message is best-effort: a transport failure is logged but
/// never fails the subscription itself.
pub async fn subscribe<S: MessageSender>(
    client: &Client,
    bucket: &str,
    sender: &S,
    raw_phone: &str,
    language: Language,
    services: Vec<String>,
) -> Result<Subscription, MessagingError> {
    let phone_number = phone::normalize(raw_phone)?;

    let (subscription, created) =
        subscriptions::upsert(client, bucket, &phone_number, language, services).await?;

    if created {
        let body = templates::welcome(language);
        let log = match sender.send(Channel::Sms, &phone_number, body).await {
            Ok(provider_id) => delivery_log(
                &phone_number,
                body,
                Channel::Sms,
                DeliveryStatus::Sent,
                Some(provider_id),
                None,
            ),
            Err(e) => {
                warn!(phone_number = %phone_number, error = %e, "welcome message failed");
                delivery_log(
                    &phone_number,
                    body,
                    Channel::Sms,
                    DeliveryStatus::Failed,
                    None,
                    Some(e.to_string()),
                )
            }
        };
        subscriptions::log_message(client, bucket, &log).await?;
    }

    AuditEvent::new(
        "subscribe",
        "subscription",
        subscription.id.to_string(),
        phone_number.as_str(),
    )
    .with_details(serde_json::json!({ "created": created }))
    .emit();

    Ok(subscription)
}

/// Deactivate a subscription. Returns `None` when the number was never
/// subscribed.
pub async fn unsubscribe(
    client: &Client,
    bucket: &str,
    raw_phone: &str,
) -> Result<Option<Subscription>, MessagingError> {
    let phone_number = phone::normalize(raw_phone)?;

    let deactivated = subscriptions::deactivate(client, bucket, &phone_number).await?;

    if let Some(subscription) = &deactivated {
        AuditEvent::new(
            "unsubscribe",
            "subscription",
            subscription.id.to_string(),
            phone_number.as_str(),
        )
        .emit();
    }

    Ok(deactivated)
}

/// Send one message and record the attempt. A transport failure is logged
/// as a failed delivery and surfaced to the caller.
pub async fn send_message<S: MessageSender>(
    client: &Client,
    bucket: &str,
    sender: &S,
    channel: Channel,
    raw_phone: &str,
    body: &str,
) -> Result<MessageLog, MessagingError> {
    let phone_number = phone::normalize(raw_phone)?;

    match sender.send(channel, &phone_number, body).await {
        Ok(provider_id) => {
            let log = delivery_log(
                &phone_number,
                body,
                channel,
                DeliveryStatus::Sent,
                Some(provider_id),
                None,
            );
            subscriptions::log_message(client, bucket, &log).await?;

            AuditEvent::new("send", "message", log.id.to_string(), phone_number.as_str())
                .with_details(serde_json::json!({ "channel": channel.as_str() }))
                .emit();

            Ok(log)
        }
        Err(e) => {
            let log = delivery_log(
                &phone_number,
                body,
                channel,
                DeliveryStatus::Failed,
                None,
                Some(e.to_string()),
            );
            subscriptions::log_message(client, bucket, &log).await?;
            Err(e)
        }
    }
}

fn delivery_log(
    phone_number: &str,
    body: &str,
    channel: Channel,
    status: DeliveryStatus,
    provider_id: Option<String>,
    error: Option<String>,
) -> MessageLog {
    MessageLog {
        id: Uuid::new_v4(),
        phone_number: phone_number.to_string(),
        body: body.to_string(),
        channel,
        status,
        provider_id,
        error,
        sent_at: jiff::Timestamp::now(),
    }
}
