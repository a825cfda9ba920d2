//! Subscription and message-log persistence.
//!
//! Subscriptions are keyed by phone number digits, so re-subscribing lands
//! on the existing object instead of creating a duplicate. Unsubscribe
//! deactivates in place; `created_at` survives the round trip.

use aws_sdk_s3::Client;
use tracing::info;
use uuid::Uuid;

use arogya_core::keys;
use arogya_core::models::{Language, MessageLog, Subscription};

use crate::error::StorageError;
use crate::objects;

fn phone_digits(phone_number: &str) -> String {
    phone_number.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Fetch the subscription for a phone number, active or not.
pub async fn get(
    client: &Client,
    bucket: &str,
    phone_number: &str,
) -> Result<Option<Subscription>, StorageError> {
    let key = keys::subscription(&phone_digits(phone_number));
    match objects::get_object(client, bucket, &key).await {
        Ok(output) => Ok(Some(serde_json::from_slice(&output.body)?)),
        Err(StorageError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Create or refresh a subscription. An existing subscription (active or
/// deactivated) keeps its id and `created_at`; language, services, and the
/// active flag are replaced. Returns the stored record and whether it was
/// newly created.
pub async fn upsert(
    client: &Client,
    bucket: &str,
    phone_number: &str,
    language: Language,
    services: Vec<String>,
) -> Result<(Subscription, bool), StorageError> {
    let now = jiff::Timestamp::now();

    let (subscription, created) = match get(client, bucket, phone_number).await? {
        Some(mut existing) => {
            existing.language = language;
            existing.services = services;
            existing.active = true;
            existing.updated_at = now;
            (existing, false)
        }
        None => (
            Subscription {
                id: Uuid::new_v4(),
                phone_number: phone_number.to_string(),
                language,
                services,
                active: true,
                created_at: now,
                updated_at: now,
            },
            true,
        ),
    };

    store(client, bucket, &subscription).await?;

    info!(
        subscription_id = %subscription.id,
        phone_number = %subscription.phone_number,
        created,
        "subscription upserted"
    );

    Ok((subscription, created))
}

/// Deactivate a subscription. Unknown numbers are a no-op, matching the
/// idempotent unsubscribe the frontend expects.
pub async fn deactivate(
    client: &Client,
    bucket: &str,
    phone_number: &str,
) -> Result<Option<Subscription>, StorageError> {
    let Some(mut subscription) = get(client, bucket, phone_number).await? else {
        return Ok(None);
    };

    subscription.active = false;
    subscription.updated_at = jiff::Timestamp::now();
    store(client, bucket, &subscription).await?;

    info!(
        subscription_id = %subscription.id,
        phone_number = %subscription.phone_number,
        "subscription deactivated"
    );

    Ok(Some(subscription))
}

/// All active subscriptions, newest first.
pub async fn list_active(client: &Client, bucket: &str) -> Result<Vec<Subscription>, StorageError> {
    let keys = objects::list_objects(client, bucket, keys::SUBSCRIPTIONS_PREFIX).await?;

    let mut subscriptions: Vec<Subscription> = Vec::new();
    for key in &keys {
        match objects::get_object(client, bucket, key).await {
            Ok(output) => {
                let subscription: Subscription = serde_json::from_slice(&output.body)?;
                if subscription.active {
                    subscriptions.push(subscription);
                }
            }
            Err(StorageError::NotFound { .. }) => continue,
            Err(e) => return Err(e),
        }
    }

    subscriptions.sort_by_key(|s| std::cmp::Reverse(s.created_at));
    Ok(subscriptions)
}

async fn store(
    client: &Client,
    bucket: &str,
    subscription: &Subscription,
) -> Result<(), StorageError> {
    let key = keys::subscription(&phone_digits(&subscription.phone_number));
    let body = serde_json::to_vec_pretty(subscription)?;
    objects::put_object(client, bucket, &key, body, Some("application/json")).await?;
    Ok(())
}

/// Record one outbound message attempt, successful or failed.
pub async fn log_message(
    client: &Client,
    bucket: &str,
    log: &MessageLog,
) -> Result<(), StorageError> {
    let key = keys::message_log(log.id);
    let body = serde_json::to_vec_pretty(log)?;
    objects::put_object(client, bucket, &key, body, Some("application/json")).await?;
    Ok(())
}

/// The most recent message logs, newest first, at most `limit`.
pub async fn recent_messages(
    client: &Client,
    bucket: &str,
    limit: usize,
) -> Result<Vec<MessageLog>, StorageError> {
    let keys = objects::list_objects(client, bucket, keys::MESSAGE_LOGS_PREFIX).await?;

    let mut logs: Vec<MessageLog> = Vec::new();
    for key in &keys {
        match objects::get_object(client, bucket, key).await {
            Ok(output) => logs.push(serde_json::from_slice(&output.body)?),
            Err(StorageError::NotFound { .. }) => continue,
            Err(e) => return Err(e),
        }
    }

    logs.sort_by_key(|log| std::cmp::Reverse(log.sent_at));
    logs.truncate(limit);
    Ok(logs)
}
