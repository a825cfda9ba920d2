//! Chat log persistence. One JSON object per exchange, under the user's
//! prefix, so a conversation survives client restarts and is traceable.

use aws_sdk_s3::Client;
use tracing::info;

use arogya_core::keys;
use arogya_core::models::ChatLog;

use crate::error::StorageError;
use crate::objects;

/// Store one chatbot exchange.
pub async fn append(client: &Client, bucket: &str, log: &ChatLog) -> Result<(), StorageError> {
    let key = keys::chat_log(&log.user_id, log.id);
    let body = serde_json::to_vec_pretty(log)?;
    objects::put_object(client, bucket, &key, body, Some("application/json")).await?;

    info!(
        chat_log_id = %log.id,
        user_id = %log.user_id,
        bot = log.bot.as_str(),
        "chat log stored"
    );

    Ok(())
}

/// A user's chat logs, newest first, at most `limit`.
pub async fn list(
    client: &Client,
    bucket: &str,
    user_id: &str,
    limit: usize,
) -> Result<Vec<ChatLog>, StorageError> {
    let keys = objects::list_objects(client, bucket, &keys::chat_logs_prefix(user_id)).await?;

    let mut logs: Vec<ChatLog> = Vec::with_capacity(keys.len());
    for key in &keys {
        match objects::get_object(client, bucket, key).await {
            Ok(output) => logs.push(serde_json::from_slice(&output.body)?),
            Err(StorageError::NotFound { .. }) => continue,
            Err(e) => return Err(e),
        }
    }

    logs.sort_by_key(|log| std::cmp::Reverse(log.created_at));
    logs.truncate(limit);
    Ok(logs)
}
