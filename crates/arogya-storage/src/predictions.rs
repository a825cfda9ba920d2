//! Prediction persistence and the clinician alert index.
//!
//! Each prediction is one JSON object under the user's prefix. Cross-user
//! queries (the clinician high-risk view) cannot be answered by a prefix
//! listing, so actionable predictions are also folded into a bounded
//! manifest at `_state/alerts.json`, updated with ETag compare-and-swap.

use aws_sdk_s3::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use arogya_core::keys;
use arogya_core::models::{AlertLevel, Disease, Prediction};

use crate::error::StorageError;
use crate::{objects, state};

/// Most recent alert entries retained in the index manifest.
const ALERT_INDEX_CAP: usize = 500;

/// CAS attempts before giving up on a contended index update.
const INDEX_MAX_ATTEMPTS: u32 = 5;

/// One line in the high-risk manifest. Enough to rank and to fetch the
/// full prediction object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertEntry {
    pub prediction_id: Uuid,
    pub user_id: String,
    pub overall_risk_score: f64,
    pub alert_level: AlertLevel,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct AlertIndex {
    /// Oldest first; new entries append at the back.
    entries: Vec<AlertEntry>,
}

/// Risk score history for one user and one disease, oldest first.
#[derive(Debug, Clone, Serialize)]
pub struct TrendSeries {
    pub timestamps: Vec<jiff::Timestamp>,
    pub scores: Vec<u8>,
}

/// Store a prediction. High and critical alerts are also folded into the
/// alert index so clinicians can find them without scanning every user.
pub async fn save(
    client: &Client,
    bucket: &str,
    prediction: &Prediction,
) -> Result<(), StorageError> {
    let key = keys::prediction(&prediction.user_id, prediction.id);
    let body = serde_json::to_vec_pretty(prediction)?;
    objects::put_object(client, bucket, &key, body, Some("application/json")).await?;

    info!(
        prediction_id = %prediction.id,
        user_id = %prediction.user_id,
        overall_risk_score = prediction.overall_risk_score,
        alert_level = ?prediction.alert_level,
        "prediction stored"
    );

    if prediction.alert_level.is_actionable() {
        index_alert(client, bucket, prediction).await?;
    }

    Ok(())
}

/// Append this prediction to the alert index with a bounded CAS retry loop.
async fn index_alert(
    client: &Client,
    bucket: &str,
    prediction: &Prediction,
) -> Result<(), StorageError> {
    let entry = AlertEntry {
        prediction_id: prediction.id,
        user_id: prediction.user_id.clone(),
        overall_risk_score: prediction.overall_risk_score,
        alert_level: prediction.alert_level,
        created_at: prediction.created_at,
    };

    for _ in 0..INDEX_MAX_ATTEMPTS {
        let loaded = state::load_state::<AlertIndex>(client, bucket, keys::ALERT_INDEX).await;

        let result = match loaded {
            Ok((mut index, etag)) => {
                index.entries.push(entry.clone());
                if index.entries.len() > ALERT_INDEX_CAP {
                    let excess = index.entries.len() - ALERT_INDEX_CAP;
                    index.entries.drain(..excess);
                }
                state::save_state_if_match(client, bucket, keys::ALERT_INDEX, &index, &etag).await
            }
            Err(StorageError::NotFound { .. }) => {
                let index = AlertIndex {
                    entries: vec![entry.clone()],
                };
                state::save_state_if_absent(client, bucket, keys::ALERT_INDEX, &index).await
            }
            Err(e) => return Err(e),
        };

        match result {
            Ok(_) => return Ok(()),
            Err(StorageError::PreconditionFailed { .. }) => continue,
            Err(e) => return Err(e),
        }
    }

    Err(StorageError::IndexContended {
        key: keys::ALERT_INDEX.to_string(),
        attempts: INDEX_MAX_ATTEMPTS,
    })
}

/// Load one prediction object.
pub async fn load(
    client: &Client,
    bucket: &str,
    user_id: &str,
    id: Uuid,
) -> Result<Prediction, StorageError> {
    let output = objects::get_object(client, bucket, &keys::prediction(user_id, id)).await?;
    Ok(serde_json::from_slice(&output.body)?)
}

/// A user's predictions, newest first, at most `limit`.
pub async fn history(
    client: &Client,
    bucket: &str,
    user_id: &str,
    limit: usize,
) -> Result<Vec<Prediction>, StorageError> {
    let mut predictions = load_all_for_user(client, bucket, user_id).await?;
    predictions.sort_by_key(|p| std::cmp::Reverse(p.created_at));
    predictions.truncate(limit);
    Ok(predictions)
}

/// The most recent high/critical predictions across all users, newest first.
///
/// Index entries whose underlying object has since been deleted are skipped.
pub async fn high_risk(
    client: &Client,
    bucket: &str,
    limit: usize,
) -> Result<Vec<Prediction>, StorageError> {
    let index = match state::load_state::<AlertIndex>(client, bucket, keys::ALERT_INDEX).await {
        Ok((index, _)) => index,
        Err(StorageError::NotFound { .. }) => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut predictions = Vec::new();
    for entry in index.entries.iter().rev().take(limit) {
        match load(client, bucket, &entry.user_id, entry.prediction_id).await {
            Ok(prediction) => predictions.push(prediction),
            Err(StorageError::NotFound { key }) => {
                warn!(%key, "alert index entry points at a missing prediction");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(predictions)
}

/// Risk score trend for one user and disease, oldest first.
pub async fn trends(
    client: &Client,
    bucket: &str,
    user_id: &str,
    disease: Disease,
) -> Result<TrendSeries, StorageError> {
    let mut predictions = load_all_for_user(client, bucket, user_id).await?;
    predictions.sort_by_key(|p| p.created_at);

    let mut series = TrendSeries {
        timestamps: Vec::new(),
        scores: Vec::new(),
    };
    for prediction in &predictions {
        if let Some(risk) = prediction.risks.iter().find(|r| r.disease == disease) {
            series.timestamps.push(prediction.created_at);
            series.scores.push(risk.risk_score);
        }
    }

    Ok(series)
}

async fn load_all_for_user(
    client: &Client,
    bucket: &str,
    user_id: &str,
) -> Result<Vec<Prediction>, StorageError> {
    let keys = objects::list_objects(client, bucket, &keys::predictions_prefix(user_id)).await?;

    let mut predictions = Vec::with_capacity(keys.len());
    for key in &keys {
        match objects::get_object(client, bucket, key).await {
            Ok(output) => predictions.push(serde_json::from_slice(&output.body)?),
            // Deleted between list and get.
            Err(StorageError::NotFound { .. }) => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(predictions)
}
