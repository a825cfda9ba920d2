use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::indicators::HealthIndicators;
use super::risk::{AlertLevel, DiseaseRisk};

/// A stored risk assessment for one user at one point in time.
///
/// Persisted as a single JSON object under the user's prediction prefix.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Prediction {
    pub id: Uuid,
    pub user_id: String,
    pub indicators: HealthIndicators,
    /// One entry per screened disease: diabetes, heart_failure, cancer.
    pub risks: Vec<DiseaseRisk>,
    /// Arithmetic mean of the three risk scores, rounded to one decimal.
    pub overall_risk_score: f64,
    pub alert_level: AlertLevel,
    pub preventive_plan: PreventivePlan,
    pub created_at: jiff::Timestamp,
}

/// Categorized action plan derived from a set of disease risks.
///
/// Each bucket is deduplicated and keeps first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PreventivePlan {
    pub immediate_actions: Vec<String>,
    pub lifestyle_changes: Vec<String>,
    pub medical_checkups: Vec<String>,
    pub timeline: String,
}
