//! arogya-risk
//!
//! Rule-based disease risk scoring. Pure — no I/O, no failure modes.
//!
//! This crate is the single source of truth for the point tables: every
//! consumer (stored predictions, clinician alerts, the CLI) goes through
//! [`predict`] rather than carrying its own copy of the weights.

pub mod models;
pub mod plan;
mod score;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use arogya_core::models::{AlertLevel, Disease, DiseaseRisk, HealthIndicators};

/// Trait implemented by each disease risk model.
pub trait RiskModel: Send + Sync {
    /// The disease this model scores.
    fn disease(&self) -> Disease;

    /// Human-readable name (e.g., "Type 2 Diabetes").
    fn name(&self) -> &str;

    /// Score one indicator record. Total over its input domain.
    fn assess(&self, indicators: &HealthIndicators) -> DiseaseRisk;
}

/// Return all registered risk models, in reporting order.
pub fn all_models() -> Vec<Box<dyn RiskModel>> {
    vec![
        Box::new(models::diabetes::DiabetesModel),
        Box::new(models::heart_failure::HeartFailureModel),
        Box::new(models::cancer::CancerModel),
    ]
}

/// Look up the model for a disease.
pub fn model_for(disease: Disease) -> Box<dyn RiskModel> {
    match disease {
        Disease::Diabetes => Box::new(models::diabetes::DiabetesModel),
        Disease::HeartFailure => Box::new(models::heart_failure::HeartFailureModel),
        Disease::Cancer => Box::new(models::cancer::CancerModel),
    }
}

/// The aggregate outcome of scoring one indicator record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    /// One entry per screened disease: diabetes, heart_failure, cancer.
    pub risks: Vec<DiseaseRisk>,
    /// Arithmetic mean of the risk scores, rounded to one decimal.
    pub overall_risk_score: f64,
    /// Bucketed from the worst risk score.
    pub alert_level: AlertLevel,
}

/// Score an indicator record against every registered model.
pub fn predict(indicators: &HealthIndicators) -> RiskAssessment {
    let risks: Vec<DiseaseRisk> = all_models()
        .iter()
        .map(|model| model.assess(indicators))
        .collect();

    let max_score = risks.iter().map(|r| r.risk_score).max().unwrap_or(0);
    let sum: u32 = risks.iter().map(|r| u32::from(r.risk_score)).sum();
    let mean = sum as f64 / risks.len() as f64;

    RiskAssessment {
        overall_risk_score: (mean * 10.0).round() / 10.0,
        alert_level: AlertLevel::from_max_score(max_score),
        risks,
    }
}
