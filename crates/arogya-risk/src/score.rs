//! Shared point-accumulation helper used by every risk model.

use arogya_core::models::{Disease, DiseaseRisk, RiskLevel};

/// Accumulates gated point additions plus their factor and recommendation
/// strings, then folds into a [`DiseaseRisk`].
pub(crate) struct Tally {
    score: u32,
    factors: Vec<String>,
    recommendations: Vec<String>,
}

impl Tally {
    pub(crate) fn new() -> Self {
        Tally {
            score: 0,
            factors: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    /// Add points with a contributing-factor label.
    pub(crate) fn add(&mut self, points: u32, factor: impl Into<String>) {
        self.score += points;
        self.factors.push(factor.into());
    }

    /// Attach a recommendation to the most recent factor.
    pub(crate) fn recommend(&mut self, rec: impl Into<String>) {
        self.recommendations.push(rec.into());
    }

    /// Clamp, bucket, and append the model's closing recommendations.
    ///
    /// `if_elevated` is appended whenever the bucketed level is above low;
    /// `if_low` (when given) whenever it is low. `fallback` fills an
    /// otherwise-empty recommendation list.
    pub(crate) fn into_risk(
        mut self,
        disease: Disease,
        if_elevated: &[&str],
        if_low: &[&str],
        fallback: &str,
    ) -> DiseaseRisk {
        let risk_score = self.score.min(100) as u8;
        let risk_level = RiskLevel::from_score(risk_score);

        if risk_level != RiskLevel::Low {
            self.recommendations
                .extend(if_elevated.iter().map(|s| s.to_string()));
        } else {
            self.recommendations
                .extend(if_low.iter().map(|s| s.to_string()));
        }

        if self.recommendations.is_empty() {
            self.recommendations.push(fallback.to_string());
        }

        DiseaseRisk {
            disease,
            risk_score,
            risk_level,
            probability: f64::from(risk_score) / 100.0,
            factors: self.factors,
            recommendations: self.recommendations,
        }
    }
}
