use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The conditions the platform screens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Disease {
    Diabetes,
    HeartFailure,
    Cancer,
}

impl Disease {
    pub const ALL: [Disease; 3] = [Disease::Diabetes, Disease::HeartFailure, Disease::Cancer];

    /// Wire spelling, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Disease::Diabetes => "diabetes",
            Disease::HeartFailure => "heart_failure",
            Disease::Cancer => "cancer",
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Disease {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "diabetes" => Ok(Disease::Diabetes),
            "heart_failure" => Ok(Disease::HeartFailure),
            "cancer" => Ok(Disease::Cancer),
            other => Err(CoreError::UnknownDisease(other.to_string())),
        }
    }
}

/// Per-disease severity, bucketed from the 0–100 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    /// Bucket a risk score. Thresholds: 30 → moderate, 50 → high, 70 → critical.
    pub fn from_score(score: u8) -> Self {
        match score {
            70.. => RiskLevel::Critical,
            50.. => RiskLevel::High,
            30.. => RiskLevel::Moderate,
            _ => RiskLevel::Low,
        }
    }
}

/// Assessment-wide severity, bucketed from the worst disease score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AlertLevel {
    None,
    Medium,
    High,
    Critical,
}

impl AlertLevel {
    /// Bucket the maximum disease score. Thresholds: 40 → medium, 60 → high,
    /// 80 → critical.
    pub fn from_max_score(max_score: u8) -> Self {
        match max_score {
            80.. => AlertLevel::Critical,
            60.. => AlertLevel::High,
            40.. => AlertLevel::Medium,
            _ => AlertLevel::None,
        }
    }

    /// High and critical alerts are surfaced to clinicians.
    pub fn is_actionable(&self) -> bool {
        matches!(self, AlertLevel::High | AlertLevel::Critical)
    }
}

/// The outcome of scoring one disease for one indicator record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiseaseRisk {
    pub disease: Disease,
    /// Rule-based point total, clamped to 0–100.
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    /// `risk_score / 100`.
    pub probability: f64,
    /// Human-readable contributing factors, in scoring order.
    pub factors: Vec<String>,
    pub recommendations: Vec<String>,
}
