//! Preventive plan generation.
//!
//! Folds the per-disease recommendation strings into a categorized action
//! plan. Classification is keyword-based on purpose: recommendation text is
//! authored alongside the point tables, so the keywords are stable.

use std::collections::HashSet;

use arogya_core::models::{AlertLevel, DiseaseRisk, PreventivePlan, RiskLevel};

/// Build a categorized preventive plan from scored risks.
pub fn generate(risks: &[DiseaseRisk], alert_level: AlertLevel) -> PreventivePlan {
    let mut immediate_actions = Vec::new();
    let mut lifestyle_changes = Vec::new();
    let mut medical_checkups = Vec::new();

    for risk in risks {
        match risk.risk_level {
            RiskLevel::Critical | RiskLevel::High => {
                immediate_actions
                    .push(format!("Urgent: Consult specialist for {} risk", risk.disease));
                medical_checkups.push(format!("{} screening within 1 month", risk.disease));
            }
            RiskLevel::Moderate => {
                medical_checkups.push(format!("{} screening within 3 months", risk.disease));
            }
            RiskLevel::Low => {}
        }

        for rec in &risk.recommendations {
            let lower = rec.to_lowercase();
            if lower.contains("immediate") || lower.contains("urgent") {
                immediate_actions.push(rec.clone());
            } else if lower.contains("exercise")
                || lower.contains("diet")
                || lower.contains("lifestyle")
            {
                lifestyle_changes.push(rec.clone());
            } else if lower.contains("screen")
                || lower.contains("consult")
                || lower.contains("medical")
            {
                medical_checkups.push(rec.clone());
            } else {
                lifestyle_changes.push(rec.clone());
            }
        }
    }

    let timeline = match alert_level {
        AlertLevel::Critical => "Immediate action required - 1 week",
        AlertLevel::High => "High priority - 1 month",
        AlertLevel::Medium => "Medium priority - 3 months",
        AlertLevel::None => "Ongoing preventive care",
    };

    PreventivePlan {
        immediate_actions: dedup(immediate_actions),
        lifestyle_changes: dedup(lifestyle_changes),
        medical_checkups: dedup(medical_checkups),
        timeline: timeline.to_string(),
    }
}

/// Drop repeated entries, keeping first-seen order.
fn dedup(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
