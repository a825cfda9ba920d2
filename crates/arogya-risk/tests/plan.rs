//! Preventive plan generation: escalation entries, keyword routing,
//! deduplication, and the timeline switch.

use arogya_core::models::{AlertLevel, Disease, DiseaseRisk, RiskLevel};
use arogya_risk::plan::generate;

fn risk(disease: Disease, score: u8, recommendations: &[&str]) -> DiseaseRisk {
    DiseaseRisk {
        disease,
        risk_score: score,
        risk_level: RiskLevel::from_score(score),
        probability: f64::from(score) / 100.0,
        factors: Vec::new(),
        recommendations: recommendations.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn high_risk_diseases_get_urgent_entries() {
    let risks = vec![risk(Disease::HeartFailure, 75, &[])];
    let plan = generate(&risks, AlertLevel::High);

    assert_eq!(
        plan.immediate_actions,
        vec!["Urgent: Consult specialist for heart_failure risk"]
    );
    assert_eq!(
        plan.medical_checkups,
        vec!["heart_failure screening within 1 month"]
    );
}

#[test]
fn moderate_risk_diseases_get_quarterly_screening() {
    let risks = vec![risk(Disease::Diabetes, 35, &[])];
    let plan = generate(&risks, AlertLevel::None);

    assert!(plan.immediate_actions.is_empty());
    assert_eq!(
        plan.medical_checkups,
        vec!["diabetes screening within 3 months"]
    );
}

#[test]
fn recommendations_route_by_keyword() {
    let risks = vec![risk(
        Disease::Diabetes,
        10,
        &[
            // "immediate" wins even though "medical" also matches.
            "Immediate medical consultation required for glucose levels",
            "Start with 150 minutes of moderate exercise per week",
            // "consult" routes to checkups.
            "Quit smoking - consult smoking cessation programs",
            // No keyword at all: defaults to lifestyle.
            "Monitor blood pressure daily",
        ],
    )];
    let plan = generate(&risks, AlertLevel::None);

    assert_eq!(
        plan.immediate_actions,
        vec!["Immediate medical consultation required for glucose levels"]
    );
    assert_eq!(
        plan.lifestyle_changes,
        vec![
            "Start with 150 minutes of moderate exercise per week",
            "Monitor blood pressure daily",
        ]
    );
    assert_eq!(
        plan.medical_checkups,
        vec!["Quit smoking - consult smoking cessation programs"]
    );
}

#[test]
fn shared_recommendations_are_deduplicated() {
    let shared = "Regular physical activity reduces cancer risk";
    let risks = vec![
        risk(Disease::Diabetes, 10, &[shared]),
        risk(Disease::Cancer, 10, &[shared]),
    ];
    let plan = generate(&risks, AlertLevel::None);

    assert_eq!(plan.lifestyle_changes, vec![shared]);
}

#[test]
fn timeline_follows_alert_level() {
    let cases = [
        (AlertLevel::Critical, "Immediate action required - 1 week"),
        (AlertLevel::High, "High priority - 1 month"),
        (AlertLevel::Medium, "Medium priority - 3 months"),
        (AlertLevel::None, "Ongoing preventive care"),
    ];
    for (level, expected) in cases {
        assert_eq!(generate(&[], level).timeline, expected);
    }
}

#[test]
fn empty_risks_produce_an_empty_plan() {
    let plan = generate(&[], AlertLevel::None);
    assert!(plan.immediate_actions.is_empty());
    assert!(plan.lifestyle_changes.is_empty());
    assert!(plan.medical_checkups.is_empty());
}
