//! Threshold bucketing for risk and alert levels, and the wire spelling of
//! the disease enum.

use std::str::FromStr;

use arogya_core::models::{AlertLevel, Disease, RiskLevel};

#[test]
fn risk_level_buckets_at_30_50_70() {
    assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(29), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(30), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_score(49), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_score(50), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(69), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(70), RiskLevel::Critical);
    assert_eq!(RiskLevel::from_score(100), RiskLevel::Critical);
}

#[test]
fn alert_level_buckets_at_40_60_80() {
    assert_eq!(AlertLevel::from_max_score(0), AlertLevel::None);
    assert_eq!(AlertLevel::from_max_score(39), AlertLevel::None);
    assert_eq!(AlertLevel::from_max_score(40), AlertLevel::Medium);
    assert_eq!(AlertLevel::from_max_score(59), AlertLevel::Medium);
    assert_eq!(AlertLevel::from_max_score(60), AlertLevel::High);
    assert_eq!(AlertLevel::from_max_score(79), AlertLevel::High);
    assert_eq!(AlertLevel::from_max_score(80), AlertLevel::Critical);
    assert_eq!(AlertLevel::from_max_score(100), AlertLevel::Critical);
}

#[test]
fn levels_are_ordered() {
    assert!(RiskLevel::Low < RiskLevel::Moderate);
    assert!(RiskLevel::Moderate < RiskLevel::High);
    assert!(RiskLevel::High < RiskLevel::Critical);
    assert!(AlertLevel::None < AlertLevel::Medium);
    assert!(AlertLevel::Medium < AlertLevel::Critical);
}

#[test]
fn only_high_and_critical_alerts_are_actionable() {
    assert!(!AlertLevel::None.is_actionable());
    assert!(!AlertLevel::Medium.is_actionable());
    assert!(AlertLevel::High.is_actionable());
    assert!(AlertLevel::Critical.is_actionable());
}

#[test]
fn disease_wire_spelling_round_trips() {
    for disease in Disease::ALL {
        let parsed = Disease::from_str(disease.as_str()).expect("round trip");
        assert_eq!(parsed, disease);

        // serde and Display agree on the spelling.
        let json = serde_json::to_string(&disease).expect("serialize");
        assert_eq!(json, format!("\"{disease}\""));
    }
}

#[test]
fn unknown_disease_is_rejected() {
    assert!(Disease::from_str("hypertension").is_err());
    assert!(Disease::from_str("Diabetes").is_err(), "spelling is snake_case");
}
