//! Scoring behavior of the individual risk models and the aggregate
//! prediction: clamping, bucketing, the canonical worked example, and
//! idempotence.

use arogya_core::models::{
    AlcoholUse, AlertLevel, ClinicalData, DietQuality, Disease, ExerciseLevel, FamilyHistory,
    Gender, Genetics, HealthIndicators, Lifestyle, RiskLevel, SleepQuality, StressLevel,
    WorkSchedule,
};
use arogya_risk::{all_models, model_for, predict};

/// A healthy 30-year-old that trips none of the point gates.
fn baseline() -> HealthIndicators {
    HealthIndicators {
        age: 30,
        gender: Gender::Female,
        bmi: 22.0,
        blood_pressure_systolic: 110.0,
        blood_pressure_diastolic: 70.0,
        glucose: 85.0,
        insulin: 8.0,
        cholesterol: 170.0,
        triglycerides: 120.0,
        family_history: FamilyHistory::default(),
        lifestyle: Lifestyle {
            smoking: false,
            alcohol: AlcoholUse::None,
            exercise: ExerciseLevel::Moderate,
            diet: DietQuality::Good,
            sleep_quality: None,
            sleep_hours: None,
            stress_level: None,
            daily_steps: None,
            water_intake: None,
            work_schedule: None,
            screen_time: None,
        },
        genetics: Genetics::default(),
        clinical_data: ClinicalData::default(),
    }
}

/// Everything bad at once — the sum of raw points far exceeds 100 for each
/// disease, so the output must be clamped.
fn worst_case() -> HealthIndicators {
    HealthIndicators {
        age: 80,
        gender: Gender::Male,
        bmi: 41.0,
        blood_pressure_systolic: 185.0,
        blood_pressure_diastolic: 110.0,
        glucose: 200.0,
        insulin: 45.0,
        cholesterol: 290.0,
        triglycerides: 400.0,
        family_history: FamilyHistory {
            diabetes: true,
            heart_disease: true,
            cancer: true,
        },
        lifestyle: Lifestyle {
            smoking: true,
            alcohol: AlcoholUse::Heavy,
            exercise: ExerciseLevel::None,
            diet: DietQuality::Poor,
            sleep_quality: Some(SleepQuality::Poor),
            sleep_hours: Some(4.0),
            stress_level: Some(StressLevel::High),
            daily_steps: Some(1200),
            water_intake: Some(0.5),
            work_schedule: Some(WorkSchedule::Night),
            screen_time: Some(12.0),
        },
        genetics: Genetics {
            has_genetic_testing: true,
            genetic_risk_factors: vec!["BRCA1".to_string()],
        },
        clinical_data: ClinicalData::default(),
    }
}

#[test]
fn baseline_scores_zero_everywhere() {
    for model in all_models() {
        let risk = model.assess(&baseline());
        assert_eq!(risk.risk_score, 0, "{} should score 0", risk.disease);
        assert_eq!(risk.risk_level, RiskLevel::Low);
        assert_eq!(risk.probability, 0.0);
        assert!(risk.factors.is_empty(), "no factors for a clean baseline");
    }
}

#[test]
fn baseline_gets_closing_recommendations() {
    let diabetes = model_for(Disease::Diabetes).assess(&baseline());
    assert_eq!(diabetes.recommendations, vec!["Continue regular checkups"]);

    let heart = model_for(Disease::HeartFailure).assess(&baseline());
    assert_eq!(heart.recommendations, vec!["Maintain healthy lifestyle"]);

    // Cancer appends a low-level default, so its fallback never fires.
    let cancer = model_for(Disease::Cancer).assess(&baseline());
    assert_eq!(
        cancer.recommendations,
        vec!["Maintain regular age-appropriate screenings"]
    );
}

/// age=70, bmi=32, glucose=130, family diabetes, no exercise:
/// 25 + 20 + 30 + 15 + 10 = 100, critical.
#[test]
fn diabetes_worked_example_hits_exactly_one_hundred() {
    let mut indicators = baseline();
    indicators.age = 70;
    indicators.bmi = 32.0;
    indicators.glucose = 130.0;
    indicators.family_history.diabetes = true;
    indicators.lifestyle.exercise = ExerciseLevel::None;

    let risk = model_for(Disease::Diabetes).assess(&indicators);
    assert_eq!(risk.risk_score, 100);
    assert_eq!(risk.risk_level, RiskLevel::Critical);
    assert_eq!(risk.probability, 1.0);
    assert_eq!(risk.factors.len(), 5);
}

#[test]
fn worked_example_aggregate() {
    let mut indicators = baseline();
    indicators.age = 70;
    indicators.bmi = 32.0;
    indicators.glucose = 130.0;
    indicators.family_history.diabetes = true;
    indicators.lifestyle.exercise = ExerciseLevel::None;

    let assessment = predict(&indicators);

    // diabetes 100; heart 15 (age) + 10 (no exercise) + 10 (bmi) = 35;
    // cancer 20 (age) + 15 (bmi) + 10 (no exercise) = 45.
    let scores: Vec<u8> = assessment.risks.iter().map(|r| r.risk_score).collect();
    assert_eq!(scores, vec![100, 35, 45]);
    assert_eq!(assessment.overall_risk_score, 60.0);
    assert_eq!(assessment.alert_level, AlertLevel::Critical);
}

#[test]
fn scores_are_clamped_and_buckets_match() {
    for indicators in [baseline(), worst_case()] {
        for model in all_models() {
            let risk = model.assess(&indicators);
            assert!(risk.risk_score <= 100);
            assert_eq!(risk.risk_level, RiskLevel::from_score(risk.risk_score));
            assert_eq!(risk.probability, f64::from(risk.risk_score) / 100.0);
        }
    }
}

#[test]
fn worst_case_is_critical_across_the_board() {
    let assessment = predict(&worst_case());
    for risk in &assessment.risks {
        assert_eq!(risk.risk_score, 100, "{} should clamp at 100", risk.disease);
        assert_eq!(risk.risk_level, RiskLevel::Critical);
    }
    assert_eq!(assessment.overall_risk_score, 100.0);
    assert_eq!(assessment.alert_level, AlertLevel::Critical);
}

#[test]
fn overall_score_is_the_mean_of_disease_scores() {
    let mut indicators = baseline();
    indicators.glucose = 110.0; // diabetes +15, others unaffected

    let assessment = predict(&indicators);
    let sum: u32 = assessment.risks.iter().map(|r| u32::from(r.risk_score)).sum();
    let expected = (sum as f64 / 3.0 * 10.0).round() / 10.0;
    assert_eq!(assessment.overall_risk_score, expected);
    assert_eq!(assessment.overall_risk_score, 5.0);
    assert_eq!(assessment.alert_level, AlertLevel::None);
}

#[test]
fn alert_level_tracks_the_worst_disease() {
    // Smoking alone: heart 20, cancer 25, diabetes 0 → max 25 → none.
    let mut indicators = baseline();
    indicators.lifestyle.smoking = true;
    assert_eq!(predict(&indicators).alert_level, AlertLevel::None);

    // Add heavy alcohol: cancer 25+15 = 40 → medium.
    indicators.lifestyle.alcohol = AlcoholUse::Heavy;
    assert_eq!(predict(&indicators).alert_level, AlertLevel::Medium);

    // Add family history of cancer: 55... still medium until 60.
    indicators.family_history.cancer = true;
    assert_eq!(predict(&indicators).alert_level, AlertLevel::Medium);

    // Obesity pushes cancer to 70 → high.
    indicators.bmi = 31.0;
    assert_eq!(predict(&indicators).alert_level, AlertLevel::High);
}

#[test]
fn unassessed_lifestyle_fields_add_nothing() {
    let mut with_good_optionals = baseline();
    with_good_optionals.lifestyle.sleep_quality = Some(SleepQuality::Excellent);
    with_good_optionals.lifestyle.sleep_hours = Some(8.0);
    with_good_optionals.lifestyle.stress_level = Some(StressLevel::Low);
    with_good_optionals.lifestyle.daily_steps = Some(9000);
    with_good_optionals.lifestyle.water_intake = Some(2.5);
    with_good_optionals.lifestyle.work_schedule = Some(WorkSchedule::Standard);

    for model in all_models() {
        assert_eq!(
            model.assess(&baseline()).risk_score,
            model.assess(&with_good_optionals).risk_score,
            "absent optionals must score like healthy ones for {}",
            model.disease()
        );
    }
}

#[test]
fn prediction_is_idempotent() {
    let indicators = worst_case();
    assert_eq!(predict(&indicators), predict(&indicators));
}
