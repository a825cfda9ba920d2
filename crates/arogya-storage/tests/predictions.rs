//! Integration tests for prediction persistence and the alert index.
//!
//! These tests call real AWS APIs and require valid credentials plus a
//! scratch bucket in `AROGYA_TEST_BUCKET`. Objects are written under
//! throwaway user ids and deleted afterwards.
//!
//! Run with: `cargo test -p arogya-storage --test predictions -- --ignored`

use uuid::Uuid;

use arogya_core::keys;
use arogya_core::models::{
    AlcoholUse, AlertLevel, ClinicalData, DietQuality, Disease, DiseaseRisk, ExerciseLevel,
    FamilyHistory, Gender, Genetics, HealthIndicators, Lifestyle, Prediction, PreventivePlan,
    RiskLevel,
};
use arogya_storage::{client, objects, predictions};

async fn test_handle() -> (aws_sdk_s3::Client, String) {
    let bucket = std::env::var("AROGYA_TEST_BUCKET").expect("AROGYA_TEST_BUCKET must be set");
    let config = client::build_config("ap-south-1", None).await;
    (client::s3_client(&config), bucket)
}

fn indicators() -> HealthIndicators {
    HealthIndicators {
        age: 52,
        gender: Gender::Male,
        bmi: 27.0,
        blood_pressure_systolic: 128.0,
        blood_pressure_diastolic: 82.0,
        glucose: 104.0,
        insulin: 11.0,
        cholesterol: 210.0,
        triglycerides: 160.0,
        family_history: FamilyHistory::default(),
        lifestyle: Lifestyle {
            smoking: false,
            alcohol: AlcoholUse::Moderate,
            exercise: ExerciseLevel::Light,
            diet: DietQuality::Moderate,
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

fn prediction(user_id: &str, score: u8, alert_level: AlertLevel) -> Prediction {
    let risk = DiseaseRisk {
        disease: Disease::Diabetes,
        risk_score: score,
        risk_level: RiskLevel::from_score(score),
        probability: f64::from(score) / 100.0,
        factors: vec!["Pre-diabetic glucose levels (100-125 mg/dL)".to_string()],
        recommendations: vec!["Monitor glucose levels monthly".to_string()],
    };

    Prediction {
        id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        indicators: indicators(),
        risks: vec![risk],
        overall_risk_score: f64::from(score),
        alert_level,
        preventive_plan: PreventivePlan {
            immediate_actions: Vec::new(),
            lifestyle_changes: Vec::new(),
            medical_checkups: vec!["diabetes screening within 3 months".to_string()],
            timeline: "Ongoing preventive care".to_string(),
        },
        created_at: jiff::Timestamp::now(),
    }
}

async fn cleanup(s3: &aws_sdk_s3::Client, bucket: &str, user_id: &str) {
    if let Ok(keys) = objects::list_objects(s3, bucket, &keys::predictions_prefix(user_id)).await {
        for key in keys {
            let _ = objects::delete_object(s3, bucket, &key).await;
        }
    }
}

#[tokio::test]
#[ignore]
async fn save_then_history_round_trips() {
    let (s3, bucket) = test_handle().await;
    let user_id = format!("it_{}", Uuid::new_v4().simple());

    let first = prediction(&user_id, 20, AlertLevel::None);
    let second = prediction(&user_id, 35, AlertLevel::None);
    predictions::save(&s3, &bucket, &first).await.expect("save first");
    predictions::save(&s3, &bucket, &second).await.expect("save second");

    let history = predictions::history(&s3, &bucket, &user_id, 10)
        .await
        .expect("history");

    assert_eq!(history.len(), 2);
    // Newest first.
    assert_eq!(history[0].id, second.id);
    assert_eq!(history[1].id, first.id);

    cleanup(&s3, &bucket, &user_id).await;
}

#[tokio::test]
#[ignore]
async fn actionable_predictions_reach_the_high_risk_view() {
    let (s3, bucket) = test_handle().await;
    let user_id = format!("it_{}", Uuid::new_v4().simple());

    let stored = prediction(&user_id, 85, AlertLevel::Critical);
    predictions::save(&s3, &bucket, &stored).await.expect("save");

    let high_risk = predictions::high_risk(&s3, &bucket, 100)
        .await
        .expect("high_risk");

    assert!(
        high_risk.iter().any(|p| p.id == stored.id),
        "critical prediction should appear in the high-risk view"
    );

    cleanup(&s3, &bucket, &user_id).await;
}

#[tokio::test]
#[ignore]
async fn trends_are_oldest_first_for_the_requested_disease() {
    let (s3, bucket) = test_handle().await;
    let user_id = format!("it_{}", Uuid::new_v4().simple());

    for score in [20u8, 30, 40] {
        let p = prediction(&user_id, score, AlertLevel::None);
        predictions::save(&s3, &bucket, &p).await.expect("save");
    }

    let series = predictions::trends(&s3, &bucket, &user_id, Disease::Diabetes)
        .await
        .expect("trends");

    assert_eq!(series.scores, vec![20, 30, 40]);
    assert!(series.timestamps.windows(2).all(|w| w[0] <= w[1]));

    let empty = predictions::trends(&s3, &bucket, &user_id, Disease::Cancer)
        .await
        .expect("trends");
    assert!(empty.scores.is_empty());

    cleanup(&s3, &bucket, &user_id).await;
}
