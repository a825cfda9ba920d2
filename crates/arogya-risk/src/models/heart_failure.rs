use arogya_core::models::{
    AlcoholUse, Disease, DiseaseRisk, ExerciseLevel, HealthIndicators, SleepQuality, StressLevel,
};

use crate::RiskModel;
use crate::score::Tally;

/// Heart failure risk. Blood pressure dominates, followed by lipids,
/// smoking, and the cardiovascular lifestyle markers.
pub struct HeartFailureModel;

impl RiskModel for HeartFailureModel {
    fn disease(&self) -> Disease {
        Disease::HeartFailure
    }

    fn name(&self) -> &str {
        "Heart Failure"
    }

    fn assess(&self, indicators: &HealthIndicators) -> DiseaseRisk {
        let mut tally = Tally::new();
        let lifestyle = &indicators.lifestyle;

        let systolic = indicators.blood_pressure_systolic;
        let diastolic = indicators.blood_pressure_diastolic;
        if systolic >= 140.0 || diastolic >= 90.0 {
            tally.add(25, "High blood pressure (≥140/90)");
            tally.recommend("Monitor blood pressure daily");
            tally.recommend("Consult cardiologist for hypertension management");
        } else if systolic >= 120.0 || diastolic >= 80.0 {
            tally.add(10, "Elevated blood pressure (pre-hypertension)");
        }

        if indicators.cholesterol >= 240.0 {
            tally.add(20, "High cholesterol (≥240 mg/dL)");
            tally.recommend("Implement heart-healthy diet (Mediterranean or DASH)");
        } else if indicators.cholesterol >= 200.0 {
            tally.add(10, "Borderline high cholesterol (200-239 mg/dL)");
        }

        if indicators.age >= 65 {
            tally.add(15, "Age-related cardiovascular risk");
        }

        if indicators.family_history.heart_disease {
            tally.add(15, "Family history of heart disease");
        }

        if lifestyle.smoking {
            tally.add(20, "Smoking");
            tally.recommend("Quit smoking immediately - seek support programs");
        }

        if lifestyle.alcohol == AlcoholUse::Heavy {
            tally.add(10, "Heavy alcohol consumption");
            tally.recommend("Reduce alcohol intake to moderate levels");
        }

        if lifestyle.exercise == ExerciseLevel::None {
            tally.add(10, "Lack of physical activity");
            tally.recommend("Start cardiovascular exercise program");
        }

        if lifestyle.sleep_quality == Some(SleepQuality::Poor) {
            tally.add(8, "Poor sleep quality");
            tally.recommend("Address sleep apnea if present, improve sleep hygiene");
        }

        if let Some(hours) = lifestyle.sleep_hours
            && !(6.0..=9.0).contains(&hours)
        {
            tally.add(5, format!("Inadequate sleep ({hours} hours)"));
            tally.recommend("Aim for 7-9 hours of quality sleep nightly");
        }

        // Chronic stress keeps blood pressure elevated.
        if lifestyle.stress_level == Some(StressLevel::High) {
            tally.add(10, "High chronic stress");
            tally.recommend("Manage stress through relaxation techniques and counseling");
        }

        if let Some(steps) = lifestyle.daily_steps
            && steps < 5000
        {
            tally.add(7, format!("Low daily activity ({steps} steps)"));
            tally.recommend("Increase cardiovascular activity gradually");
        }

        if indicators.bmi >= 30.0 {
            tally.add(10, "Obesity increases cardiac workload");
        }

        tally.into_risk(
            Disease::HeartFailure,
            &[
                "Annual cardiovascular screening recommended",
                "ECG and stress test consultation",
            ],
            &[],
            "Maintain healthy lifestyle",
        )
    }
}
