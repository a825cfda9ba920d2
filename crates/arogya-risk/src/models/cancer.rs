use arogya_core::models::{
    AlcoholUse, Disease, DiseaseRisk, DietQuality, ExerciseLevel, HealthIndicators, SleepQuality,
    StressLevel, WorkSchedule,
};

use crate::RiskModel;
use crate::score::Tally;

/// General cancer risk. Smoking and age carry the most weight; reported
/// genetic findings add a flat bonus on top of the lifestyle markers.
pub struct CancerModel;

impl RiskModel for CancerModel {
    fn disease(&self) -> Disease {
        Disease::Cancer
    }

    fn name(&self) -> &str {
        "Cancer"
    }

    fn assess(&self, indicators: &HealthIndicators) -> DiseaseRisk {
        let mut tally = Tally::new();
        let lifestyle = &indicators.lifestyle;

        if indicators.age >= 65 {
            tally.add(20, "Age-related cancer risk (65+)");
        } else if indicators.age >= 50 {
            tally.add(10, "Age-related cancer risk (50-64)");
        }

        if lifestyle.smoking {
            tally.add(25, "Smoking (lung, throat, and multiple cancers)");
            tally.recommend("Quit smoking - consult smoking cessation programs");
        }

        if lifestyle.alcohol == AlcoholUse::Heavy {
            tally.add(15, "Heavy alcohol use (increases various cancer risks)");
            tally.recommend("Limit alcohol to recommended levels");
        }

        if indicators.family_history.cancer {
            tally.add(15, "Family history of cancer");
            tally.recommend("Consider genetic counseling and screening");
        }

        if indicators.bmi >= 30.0 {
            tally.add(15, "Obesity (linked to multiple cancer types)");
            tally.recommend("Weight management and healthy diet");
        }

        if lifestyle.exercise == ExerciseLevel::None {
            tally.add(10, "Sedentary lifestyle");
            tally.recommend("Regular physical activity reduces cancer risk");
        }

        if lifestyle.diet == DietQuality::Poor {
            tally.add(10, "Poor diet quality");
            tally.recommend("Increase fruits, vegetables, and whole grains");
        }

        if lifestyle.sleep_quality == Some(SleepQuality::Poor) {
            tally.add(6, "Poor sleep quality (affects immune system)");
            tally.recommend("Improve sleep to boost immune function");
        }

        if let Some(hours) = lifestyle.sleep_hours
            && !(6.0..=9.0).contains(&hours)
        {
            tally.add(4, format!("Inadequate sleep ({hours} hours)"));
            tally.recommend("Maintain 7-9 hours of sleep for optimal immune health");
        }

        if lifestyle.stress_level == Some(StressLevel::High) {
            tally.add(7, "Chronic high stress");
            tally.recommend("Stress reduction techniques to lower inflammation");
        }

        if let Some(steps) = lifestyle.daily_steps
            && steps < 5000
        {
            tally.add(5, format!("Low daily activity ({steps} steps)"));
            tally.recommend("Regular moderate exercise reduces cancer risk");
        }

        if lifestyle.work_schedule == Some(WorkSchedule::Night) {
            tally.add(5, "Night shift work");
            tally.recommend("Maintain healthy circadian rhythm patterns");
        }

        let genetics = &indicators.genetics;
        if genetics.has_genetic_testing && !genetics.genetic_risk_factors.is_empty() {
            tally.add(
                20,
                format!(
                    "Genetic risk factors identified: {}",
                    genetics.genetic_risk_factors.join(", ")
                ),
            );
            tally.recommend("Enhanced screening protocol recommended");
        }

        tally.into_risk(
            Disease::Cancer,
            &["Schedule annual cancer screening appropriate for age and risk factors"],
            &["Maintain regular age-appropriate screenings"],
            "Continue preventive care",
        )
    }
}
