use arogya_core::models::{
    Disease, DiseaseRisk, DietQuality, ExerciseLevel, HealthIndicators, SleepQuality, StressLevel,
    WorkSchedule,
};

use crate::RiskModel;
use crate::score::Tally;

/// Type 2 diabetes risk. Point weights follow the usual screening factors:
/// age, adiposity, fasting glucose and insulin, family history, and the
/// metabolic lifestyle markers (activity, diet, sleep, shift work).
pub struct DiabetesModel;

impl RiskModel for DiabetesModel {
    fn disease(&self) -> Disease {
        Disease::Diabetes
    }

    fn name(&self) -> &str {
        "Type 2 Diabetes"
    }

    fn assess(&self, indicators: &HealthIndicators) -> DiseaseRisk {
        let mut tally = Tally::new();
        let lifestyle = &indicators.lifestyle;

        if indicators.age >= 65 {
            tally.add(25, "Advanced age (65+)");
        } else if indicators.age >= 45 {
            tally.add(15, "Age (45-64)");
        }

        if indicators.bmi >= 30.0 {
            tally.add(20, "Obesity (BMI ≥30)");
            tally.recommend("Work with a nutritionist to develop a weight loss plan");
        } else if indicators.bmi >= 25.0 {
            tally.add(10, "Overweight (BMI 25-29.9)");
            tally.recommend("Consider moderate exercise and dietary improvements");
        }

        if indicators.glucose >= 126.0 {
            tally.add(30, "Elevated blood glucose (≥126 mg/dL)");
            tally.recommend("Immediate medical consultation required for glucose levels");
        } else if indicators.glucose >= 100.0 {
            tally.add(15, "Pre-diabetic glucose levels (100-125 mg/dL)");
            tally.recommend("Monitor glucose levels monthly");
        }

        if indicators.family_history.diabetes {
            tally.add(15, "Family history of diabetes");
        }

        if lifestyle.exercise == ExerciseLevel::None {
            tally.add(10, "Sedentary lifestyle");
            tally.recommend("Start with 150 minutes of moderate exercise per week");
        }

        if lifestyle.diet == DietQuality::Poor {
            tally.add(10, "Poor diet quality");
            tally.recommend("Reduce processed foods and increase fiber intake");
        }

        if lifestyle.sleep_quality == Some(SleepQuality::Poor) {
            tally.add(8, "Poor sleep quality");
            tally.recommend("Improve sleep hygiene and aim for 7-9 hours per night");
        }

        if let Some(hours) = lifestyle.sleep_hours
            && !(6.0..=9.0).contains(&hours)
        {
            tally.add(5, format!("Inadequate sleep ({hours} hours)"));
            tally.recommend("Maintain consistent 7-9 hours of sleep per night");
        }

        if lifestyle.stress_level == Some(StressLevel::High) {
            tally.add(8, "High stress levels");
            tally.recommend("Implement stress management techniques (meditation, yoga)");
        }

        if let Some(steps) = lifestyle.daily_steps
            && steps < 5000
        {
            tally.add(5, format!("Low daily activity ({steps} steps)"));
            tally.recommend("Increase daily steps to at least 7,000-10,000 steps");
        }

        if let Some(litres) = lifestyle.water_intake
            && litres < 1.5
        {
            tally.add(3, format!("Inadequate hydration ({litres}L)"));
            tally.recommend("Increase water intake to 2-3 liters daily");
        }

        // Shift work disrupts glucose metabolism.
        if matches!(
            lifestyle.work_schedule,
            Some(WorkSchedule::Night) | Some(WorkSchedule::Shift)
        ) {
            tally.add(5, "Irregular work schedule");
            tally.recommend("Maintain regular meal times despite shift work");
        }

        if indicators.insulin > 20.0 {
            tally.add(10, "Elevated insulin levels");
        }

        tally.into_risk(
            Disease::Diabetes,
            &[
                "Schedule annual diabetes screening",
                "Maintain healthy weight through diet and exercise",
            ],
            &[],
            "Continue regular checkups",
        )
    }
}
