use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A self-reported health indicator record, submitted once per assessment.
///
/// Optional lifestyle fields mean "not assessed" when absent — they
/// contribute nothing to any risk score.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthIndicators {
    pub age: u32,
    pub gender: Gender,
    pub bmi: f64,
    pub blood_pressure_systolic: f64,
    pub blood_pressure_diastolic: f64,
    /// Fasting blood glucose, mg/dL.
    pub glucose: f64,
    /// Fasting insulin, µIU/mL.
    pub insulin: f64,
    /// Total cholesterol, mg/dL.
    pub cholesterol: f64,
    pub triglycerides: f64,
    pub family_history: FamilyHistory,
    pub lifestyle: Lifestyle,
    #[serde(default)]
    pub genetics: Genetics,
    #[serde(default)]
    pub clinical_data: ClinicalData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FamilyHistory {
    pub diabetes: bool,
    pub heart_disease: bool,
    pub cancer: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Lifestyle {
    pub smoking: bool,
    pub alcohol: AlcoholUse,
    pub exercise: ExerciseLevel,
    pub diet: DietQuality,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sleep_quality: Option<SleepQuality>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sleep_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stress_level: Option<StressLevel>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub daily_steps: Option<u32>,
    /// Litres per day.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub water_intake: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub work_schedule: Option<WorkSchedule>,
    /// Hours per day.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub screen_time: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AlcoholUse {
    None,
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ExerciseLevel {
    None,
    Light,
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DietQuality {
    Poor,
    Moderate,
    Good,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SleepQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StressLevel {
    None,
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WorkSchedule {
    Standard,
    Shift,
    Night,
    Irregular,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Genetics {
    pub has_genetic_testing: bool,
    #[serde(default)]
    pub genetic_risk_factors: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalData {
    #[serde(default)]
    pub previous_conditions: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
}
