pub mod chat_log;
pub mod indicators;
pub mod prediction;
pub mod risk;
pub mod subscription;

pub use chat_log::{BotKind, ChatLog};
pub use indicators::{
    AlcoholUse, ClinicalData, DietQuality, ExerciseLevel, FamilyHistory, Gender, Genetics,
    HealthIndicators, Lifestyle, SleepQuality, StressLevel, WorkSchedule,
};
pub use prediction::{Prediction, PreventivePlan};
pub use risk::{AlertLevel, Disease, DiseaseRisk, RiskLevel};
pub use subscription::{Channel, DeliveryStatus, Language, MessageLog, Subscription};
