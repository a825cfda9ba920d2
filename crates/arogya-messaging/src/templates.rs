//! Subscriber-facing message templates.

use arogya_core::models::{AlertLevel, Language};

/// Welcome message sent after a successful subscription.
pub fn welcome(language: Language) -> &'static str {
    match language {
        Language::En => {
            "Welcome to Arogya! You've successfully subscribed to health \
             alerts. We'll send you important health information and \
             reminders."
        }
        Language::Hi => {
            "Arogya में आपका स्वागत है! आपने सफलतापूर्वक स्वास्थ्य अलर्ट के लिए \
             सदस्यता ले ली है। हम आपको महत्वपूर्ण स्वास्थ्य जानकारी भेजेंगे।"
        }
    }
}

/// Notification sent when a stored assessment raises an actionable alert.
pub fn risk_alert(language: Language, alert_level: AlertLevel) -> String {
    let urgency = match (language, alert_level) {
        (Language::En, AlertLevel::Critical) => "urgent attention",
        (Language::En, _) => "follow-up",
        (Language::Hi, AlertLevel::Critical) => "तत्काल ध्यान",
        (Language::Hi, _) => "फॉलो-अप",
    };

    match language {
        Language::En => format!(
            "Arogya: your latest health assessment needs {urgency}. Please \
             review your preventive plan and consult a doctor."
        ),
        Language::Hi => format!(
            "Arogya: आपके नवीनतम स्वास्थ्य मूल्यांकन को {urgency} की आवश्यकता है। \
             कृपया अपनी रोकथाम योजना देखें और डॉक्टर से परामर्श करें।"
        ),
    }
}
