//! Chatbot personas: system prompts and crisis detection.

use arogya_core::models::{BotKind, Language};

/// Human-readable persona name for UI labels.
pub fn display_name(bot: BotKind) -> &'static str {
    match bot {
        BotKind::GeneralHealth => "General Health Assistant",
        BotKind::MentalHealth => "Mental Health Support",
    }
}

/// The system prompt establishing each persona's guardrails.
pub fn system_prompt(bot: BotKind) -> &'static str {
    match bot {
        BotKind::GeneralHealth => {
            "You are a helpful medical assistant. Please provide accurate, \
             evidence-based health information. Always remind users to consult \
             healthcare professionals for serious concerns."
        }
        BotKind::MentalHealth => {
            "You are a compassionate mental health support assistant. Provide \
             empathetic, supportive responses. If the user mentions self-harm \
             or suicide, urgently recommend professional help and crisis \
             hotlines. Always be kind and understanding."
        }
    }
}

/// Append a response-language instruction when the user is not on English.
pub fn with_language(prompt: &str, language: Language) -> String {
    match language {
        Language::En => prompt.to_string(),
        Language::Hi => format!("{prompt} Please respond in Hindi."),
    }
}

const CRISIS_PHRASES: [&str; 5] = [
    "suicide",
    "kill myself",
    "end my life",
    "hurt myself",
    "self-harm",
];

/// Whether a user message should trigger the crisis-resources banner.
///
/// Deliberately broad substring matching — a false positive shows a help
/// box, a false negative hides it.
pub fn is_crisis_message(message: &str) -> bool {
    let lower = message.to_lowercase();
    CRISIS_PHRASES.iter().any(|phrase| lower.contains(phrase))
}
