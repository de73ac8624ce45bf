//! Fixed prompt text used by the assistant gateway.

use std::fmt;
use std::str::FromStr;

/// System instruction sent ahead of every conversation reply.
pub const MEDICAL_SYSTEM_PROMPT: &str = "\
You are Dr. MedAssist, a helpful AI healthcare companion. You provide general health information, symptom guidance, medication information, and wellness tips.

IMPORTANT GUIDELINES:
- Provide accurate, evidence-based health information
- Always emphasize that you cannot replace professional medical advice
- For serious symptoms or emergencies, direct users to seek immediate medical attention
- Be empathetic and supportive in your responses
- Use clear, easy-to-understand language
- Include practical tips when appropriate
- Add relevant emojis to make responses more engaging
- Format responses with bullet points or sections when helpful

EMERGENCY KEYWORDS: If user mentions severe symptoms like chest pain, difficulty breathing, severe bleeding, loss of consciousness, or uses words like \"emergency\" or \"urgent\", immediately advise them to contact emergency services.

Respond in a helpful, professional, and caring manner while being thorough but concise.";

/// System instruction for quick-action requests.
pub const QUICK_ACTION_SYSTEM_PROMPT: &str = "You are Dr. MedAssist, a helpful AI healthcare companion. \
Provide clear, helpful health information with appropriate warnings about seeking professional medical care when needed.";

/// Reply used when the provider returns an empty conversation reply.
pub const CHAT_FALLBACK_REPLY: &str =
    "I apologize, but I'm having trouble processing your request right now. Please try again.";

/// Reply used when the provider returns an empty quick-action reply.
pub const QUICK_ACTION_FALLBACK_REPLY: &str =
    "I apologize, but I'm having trouble providing that information right now.";

/// Canned topics offered as one-click prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Symptoms,
    Medications,
    Wellness,
    Emergency,
}

impl QuickAction {
    /// Resolve an action key, falling back to `Symptoms` for unknown keys.
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or(QuickAction::Symptoms)
    }

    /// The user-turn prompt sent for this action.
    pub fn prompt(self) -> &'static str {
        match self {
            QuickAction::Symptoms => {
                "Provide information about common symptoms like headaches, fever, cough, and stomach pain. \
                 Include when to seek medical attention."
            }
            QuickAction::Medications => {
                "Explain general medication safety, how to read prescription labels, common drug \
                 interactions to be aware of, and the importance of following dosing instructions."
            }
            QuickAction::Wellness => {
                "Share practical wellness tips including hydration, exercise, sleep hygiene, stress \
                 management, and healthy eating habits."
            }
            QuickAction::Emergency => {
                "Explain when to call emergency services, what constitutes a medical emergency, and \
                 basic first aid principles. Emphasize the importance of immediate professional \
                 medical help for serious conditions."
            }
        }
    }
}

impl fmt::Display for QuickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuickAction::Symptoms => write!(f, "symptoms"),
            QuickAction::Medications => write!(f, "medications"),
            QuickAction::Wellness => write!(f, "wellness"),
            QuickAction::Emergency => write!(f, "emergency"),
        }
    }
}

impl FromStr for QuickAction {
    type Err = String;

    /// Keys are matched exactly (case-sensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "symptoms" => Ok(QuickAction::Symptoms),
            "medications" => Ok(QuickAction::Medications),
            "wellness" => Ok(QuickAction::Wellness),
            "emergency" => Ok(QuickAction::Emergency),
            other => Err(format!("unknown quick action: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_action_roundtrip() {
        for action in [
            QuickAction::Symptoms,
            QuickAction::Medications,
            QuickAction::Wellness,
            QuickAction::Emergency,
        ] {
            let parsed: QuickAction = action.to_string().parse().unwrap();
            assert_eq!(action, parsed);
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_symptoms() {
        assert_eq!(QuickAction::from_key("nutrition"), QuickAction::Symptoms);
        assert_eq!(QuickAction::from_key(""), QuickAction::Symptoms);
        assert_eq!(QuickAction::from_key("Wellness"), QuickAction::Symptoms);
    }

    #[test]
    fn test_prompts_are_distinct() {
        assert!(QuickAction::Symptoms.prompt().contains("headaches"));
        assert!(QuickAction::Medications.prompt().contains("prescription labels"));
        assert!(QuickAction::Wellness.prompt().contains("sleep hygiene"));
        assert!(QuickAction::Emergency.prompt().contains("first aid"));
    }
}
