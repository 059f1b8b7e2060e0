//! Wellness assistant boundary.
//!
//! The portal consumes exactly two capabilities from the external
//! text-generation collaborator: answering a free-text health question and
//! producing a one-line daily tip. Both are best-effort; implementations
//! degrade to the fixed fallback phrases and never let an error cross this
//! boundary.

mod gemini;

pub use gemini::GeminiAssistant;

use async_trait::async_trait;

/// Shown when a health question cannot be answered.
pub const ANSWER_FALLBACK: &str =
    "I'm having trouble connecting to the wellness server. Please try again later.";

/// Shown when the API answered but produced no text.
pub const ANSWER_EMPTY: &str =
    "I apologize, but I couldn't generate a response at this time. Please try again.";

/// Shown when no daily tip could be fetched.
pub const TIP_FALLBACK: &str = "Take a deep breath and stretch every hour.";

/// Shown when the API answered a tip request with no text.
pub const TIP_EMPTY: &str = "Drink plenty of water today!";

#[async_trait]
pub trait WellnessAssistant: Send + Sync {
    fn assistant_name(&self) -> &str;

    /// Answer a free-text health question. Never fails; degraded responses
    /// come back as the fallback phrase.
    async fn answer_question(&self, question: &str) -> String;

    /// Produce a one-line wellness tip. Never fails.
    async fn daily_tip(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedAssistant {
        answer: String,
    }

    #[async_trait]
    impl WellnessAssistant for ScriptedAssistant {
        fn assistant_name(&self) -> &str {
            "scripted"
        }

        async fn answer_question(&self, _question: &str) -> String {
            self.answer.clone()
        }

        async fn daily_tip(&self) -> String {
            TIP_FALLBACK.to_string()
        }
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let assistant: Box<dyn WellnessAssistant> = Box::new(ScriptedAssistant {
            answer: "rest and hydrate".to_string(),
        });
        assert_eq!(assistant.assistant_name(), "scripted");
        assert_eq!(assistant.answer_question("headache?").await, "rest and hydrate");
        assert_eq!(assistant.daily_tip().await, TIP_FALLBACK);
    }
}
