// Style-specific system prompts and sampling settings for the real-inference provider.

use crate::generation::style::Style;

/// Returned in place of an empty completion so a bundle never carries blank text.
pub const EMPTY_COMPLETION_FALLBACK: &str = "Sorry, I couldn't generate a response.";

const CREATIVE_SYSTEM: &str = "You are a creative and imaginative AI assistant. \
    Respond in a fun, engaging way with creative analogies, metaphors, and playful language. \
    Make complex topics feel exciting and approachable. \
    Use emojis, vivid examples, and storytelling elements to bring your responses to life.";

const CONCISE_SYSTEM: &str = "You are a precise and efficient AI assistant. \
    Provide brief, factual answers with key points only. \
    Be direct and to-the-point while remaining helpful. \
    Focus on the essential information without unnecessary elaboration.";

const STEP_BY_STEP_SYSTEM: &str = "You are a detailed and methodical AI tutor. \
    Break down your responses into clear, actionable steps with comprehensive explanations. \
    Provide a structured guide that someone can follow step-by-step. \
    Include helpful tips and context for each step.";

/// Per-style request settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSettings {
    pub system: &'static str,
    pub max_tokens: u32,
    pub temperature: f32,
}

pub fn style_settings(style: Style) -> StyleSettings {
    match style {
        Style::Creative => StyleSettings {
            system: CREATIVE_SYSTEM,
            max_tokens: 300,
            temperature: 0.9,
        },
        Style::Concise => StyleSettings {
            system: CONCISE_SYSTEM,
            max_tokens: 150,
            temperature: 0.3,
        },
        Style::StepByStep => StyleSettings {
            system: STEP_BY_STEP_SYSTEM,
            max_tokens: 400,
            temperature: 0.7,
        },
    }
}
