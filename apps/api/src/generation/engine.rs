//! Mock generation engine.
//!
//! Flow: sleep(latency) → classify → render all three styles → bundle.
//!
//! The engine holds no state between calls; the response bank is static data,
//! so concurrent calls need no locking. The sleep yields the task instead of
//! blocking a worker thread.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::generation::classifier::classify;
use crate::generation::response_bank::response_text;
use crate::generation::style::Style;

/// One text per style. Always complete: there is no partial bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBundle {
    pub creative: String,
    pub concise: String,
    pub stepbystep: String,
}

impl ResponseBundle {
    pub fn get(&self, style: Style) -> &str {
        match style {
            Style::Creative => &self.creative,
            Style::Concise => &self.concise,
            Style::StepByStep => &self.stepbystep,
        }
    }
}

/// Deterministic pattern-matched generator standing in for a model backend.
#[derive(Debug, Clone)]
pub struct MockEngine {
    latency: Duration,
}

impl MockEngine {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Produces the full bundle for `prompt`. Total over all strings.
    pub async fn generate(&self, prompt: &str) -> ResponseBundle {
        // Simulated network latency.
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let category = classify(prompt);
        info!("Mock engine matched category={category}");

        let [creative, concise, stepbystep] =
            Style::ALL.map(|style| response_text(category, style, prompt));
        ResponseBundle {
            creative,
            concise,
            stepbystep,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn instant() -> MockEngine {
        MockEngine::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_coding_prompt_concise_opening() {
        let bundle = instant().generate("How do I start learning to code?").await;
        assert!(bundle.concise.starts_with("Start with Python basics"));
    }

    #[tokio::test]
    async fn test_cover_letter_prompt_uses_cover_letter_texts() {
        let bundle = instant()
            .generate("Write a cover letter for a tech internship")
            .await;
        assert!(bundle.concise.starts_with("Cover letter template"));
    }

    #[tokio::test]
    async fn test_unclassifiable_prompt_embeds_prompt_in_every_style() {
        let prompt = "asdfqwerty nonsense query";
        let bundle = instant().generate(prompt).await;
        for style in Style::ALL {
            assert_eq!(bundle.get(style).matches(prompt).count(), 1, "{style}");
        }
    }

    #[tokio::test]
    async fn test_empty_prompt_still_returns_full_bundle() {
        let bundle = instant().generate("").await;
        for style in Style::ALL {
            assert!(!bundle.get(style).is_empty());
        }
        assert!(bundle.concise.starts_with("For \"\":"));
    }

    #[tokio::test]
    async fn test_generation_is_deterministic() {
        let engine = instant();
        let first = engine.generate("Tips for managing stress in college").await;
        let second = engine.generate("Tips for managing stress in college").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_all_fields_non_empty_for_sample_prompts() {
        let engine = instant();
        for prompt in [
            "How do I start learning to code?",
            "Plan a trip to Paris",
            "EXPLAIN ARTIFICIAL INTELLIGENCE",
            "what is the meaning of life",
            "🙂",
        ] {
            let bundle = engine.generate(prompt).await;
            for style in Style::ALL {
                assert!(!bundle.get(style).trim().is_empty(), "{prompt} / {style}");
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied_before_returning() {
        let engine = MockEngine::new(Duration::from_millis(1500));
        let start = tokio::time::Instant::now();
        engine.generate("learn to code").await;
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_calls_share_the_delay() {
        let engine = MockEngine::new(Duration::from_millis(1500));
        let start = tokio::time::Instant::now();
        let (a, b) = tokio::join!(engine.generate("learn to code"), engine.generate("small business"));
        assert!(start.elapsed() < Duration::from_millis(3000));
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_bundle_fields_follow_style_order() {
        let prompt = "Plan a trip to Paris";
        let bundle = instant().generate(prompt).await;
        let category = classify(prompt);
        assert_eq!(bundle.creative, response_text(category, Style::Creative, prompt));
        assert_eq!(bundle.concise, response_text(category, Style::Concise, prompt));
        assert_eq!(
            bundle.stepbystep,
            response_text(category, Style::StepByStep, prompt)
        );
    }

    #[test]
    fn test_bundle_serializes_with_style_field_names() {
        let bundle = ResponseBundle {
            creative: "a".to_string(),
            concise: "b".to_string(),
            stepbystep: "c".to_string(),
        };
        let value = serde_json::to_value(&bundle).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"creative": "a", "concise": "b", "stepbystep": "c"})
        );
    }

    fn generate_blocking(prompt: &str) -> ResponseBundle {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(instant().generate(prompt))
    }

    proptest! {
        #[test]
        fn prop_every_style_is_non_empty(prompt in any::<String>()) {
            let bundle = generate_blocking(&prompt);
            for style in Style::ALL {
                prop_assert!(!bundle.get(style).trim().is_empty(), "{style}");
            }
        }

        #[test]
        fn prop_same_prompt_same_bundle(prompt in "\\PC{0,80}") {
            prop_assert_eq!(generate_blocking(&prompt), generate_blocking(&prompt));
        }
    }
}
