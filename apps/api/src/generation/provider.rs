//! Response providers — pluggable backends that turn a prompt into a bundle.
//!
//! Default: `MockResponseProvider` (pattern-matched canned text, no network).
//! Alternative: `LlmResponseProvider` (one chat completion per style).
//!
//! `AppState` holds an `Arc<dyn ResponseProvider>`, chosen at startup via
//! `RESPONSE_PROVIDER`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

use crate::config::{Config, ProviderConfig};
use crate::errors::AppError;
use crate::generation::engine::{MockEngine, ResponseBundle};
use crate::generation::prompts::{style_settings, EMPTY_COMPLETION_FALLBACK};
use crate::generation::style::Style;
use crate::llm_client::LlmClient;

/// Implement this to swap backends without touching the handler.
#[async_trait]
pub trait ResponseProvider: Send + Sync {
    /// Returns all three styles, or an error. Never a partial bundle.
    async fn generate(&self, prompt: &str) -> Result<ResponseBundle, AppError>;

    /// Short backend label for logs and `/health`.
    fn name(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// MockResponseProvider
// ────────────────────────────────────────────────────────────────────────────

pub struct MockResponseProvider {
    engine: MockEngine,
}

impl MockResponseProvider {
    pub fn new(latency: Duration) -> Self {
        Self {
            engine: MockEngine::new(latency),
        }
    }
}

#[async_trait]
impl ResponseProvider for MockResponseProvider {
    async fn generate(&self, prompt: &str) -> Result<ResponseBundle, AppError> {
        Ok(self.engine.generate(prompt).await)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmResponseProvider
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmResponseProvider {
    llm: LlmClient,
}

impl LlmResponseProvider {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    async fn generate_style(&self, prompt: &str, style: Style) -> Result<String, AppError> {
        let settings = style_settings(style);
        let response = self
            .llm
            .complete(settings.system, prompt, settings.max_tokens, settings.temperature)
            .await
            .map_err(|e| AppError::Llm(format!("Failed to generate {style} response: {e}")))?;

        Ok(response
            .text()
            .unwrap_or(EMPTY_COMPLETION_FALLBACK)
            .to_string())
    }
}

#[async_trait]
impl ResponseProvider for LlmResponseProvider {
    async fn generate(&self, prompt: &str) -> Result<ResponseBundle, AppError> {
        let (creative, concise, stepbystep) = tokio::try_join!(
            self.generate_style(prompt, Style::Creative),
            self.generate_style(prompt, Style::Concise),
            self.generate_style(prompt, Style::StepByStep),
        )?;

        Ok(ResponseBundle {
            creative,
            concise,
            stepbystep,
        })
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

/// Builds the provider described by `config.provider`.
pub fn build_provider(config: &Config) -> Result<Arc<dyn ResponseProvider>> {
    let provider: Arc<dyn ResponseProvider> = match &config.provider {
        ProviderConfig::Mock { latency_ms } => {
            info!("Mock latency: {latency_ms}ms");
            Arc::new(MockResponseProvider::new(Duration::from_millis(*latency_ms)))
        }
        ProviderConfig::OpenAi { api_key, endpoint } => {
            let llm = match endpoint {
                Some(endpoint) => LlmClient::with_endpoint(api_key.clone(), endpoint.clone()),
                None => LlmClient::new(api_key.clone()),
            }
            .context("Failed to build HTTP client")?;
            info!("LLM client initialized (model: {})", crate::llm_client::MODEL);
            Arc::new(LlmResponseProvider::new(llm))
        }
    };

    info!("Response provider: {}", provider.name());
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    use super::*;

    /// Serves `router` on an ephemeral local port and returns its
    /// chat-completions URL.
    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/v1/chat/completions")
    }

    fn llm_provider(endpoint: String) -> LlmResponseProvider {
        LlmResponseProvider::new(LlmClient::with_endpoint("sk-test".to_string(), endpoint).unwrap())
    }

    #[tokio::test]
    async fn test_mock_provider_never_fails() {
        let provider = MockResponseProvider::new(Duration::ZERO);
        for prompt in ["", "   ", "learn to code", "asdfqwerty"] {
            let bundle = provider.generate(prompt).await.unwrap();
            assert!(!bundle.creative.is_empty());
            assert!(!bundle.concise.is_empty());
            assert!(!bundle.stepbystep.is_empty());
        }
    }

    #[tokio::test]
    async fn test_llm_provider_uses_completion_text_per_style() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|Json(body): Json<Value>| async move {
                let reply = format!("tokens={}", body["max_tokens"]);
                Json(json!({
                    "choices": [{"message": {"role": "assistant", "content": reply}}],
                    "usage": {"prompt_tokens": 5, "completion_tokens": 2}
                }))
            }),
        );
        let provider = llm_provider(spawn_stub(router).await);

        let bundle = provider.generate("learn to code").await.unwrap();
        assert_eq!(bundle.creative, "tokens=300");
        assert_eq!(bundle.concise, "tokens=150");
        assert_eq!(bundle.stepbystep, "tokens=400");
    }

    #[tokio::test]
    async fn test_llm_provider_null_content_falls_back() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(json!({"choices": [{"message": {"content": null}}]})) }),
        );
        let provider = llm_provider(spawn_stub(router).await);

        let bundle = provider.generate("anything").await.unwrap();
        assert_eq!(bundle.creative, EMPTY_COMPLETION_FALLBACK);
        assert_eq!(bundle.concise, EMPTY_COMPLETION_FALLBACK);
        assert_eq!(bundle.stepbystep, EMPTY_COMPLETION_FALLBACK);
    }

    #[tokio::test]
    async fn test_llm_provider_fails_whole_bundle_when_one_style_fails() {
        // Only the concise call (max_tokens 150) is rejected upstream.
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|Json(body): Json<Value>| async move {
                if body["max_tokens"] == 150 {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({"error": {"message": "upstream exploded"}})),
                    )
                } else {
                    (
                        StatusCode::OK,
                        Json(json!({"choices": [{"message": {"content": "fine"}}]})),
                    )
                }
            }),
        );
        let provider = llm_provider(spawn_stub(router).await);

        match provider.generate("learn to code").await {
            Err(AppError::Llm(message)) => {
                assert!(message.contains("concise"), "{message}");
                assert!(message.contains("upstream exploded"), "{message}");
            }
            other => panic!("expected LLM error, got {other:?}"),
        }
    }

    #[test]
    fn test_build_provider_defaults_to_mock() {
        let provider = build_provider(&Config::default()).unwrap();
        assert_eq!(provider.name(), "mock");
    }

    #[test]
    fn test_build_provider_openai_with_key() {
        let config = Config {
            provider: ProviderConfig::OpenAi {
                api_key: "sk-test".to_string(),
                endpoint: None,
            },
            ..Config::default()
        };
        let provider = build_provider(&config).unwrap();
        assert_eq!(provider.name(), "openai");
    }

    #[test]
    fn test_build_provider_openai_with_custom_endpoint() {
        let config = Config {
            provider: ProviderConfig::OpenAi {
                api_key: "sk-test".to_string(),
                endpoint: Some("http://127.0.0.1:1/v1/chat/completions".to_string()),
            },
            ..Config::default()
        };
        assert_eq!(build_provider(&config).unwrap().name(), "openai");
    }
}
