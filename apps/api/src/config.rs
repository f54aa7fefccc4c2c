use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// Default simulated latency for the mock provider, in milliseconds.
pub const DEFAULT_MOCK_LATENCY_MS: u64 = 1500;

/// Which backend produces the response bundles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProviderKind {
    #[default]
    Mock,
    OpenAi,
}

impl FromStr for ProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(ProviderKind::Mock),
            "openai" => Ok(ProviderKind::OpenAi),
            other => Err(anyhow!(
                "Unknown response provider '{other}'. Supported: mock, openai"
            )),
        }
    }
}

/// Provider settings, resolved from `RESPONSE_PROVIDER` and its companions.
/// The OpenAI variant cannot exist without an API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    Mock {
        latency_ms: u64,
    },
    OpenAi {
        api_key: String,
        /// Overrides the chat-completions URL (`OPENAI_API_URL`).
        endpoint: Option<String>,
    },
}

impl ProviderConfig {
    /// Combines the parsed provider kind with the variables it depends on.
    pub fn resolve(
        kind: ProviderKind,
        api_key: Option<String>,
        endpoint: Option<String>,
        latency_ms: u64,
    ) -> Result<Self> {
        match kind {
            ProviderKind::Mock => Ok(ProviderConfig::Mock { latency_ms }),
            ProviderKind::OpenAi => {
                let api_key = api_key.ok_or_else(|| {
                    anyhow!(
                        "Required environment variable 'OPENAI_API_KEY' is not set (RESPONSE_PROVIDER=openai)"
                    )
                })?;
                Ok(ProviderConfig::OpenAi { api_key, endpoint })
            }
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig::Mock {
            latency_ms: DEFAULT_MOCK_LATENCY_MS,
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if a variable is present but invalid.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub provider: ProviderConfig,
    /// When unset, prompt requests live in memory for the lifetime of the process.
    pub database_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let kind = match optional_env("RESPONSE_PROVIDER") {
            Some(raw) => raw.parse::<ProviderKind>()?,
            None => ProviderKind::default(),
        };
        let latency_ms = match optional_env("MOCK_LATENCY_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("MOCK_LATENCY_MS must be a non-negative integer")?,
            None => DEFAULT_MOCK_LATENCY_MS,
        };
        let provider = ProviderConfig::resolve(
            kind,
            optional_env("OPENAI_API_KEY"),
            optional_env("OPENAI_API_URL"),
            latency_ms,
        )?;

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            provider,
            database_url: optional_env("DATABASE_URL"),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            provider: ProviderConfig::default(),
            database_url: None,
        }
    }
}

/// Reads an env var, treating empty values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
