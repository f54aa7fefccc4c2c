use std::sync::Arc;

use crate::config::Config;
use crate::generation::provider::ResponseProvider;
use crate::storage::PromptStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Where prompt requests are recorded. Default: in-memory.
    pub store: Arc<dyn PromptStore>,
    /// Pluggable response backend. Default: mock. Swap via RESPONSE_PROVIDER.
    pub provider: Arc<dyn ResponseProvider>,
}
