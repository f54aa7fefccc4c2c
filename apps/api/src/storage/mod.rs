//! Prompt request storage — a capability the HTTP layer depends on, not a global.
//!
//! Default: `MemoryPromptStore` (process lifetime only).
//! With `DATABASE_URL` set: `PgPromptStore`.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::config::Config;
use crate::db::create_pool;
use crate::generation::engine::ResponseBundle;
use crate::models::prompt_request::{NewPromptRequest, PromptRequest};

pub use memory::MemoryPromptStore;
pub use postgres::PgPromptStore;

#[async_trait]
pub trait PromptStore: Send + Sync {
    /// Records a new request with all response fields null.
    async fn create_prompt_request(&self, request: NewPromptRequest) -> Result<PromptRequest>;

    async fn get_prompt_request(&self, id: Uuid) -> Result<Option<PromptRequest>>;

    /// Copies the bundle into the record. `Ok(None)` means no record with `id` exists.
    async fn update_responses(
        &self,
        id: Uuid,
        bundle: &ResponseBundle,
    ) -> Result<Option<PromptRequest>>;
}

/// Picks the store backend from configuration.
pub async fn build_store(config: &Config) -> Result<Arc<dyn PromptStore>> {
    match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            let store = PgPromptStore::new(pool);
            store.ensure_schema().await?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::info!("DATABASE_URL not set; prompt requests are kept in memory");
            Ok(Arc::new(MemoryPromptStore::new()))
        }
    }
}
