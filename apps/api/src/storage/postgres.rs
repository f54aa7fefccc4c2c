use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::PromptStore;
use crate::generation::engine::ResponseBundle;
use crate::models::prompt_request::{NewPromptRequest, PromptRequest};

const CREATE_PROMPT_REQUESTS: &str =
    include_str!("../../migrations/0001_create_prompt_requests.sql");

/// PostgreSQL-backed store over the `prompt_requests` table.
#[derive(Clone)]
pub struct PgPromptStore {
    pool: PgPool,
}

impl PgPromptStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates `prompt_requests` if it is missing.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_PROMPT_REQUESTS)
            .execute(&self.pool)
            .await?;
        info!("prompt_requests table ready");
        Ok(())
    }
}

#[async_trait]
impl PromptStore for PgPromptStore {
    async fn create_prompt_request(&self, request: NewPromptRequest) -> Result<PromptRequest> {
        let record = sqlx::query_as::<_, PromptRequest>(
            r#"
            INSERT INTO prompt_requests (id, prompt, style)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.prompt)
        .bind(request.style.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn get_prompt_request(&self, id: Uuid) -> Result<Option<PromptRequest>> {
        let record =
            sqlx::query_as::<_, PromptRequest>("SELECT * FROM prompt_requests WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(record)
    }

    async fn update_responses(
        &self,
        id: Uuid,
        bundle: &ResponseBundle,
    ) -> Result<Option<PromptRequest>> {
        let record = sqlx::query_as::<_, PromptRequest>(
            r#"
            UPDATE prompt_requests
            SET creative_response = $2,
                concise_response = $3,
                stepbystep_response = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&bundle.creative)
        .bind(&bundle.concise)
        .bind(&bundle.stepbystep)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}
