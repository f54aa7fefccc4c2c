//! Axum route handlers for the Generation API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::engine::ResponseBundle;
use crate::generation::style::Style;
use crate::models::prompt_request::{NewPromptRequest, PromptRequest};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    /// Recorded with the request. All three styles are always generated.
    pub style: Style,
}

/// POST /api/generate
///
/// Records the request, generates all three styles, stores them on the record,
/// and returns the bundle.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<ResponseBundle>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    // Whitespace is a valid prompt; it falls through to the general responses.
    if request.prompt.is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let record = state
        .store
        .create_prompt_request(NewPromptRequest {
            prompt: request.prompt.clone(),
            style: request.style,
        })
        .await?;

    let bundle = state.provider.generate(&request.prompt).await?;

    state
        .store
        .update_responses(record.id, &bundle)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Prompt request {} not found", record.id)))?;

    debug!(
        "Selected style {} returned {} chars",
        request.style,
        bundle.get(request.style).chars().count()
    );
    info!(
        "Generated responses for request {} (style={}, provider={})",
        record.id,
        request.style,
        state.provider.name()
    );

    Ok(Json(bundle))
}

/// GET /api/requests/:id
pub async fn handle_get_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PromptRequest>, AppError> {
    let record = state
        .store
        .get_prompt_request(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Prompt request {id} not found")))?;

    Ok(Json(record))
}
