use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::generation::style::Style;

/// A stored generate request. Responses stay `None` until the provider returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PromptRequest {
    pub id: Uuid,
    pub prompt: String,
    /// Wire name of the style the user picked. Recorded, not used for generation.
    pub style: String,
    pub creative_response: Option<String>,
    pub concise_response: Option<String>,
    pub stepbystep_response: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the caller when a request is first recorded.
#[derive(Debug, Clone)]
pub struct NewPromptRequest {
    pub prompt: String,
    pub style: Style,
}
