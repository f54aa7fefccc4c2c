use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::PromptStore;
use crate::generation::engine::ResponseBundle;
use crate::models::prompt_request::{NewPromptRequest, PromptRequest};

/// In-memory store. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryPromptStore {
    requests: RwLock<HashMap<Uuid, PromptRequest>>,
}

impl MemoryPromptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored records, oldest first.
    #[cfg(test)]
    pub async fn requests_snapshot(&self) -> Vec<PromptRequest> {
        let mut records: Vec<PromptRequest> =
            self.requests.read().await.values().cloned().collect();
        records.sort_by_key(|r| r.created_at);
        records
    }
}

#[async_trait]
impl PromptStore for MemoryPromptStore {
    async fn create_prompt_request(&self, request: NewPromptRequest) -> Result<PromptRequest> {
        let record = PromptRequest {
            id: Uuid::new_v4(),
            prompt: request.prompt,
            style: request.style.as_str().to_string(),
            creative_response: None,
            concise_response: None,
            stepbystep_response: None,
            created_at: Utc::now(),
        };

        self.requests
            .write()
            .await
            .insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_prompt_request(&self, id: Uuid) -> Result<Option<PromptRequest>> {
        Ok(self.requests.read().await.get(&id).cloned())
    }

    async fn update_responses(
        &self,
        id: Uuid,
        bundle: &ResponseBundle,
    ) -> Result<Option<PromptRequest>> {
        let mut requests = self.requests.write().await;
        let Some(existing) = requests.get_mut(&id) else {
            return Ok(None);
        };

        existing.creative_response = Some(bundle.creative.clone());
        existing.concise_response = Some(bundle.concise.clone());
        existing.stepbystep_response = Some(bundle.stepbystep.clone());
        Ok(Some(existing.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::style::Style;

    fn bundle() -> ResponseBundle {
        ResponseBundle {
            creative: "creative text".to_string(),
            concise: "concise text".to_string(),
            stepbystep: "steps text".to_string(),
        }
    }

    fn new_request(prompt: &str) -> NewPromptRequest {
        NewPromptRequest {
            prompt: prompt.to_string(),
            style: Style::Concise,
        }
    }

    #[tokio::test]
    async fn test_create_starts_with_null_responses() {
        let store = MemoryPromptStore::new();
        let record = store.create_prompt_request(new_request("hi")).await.unwrap();

        assert_eq!(record.prompt, "hi");
        assert_eq!(record.style, "concise");
        assert!(record.creative_response.is_none());
        assert!(record.concise_response.is_none());
        assert!(record.stepbystep_response.is_none());
    }

    #[tokio::test]
    async fn test_get_returns_created_record() {
        let store = MemoryPromptStore::new();
        let record = store.create_prompt_request(new_request("hi")).await.unwrap();

        let fetched = store.get_prompt_request(record.id).await.unwrap();
        assert_eq!(fetched, Some(record));
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let store = MemoryPromptStore::new();
        assert!(store.get_prompt_request(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_copies_all_three_responses() {
        let store = MemoryPromptStore::new();
        let record = store.create_prompt_request(new_request("hi")).await.unwrap();

        let updated = store
            .update_responses(record.id, &bundle())
            .await
            .unwrap()
            .expect("record exists");

        assert_eq!(updated.creative_response.as_deref(), Some("creative text"));
        assert_eq!(updated.stepbystep_response.as_deref(), Some("steps text"));
        assert_eq!(updated.concise_response.as_deref(), Some("concise text"));
        assert_eq!(updated.created_at, record.created_at);
        assert_eq!(
            store.get_prompt_request(record.id).await.unwrap(),
            Some(updated)
        );
    }

    #[tokio::test]
    async fn test_update_unknown_id_signals_not_found() {
        let store = MemoryPromptStore::new();
        let result = store.update_responses(Uuid::new_v4(), &bundle()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_records_get_distinct_ids() {
        let store = MemoryPromptStore::new();
        let a = store.create_prompt_request(new_request("a")).await.unwrap();
        let b = store.create_prompt_request(new_request("a")).await.unwrap();
        assert_ne!(a.id, b.id);
    }
}
