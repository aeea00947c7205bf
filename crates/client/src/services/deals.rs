//! Deal pipeline service

use std::sync::Arc;

use dealflow_domain::{Deal, DealPayload, KanbanColumn, MoveStageRequest, Page};

use super::with_query;
use crate::api::{ApiClient, ApiError};

/// Typed wrapper over the deal endpoints
pub struct DealsApi {
    client: Arc<ApiClient>,
}

impl DealsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List deals, optionally filtered (`stage`, `company`, `search`, ...).
    pub async fn list(&self, params: &[(&str, &str)]) -> Result<Page<Deal>, ApiError> {
        self.client.get(&with_query("/deals/", params)).await
    }

    pub async fn get(&self, id: i64) -> Result<Deal, ApiError> {
        self.client.get(&format!("/deals/{id}/")).await
    }

    pub async fn create(&self, payload: &DealPayload) -> Result<Deal, ApiError> {
        self.client.post("/deals/", payload).await
    }

    pub async fn update(&self, id: i64, payload: &DealPayload) -> Result<Deal, ApiError> {
        self.client.patch(&format!("/deals/{id}/"), payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/deals/{id}/")).await
    }

    /// Grouped-by-stage board snapshot.
    pub async fn kanban(&self) -> Result<Vec<KanbanColumn>, ApiError> {
        self.client.get("/deals/kanban/").await
    }

    /// Move a deal to another pipeline stage, optionally adopting that
    /// stage's default probability.
    pub async fn move_stage(
        &self,
        id: i64,
        stage_id: i64,
        update_probability: bool,
    ) -> Result<Deal, ApiError> {
        let body = MoveStageRequest { stage_id, update_probability };
        self.client.patch(&format!("/deals/{id}/move_stage/"), &body).await
    }
}
