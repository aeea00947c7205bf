//! Pipeline stage service

use std::sync::Arc;

use dealflow_domain::{Page, Stage, StagePayload};

use crate::api::{ApiClient, ApiError};

/// Typed wrapper over the stage endpoints
pub struct StagesApi {
    client: Arc<ApiClient>,
}

impl StagesApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Page<Stage>, ApiError> {
        self.client.get("/stages/").await
    }

    pub async fn get(&self, id: i64) -> Result<Stage, ApiError> {
        self.client.get(&format!("/stages/{id}/")).await
    }

    pub async fn create(&self, payload: &StagePayload) -> Result<Stage, ApiError> {
        self.client.post("/stages/", payload).await
    }

    pub async fn update(&self, id: i64, payload: &StagePayload) -> Result<Stage, ApiError> {
        self.client.patch(&format!("/stages/{id}/"), payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/stages/{id}/")).await
    }
}
