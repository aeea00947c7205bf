//! Interaction log service

use std::sync::Arc;

use dealflow_domain::{Interaction, InteractionPayload, Page};

use super::with_query;
use crate::api::{ApiClient, ApiError};

/// Typed wrapper over the interaction endpoints
pub struct InteractionsApi {
    client: Arc<ApiClient>,
}

impl InteractionsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List interactions, optionally filtered (`deal`, `company`, ...).
    pub async fn list(&self, params: &[(&str, &str)]) -> Result<Page<Interaction>, ApiError> {
        self.client.get(&with_query("/interactions/", params)).await
    }

    pub async fn get(&self, id: i64) -> Result<Interaction, ApiError> {
        self.client.get(&format!("/interactions/{id}/")).await
    }

    pub async fn create(&self, payload: &InteractionPayload) -> Result<Interaction, ApiError> {
        self.client.post("/interactions/", payload).await
    }

    pub async fn update(
        &self,
        id: i64,
        payload: &InteractionPayload,
    ) -> Result<Interaction, ApiError> {
        self.client.patch(&format!("/interactions/{id}/"), payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/interactions/{id}/")).await
    }
}
