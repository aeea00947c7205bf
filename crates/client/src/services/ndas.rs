//! NDA service

use std::sync::Arc;

use dealflow_domain::{Nda, NdaPayload, Page};

use super::with_query;
use crate::api::{ApiClient, ApiError};

/// Typed wrapper over the NDA endpoints
pub struct NdasApi {
    client: Arc<ApiClient>,
}

impl NdasApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List NDAs, optionally filtered (`deal`, `status`, ...).
    pub async fn list(&self, params: &[(&str, &str)]) -> Result<Page<Nda>, ApiError> {
        self.client.get(&with_query("/ndas/", params)).await
    }

    pub async fn get(&self, id: i64) -> Result<Nda, ApiError> {
        self.client.get(&format!("/ndas/{id}/")).await
    }

    pub async fn create(&self, payload: &NdaPayload) -> Result<Nda, ApiError> {
        self.client.post("/ndas/", payload).await
    }

    pub async fn update(&self, id: i64, payload: &NdaPayload) -> Result<Nda, ApiError> {
        self.client.patch(&format!("/ndas/{id}/"), payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/ndas/{id}/")).await
    }
}
