//! Company service

use std::sync::Arc;

use dealflow_domain::{Company, CompanyPayload, Page};

use super::with_query;
use crate::api::{ApiClient, ApiError};

/// Typed wrapper over the company endpoints
pub struct CompaniesApi {
    client: Arc<ApiClient>,
}

impl CompaniesApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List companies, optionally filtered (`search`, `sector`, ...).
    pub async fn list(&self, params: &[(&str, &str)]) -> Result<Page<Company>, ApiError> {
        self.client.get(&with_query("/companies/", params)).await
    }

    pub async fn get(&self, id: i64) -> Result<Company, ApiError> {
        self.client.get(&format!("/companies/{id}/")).await
    }

    pub async fn create(&self, payload: &CompanyPayload) -> Result<Company, ApiError> {
        self.client.post("/companies/", payload).await
    }

    pub async fn update(&self, id: i64, payload: &CompanyPayload) -> Result<Company, ApiError> {
        self.client.patch(&format!("/companies/{id}/"), payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/companies/{id}/")).await
    }
}
