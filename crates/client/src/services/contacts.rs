//! Contact service

use std::sync::Arc;

use dealflow_domain::{Contact, ContactPayload, Page};

use super::with_query;
use crate::api::{ApiClient, ApiError};

/// Typed wrapper over the contact endpoints
pub struct ContactsApi {
    client: Arc<ApiClient>,
}

impl ContactsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List contacts, optionally filtered (`company`, `search`, ...).
    pub async fn list(&self, params: &[(&str, &str)]) -> Result<Page<Contact>, ApiError> {
        self.client.get(&with_query("/contacts/", params)).await
    }

    pub async fn get(&self, id: i64) -> Result<Contact, ApiError> {
        self.client.get(&format!("/contacts/{id}/")).await
    }

    pub async fn create(&self, payload: &ContactPayload) -> Result<Contact, ApiError> {
        self.client.post("/contacts/", payload).await
    }

    pub async fn update(&self, id: i64, payload: &ContactPayload) -> Result<Contact, ApiError> {
        self.client.patch(&format!("/contacts/{id}/"), payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/contacts/{id}/")).await
    }
}
