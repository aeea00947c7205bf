//! Document service

use std::sync::Arc;

use dealflow_domain::{Document, Page};

use super::with_query;
use crate::api::{ApiClient, ApiError, UploadForm};

/// Typed wrapper over the document endpoints
pub struct DocumentsApi {
    client: Arc<ApiClient>,
}

impl DocumentsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List documents, optionally filtered (`deal`, `search`, ...).
    pub async fn list(&self, params: &[(&str, &str)]) -> Result<Page<Document>, ApiError> {
        self.client.get(&with_query("/documents/", params)).await
    }

    pub async fn get(&self, id: i64) -> Result<Document, ApiError> {
        self.client.get(&format!("/documents/{id}/")).await
    }

    /// Upload a file, optionally attached to a deal.
    ///
    /// Multipart with a `file` part and, when given, a `deal` part; the
    /// transport sets the boundary content-type.
    pub async fn upload(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        deal: Option<i64>,
    ) -> Result<Document, ApiError> {
        let mut form = UploadForm::new().file("file", filename, bytes);
        if let Some(deal) = deal {
            form = form.text("deal", deal.to_string());
        }
        self.client.upload("/documents/upload/", form).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/documents/{id}/")).await
    }
}
