//! Task service

use std::sync::Arc;

use dealflow_domain::{Page, Task, TaskPayload};

use super::with_query;
use crate::api::{ApiClient, ApiError};

/// Typed wrapper over the task endpoints
pub struct TasksApi {
    client: Arc<ApiClient>,
}

impl TasksApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List tasks, optionally filtered (`deal`, `status`, ...).
    pub async fn list(&self, params: &[(&str, &str)]) -> Result<Page<Task>, ApiError> {
        self.client.get(&with_query("/tasks/", params)).await
    }

    pub async fn get(&self, id: i64) -> Result<Task, ApiError> {
        self.client.get(&format!("/tasks/{id}/")).await
    }

    pub async fn create(&self, payload: &TaskPayload) -> Result<Task, ApiError> {
        self.client.post("/tasks/", payload).await
    }

    pub async fn update(&self, id: i64, payload: &TaskPayload) -> Result<Task, ApiError> {
        self.client.patch(&format!("/tasks/{id}/"), payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/tasks/{id}/")).await
    }

    /// Tasks assigned to the authenticated user.
    pub async fn my_tasks(&self) -> Result<Page<Task>, ApiError> {
        self.client.get("/tasks/my_tasks/").await
    }
}
