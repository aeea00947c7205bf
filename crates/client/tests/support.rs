//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use dealflow_client::{
    ClientConfig, CrmClient, MemorySessionStorage, Session, SessionStorage, TokenPair,
};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client pointed at the mock server, with in-memory persistence.
pub fn client_for(server: &MockServer) -> (CrmClient, Arc<MemorySessionStorage>) {
    let storage = Arc::new(MemorySessionStorage::new());
    let config = config_for(server, ClientConfig::default().session_file);
    let client = CrmClient::with_storage(config, storage.clone()).expect("client");
    (client, storage)
}

/// Configuration pointing both base URLs at the mock server.
pub fn config_for(server: &MockServer, session_file: impl AsRef<Path>) -> ClientConfig {
    ClientConfig {
        api_base_url: format!("{}/api/v1", server.uri()),
        auth_base_url: format!("{}/auth", server.uri()),
        session_file: session_file.as_ref().to_path_buf(),
        ..ClientConfig::default()
    }
}

/// Seed the storage with an authenticated session; call `initialize` on the
/// client afterwards to pick it up.
pub async fn seed_session(storage: &MemorySessionStorage, access: &str, refresh: &str) {
    let user = serde_json::from_value(user_json()).expect("user fixture");
    let session = Session::authenticated(
        user,
        TokenPair { access: access.to_string(), refresh: refresh.to_string() },
    );
    storage.save(&session).await.expect("seed session");
}

/// Mount the login and current-user endpoints for a successful login.
pub async fn mount_login_flow(server: &MockServer, access: &str, refresh: &str) {
    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access": access, "refresh": refresh })),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/me/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(server)
        .await;
}

/// Opt-in tracing output for debugging a test run.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_env_filter("dealflow_client=debug").try_init();
}

/// Canonical user payload served by `GET /users/me/`.
pub fn user_json() -> Value {
    json!({
        "id": 1,
        "email": "ana@fund.com",
        "username": "ana",
        "first_name": "Ana",
        "last_name": "Diaz",
        "full_name": "Ana Diaz",
        "role": "associate",
        "phone": null,
        "is_active": true,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

/// Minimal deal payload with every required field.
pub fn deal_json(id: i64, stage: i64) -> Value {
    json!({
        "id": id,
        "title": "Project Atlas",
        "company": 7,
        "company_name": "Acme Holdings",
        "owner": 1,
        "owner_name": "Ana Diaz",
        "stage": stage,
        "stage_name": "Due Diligence",
        "amount_estimate": 1500000.0,
        "probability": 40.0,
        "expected_value": 600000.0,
        "next_action_at": null,
        "is_overdue": false,
        "description": null,
        "created_at": "2024-01-10T12:00:00Z",
        "updated_at": "2024-03-02T08:30:00Z"
    })
}

pub fn task_json(id: i64) -> Value {
    json!({
        "id": id,
        "deal": 42,
        "deal_title": "Project Atlas",
        "title": "Send revised LOI",
        "description": null,
        "due_at": "2024-04-01T09:00:00Z",
        "status": "todo",
        "assignee": 1,
        "assignee_name": "Ana Diaz",
        "created_by": 2,
        "created_by_name": "Lee Wong",
        "is_overdue": false,
        "created_at": "2024-03-01T00:00:00Z",
        "updated_at": "2024-03-01T00:00:00Z"
    })
}

pub fn document_json(id: i64) -> Value {
    json!({
        "id": id,
        "deal": 42,
        "deal_title": "Project Atlas",
        "filename": "nda.pdf",
        "file": "/media/documents/nda.pdf",
        "file_url": "http://localhost:8000/media/documents/nda.pdf",
        "size": 1024,
        "size_human": "1.0 KB",
        "content_type": "application/pdf",
        "file_extension": "pdf",
        "uploaded_by": 1,
        "uploaded_by_name": "Ana Diaz",
        "uploaded_at": "2024-03-05T10:00:00Z"
    })
}
