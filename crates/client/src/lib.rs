//! # Dealflow Client
//!
//! Authenticated access layer for the Dealflow CRM REST API.
//!
//! This crate contains:
//! - HTTP transport wrapper (`http`)
//! - Auth service, session store, and session persistence (`auth`)
//! - API client with bearer-token handling and response classification
//!   (`api`)
//! - Typed resource services, one per CRM entity (`services`)
//!
//! ## Architecture
//!
//! ```text
//! CrmClient                          (composition root)
//!   ├──► SessionStore ──► AuthApi         ──► auth endpoints
//!   │         └────────► SessionStorage   (file-backed or in-memory)
//!   └──► resource services ──► ApiClient  ──► resource API
//!                  (token via AccessTokenProvider = the session store)
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod crm;
pub mod http;
pub mod services;

// Re-export commonly used items
pub use api::{AccessTokenProvider, ApiClient, ApiError, UploadForm};
pub use auth::{
    AuthApi, Credentials, FileSessionStorage, MemorySessionStorage, RefreshResponse, Session,
    SessionStorage, SessionStore, TokenPair,
};
pub use config::ClientConfig;
pub use crm::CrmClient;
pub use http::{HttpClient, HttpClientBuilder};
pub use services::{
    CompaniesApi, ContactsApi, DealsApi, DocumentsApi, InteractionsApi, NdasApi, StagesApi,
    TasksApi,
};
