//! Composition root for the CRM client
//!
//! Wires config → transport → auth → session store → API client → resource
//! services. Everything downstream receives its dependencies explicitly, so
//! tests can substitute the storage backend or point the whole client at a
//! mock server.

use std::sync::Arc;

use crate::api::{AccessTokenProvider, ApiClient, ApiError};
use crate::auth::{AuthApi, FileSessionStorage, SessionStore, SessionStorage};
use crate::config::ClientConfig;
use crate::http::HttpClient;
use crate::services::{
    CompaniesApi, ContactsApi, DealsApi, DocumentsApi, InteractionsApi, NdasApi, StagesApi,
    TasksApi,
};

/// Fully wired client: session store plus one service per resource
pub struct CrmClient {
    pub session: Arc<SessionStore>,
    pub deals: DealsApi,
    pub companies: CompaniesApi,
    pub contacts: ContactsApi,
    pub stages: StagesApi,
    pub tasks: TasksApi,
    pub interactions: InteractionsApi,
    pub documents: DocumentsApi,
    pub ndas: NdasApi,
}

impl CrmClient {
    /// Build a client from configuration with file-backed persistence.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the transport cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let storage = Arc::new(FileSessionStorage::new(&config.session_file));
        Self::with_storage(config, storage)
    }

    /// Build a client with a caller-provided storage backend.
    pub fn with_storage(
        config: ClientConfig,
        storage: Arc<dyn SessionStorage>,
    ) -> Result<Self, ApiError> {
        let http = HttpClient::builder().timeout(config.timeout).build()?;

        let auth = AuthApi::new(http.clone(), &config.auth_base_url, &config.api_base_url);
        let session = Arc::new(SessionStore::new(auth, storage));

        let provider: Arc<dyn AccessTokenProvider> = session.clone();
        let client = Arc::new(ApiClient::new(http, &config.api_base_url, provider));

        Ok(Self {
            session,
            deals: DealsApi::new(client.clone()),
            companies: CompaniesApi::new(client.clone()),
            contacts: ContactsApi::new(client.clone()),
            stages: StagesApi::new(client.clone()),
            tasks: TasksApi::new(client.clone()),
            interactions: InteractionsApi::new(client.clone()),
            documents: DocumentsApi::new(client.clone()),
            ndas: NdasApi::new(client),
        })
    }

    /// Restore a persisted session, if any. Should be called on startup.
    pub async fn initialize(&self) -> Result<bool, ApiError> {
        self.session.initialize().await
    }
}
