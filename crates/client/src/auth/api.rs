//! Auth endpoint client
//!
//! The two authentication calls live on their own base URL and never carry
//! a stored bearer token. `get_current_user` hits the resource API but
//! takes its token explicitly because it runs during login, before the
//! session store is populated.

use dealflow_domain::User;
use reqwest::Method;
use serde_json::json;
use tracing::debug;

use super::types::{Credentials, RefreshResponse, TokenPair};
use crate::api::{classify, ApiError};
use crate::http::HttpClient;

/// Client for the authentication endpoints
pub struct AuthApi {
    http: HttpClient,
    auth_base_url: String,
    api_base_url: String,
}

impl AuthApi {
    /// Create a new auth client.
    ///
    /// # Arguments
    ///
    /// * `http` - Transport to issue requests with
    /// * `auth_base_url` - Auth base URL (e.g. "http://localhost:8000/auth")
    /// * `api_base_url` - Resource API base URL, used only for the
    ///   current-user fetch
    pub fn new(
        http: HttpClient,
        auth_base_url: impl Into<String>,
        api_base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            auth_base_url: auth_base_url.into().trim_end_matches('/').to_string(),
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Exchange credentials for a token pair.
    ///
    /// # Errors
    /// Rejected credentials surface as the generic request failure with the
    /// backend's message.
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        let url = format!("{}/login/", self.auth_base_url);
        debug!(email = %credentials.email, "submitting login");

        let request = self
            .http
            .request(Method::POST, &url)
            .header("Content-Type", "application/json")
            .json(credentials);

        let response = self.http.send(request).await?;
        classify(response).await
    }

    /// Exchange a refresh token for a new access token.
    ///
    /// # Errors
    /// An invalid or expired refresh token surfaces as the same generic
    /// request failure as any rejected call.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, ApiError> {
        let url = format!("{}/refresh/", self.auth_base_url);
        debug!("exchanging refresh token");

        let request = self
            .http
            .request(Method::POST, &url)
            .header("Content-Type", "application/json")
            .json(&json!({ "refresh": refresh_token }));

        let response = self.http.send(request).await?;
        classify(response).await
    }

    /// Fetch the authenticated profile with an explicitly supplied token.
    pub async fn get_current_user(&self, access_token: &str) -> Result<User, ApiError> {
        let url = format!("{}/users/me/", self.api_base_url);
        debug!("fetching current user");

        let request = self
            .http
            .request(Method::GET, &url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {access_token}"));

        let response = self.http.send(request).await?;
        classify(response).await
    }
}
