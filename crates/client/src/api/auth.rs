//! Token access for the API client
//!
//! The API client never owns tokens; it reads them through this trait so the
//! session store (or a test fake) can be injected at construction time.

use async_trait::async_trait;

use super::errors::ApiError;

/// Trait for providing access tokens to the API client.
///
/// `access_token` is a snapshot read: a token fetched at the start of a
/// request is used for that attempt's whole lifetime, even if a concurrent
/// refresh lands meanwhile. `refresh` is invoked by the client after an
/// observed 401 so the request can be replayed once with a fresh token.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Current access token, or `None` when unauthenticated.
    async fn access_token(&self) -> Option<String>;

    /// Obtain a fresh access token after an authorization failure.
    ///
    /// # Errors
    /// Returns an error when no refresh token is held or the refresh call
    /// itself is rejected.
    async fn refresh(&self) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticProvider {
        token: Option<String>,
    }

    #[async_trait]
    impl AccessTokenProvider for StaticProvider {
        async fn access_token(&self) -> Option<String> {
            self.token.clone()
        }

        async fn refresh(&self) -> Result<(), ApiError> {
            Err(ApiError::NoRefreshToken)
        }
    }

    #[tokio::test]
    async fn static_provider_returns_its_token() {
        let provider = StaticProvider { token: Some("t".to_string()) };
        assert_eq!(provider.access_token().await.as_deref(), Some("t"));

        let anonymous = StaticProvider { token: None };
        assert!(anonymous.access_token().await.is_none());
    }
}
