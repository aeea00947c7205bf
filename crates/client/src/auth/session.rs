//! Session store
//!
//! Single source of truth for the authenticated session:
//! - State lives behind a tokio `RwLock`; reads are snapshots
//! - Every mutating operation writes through to storage, so a restart
//!   restores the same user/token pair
//! - Concurrent refreshes are coalesced: callers serialize on a gate and a
//!   waiter that finds the token already rotated skips its own network call

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dealflow_domain::User;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use super::api::AuthApi;
use super::storage::SessionStorage;
use super::types::{Credentials, Session, TokenPair};
use crate::api::{AccessTokenProvider, ApiError};

/// Holder of the current session and its lifecycle operations
pub struct SessionStore {
    auth: AuthApi,
    storage: Arc<dyn SessionStorage>,
    session: RwLock<Session>,
    loading: AtomicBool,
    refresh_gate: Mutex<()>,
}

impl SessionStore {
    pub fn new(auth: AuthApi, storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            auth,
            storage,
            session: RwLock::new(Session::default()),
            loading: AtomicBool::new(false),
            refresh_gate: Mutex::new(()),
        }
    }

    /// Restore the persisted session on startup.
    ///
    /// Returns whether a session was restored. An unreadable or corrupt
    /// record is treated as no session rather than an error.
    pub async fn initialize(&self) -> Result<bool, ApiError> {
        match self.storage.load().await {
            Ok(Some(session)) if session.is_authenticated() => {
                *self.session.write().await = session;
                info!("session restored from storage");
                Ok(true)
            }
            Ok(_) => {
                debug!("no persisted session found");
                Ok(false)
            }
            Err(err) => {
                warn!(error = %err, "failed to load persisted session");
                Ok(false)
            }
        }
    }

    /// Log in and populate the session.
    ///
    /// Obtains a token pair, fetches the profile with the fresh access
    /// token, then commits both together. The loading flag is set for the
    /// whole operation and cleared on either outcome.
    ///
    /// # Errors
    /// On any failure the session is left untouched and the error
    /// propagates.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.loading.store(true, Ordering::SeqCst);
        let result = self.login_inner(credentials).await;
        self.loading.store(false, Ordering::SeqCst);
        result
    }

    async fn login_inner(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let tokens = self.auth.login(credentials).await?;
        // The store is not yet populated, so the profile fetch carries the
        // fresh token explicitly.
        let user = self.auth.get_current_user(&tokens.access).await?;

        let session = Session::authenticated(user, tokens);
        self.storage.save(&session).await?;
        *self.session.write().await = session;

        info!("login succeeded");
        Ok(())
    }

    /// Clear the session. Never issues a network call and is idempotent.
    ///
    /// The in-memory session is dropped unconditionally before storage is
    /// touched, so a storage failure still leaves the process logged out.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.session.write().await.clear();
        self.storage.clear().await?;
        info!("logged out");
        Ok(())
    }

    /// Exchange the held refresh token for a new access token.
    ///
    /// On success only `tokens.access` changes; the user and refresh token
    /// stay in place. On a rejected refresh the entire session is cleared
    /// (memory and storage) before the error re-propagates, forcing a
    /// re-login.
    ///
    /// # Errors
    /// Returns `ApiError::NoRefreshToken` when unauthenticated, or the
    /// refresh call's own failure.
    pub async fn refresh_token(&self) -> Result<(), ApiError> {
        let seen = self
            .session
            .read()
            .await
            .tokens
            .clone()
            .ok_or(ApiError::NoRefreshToken)?;

        let _gate = self.refresh_gate.lock().await;

        // A concurrent caller may have finished rotating the pair while this
        // one waited on the gate.
        match self.session.read().await.tokens.as_ref() {
            None => return Err(ApiError::NoRefreshToken),
            Some(current) if current.access != seen.access => {
                debug!("access token already rotated by a concurrent refresh");
                return Ok(());
            }
            Some(_) => {}
        }

        match self.auth.refresh(&seen.refresh).await {
            Ok(response) => {
                let updated = {
                    let session = self.session.read().await;
                    let mut updated = session.clone();
                    match updated.tokens.as_mut() {
                        Some(tokens) => tokens.access = response.access,
                        None => return Err(ApiError::NotAuthenticated),
                    }
                    updated
                };

                self.storage.save(&updated).await?;
                *self.session.write().await = updated;

                info!("access token refreshed");
                Ok(())
            }
            Err(err) => {
                // An expired refresh token means the user must log in again.
                warn!(error = %err, "token refresh failed, clearing session");
                self.session.write().await.clear();
                if let Err(storage_err) = self.storage.clear().await {
                    warn!(error = %storage_err, "failed to clear persisted session");
                }
                Err(err)
            }
        }
    }

    /// Replace the user profile after an out-of-band refetch.
    ///
    /// # Errors
    /// Returns `ApiError::NotAuthenticated` when no session is held, since
    /// a user without tokens would violate the session invariant.
    pub async fn set_user(&self, user: User) -> Result<(), ApiError> {
        let updated = {
            let session = self.session.read().await;
            if !session.is_authenticated() {
                return Err(ApiError::NotAuthenticated);
            }
            let mut updated = session.clone();
            updated.user = Some(user);
            updated
        };

        self.storage.save(&updated).await?;
        *self.session.write().await = updated;
        Ok(())
    }

    pub async fn current_user(&self) -> Option<User> {
        self.session.read().await.user.clone()
    }

    pub async fn tokens(&self) -> Option<TokenPair> {
        self.session.read().await.tokens.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    /// Whether a login is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccessTokenProvider for SessionStore {
    async fn access_token(&self) -> Option<String> {
        self.session.read().await.tokens.as_ref().map(|tokens| tokens.access.clone())
    }

    async fn refresh(&self) -> Result<(), ApiError> {
        self.refresh_token().await
    }
}
