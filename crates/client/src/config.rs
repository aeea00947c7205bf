//! Client configuration
//!
//! Base URLs and transport settings, loaded from the environment with
//! defaults applied.
//!
//! ## Environment Variables
//! - `DEALFLOW_API_URL`: resource API base URL
//! - `DEALFLOW_AUTH_URL`: auth endpoint base URL
//! - `DEALFLOW_HTTP_TIMEOUT_SECS`: request timeout in seconds
//! - `DEALFLOW_SESSION_FILE`: path of the persisted session record

use std::path::PathBuf;
use std::time::Duration;

use crate::api::ApiError;

/// Default resource API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";
/// Default auth endpoint base URL
pub const DEFAULT_AUTH_URL: &str = "http://localhost:8000/auth";
/// Default persisted session file
pub const DEFAULT_SESSION_FILE: &str = "dealflow-session.json";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the CRM client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the resource API (e.g. "http://localhost:8000/api/v1")
    pub api_base_url: String,
    /// Base URL for the auth endpoints (e.g. "http://localhost:8000/auth")
    pub auth_base_url: String,
    /// Timeout applied to every request
    pub timeout: Duration,
    /// Path of the persisted session record
    pub session_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            auth_base_url: DEFAULT_AUTH_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, applying defaults for
    /// anything unset. A `.env` file is honored when present.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if a set variable has an invalid value.
    pub fn from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();

        let timeout = match std::env::var("DEALFLOW_HTTP_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|err| {
                    ApiError::Config(format!("invalid DEALFLOW_HTTP_TIMEOUT_SECS: {err}"))
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_base_url: env_or("DEALFLOW_API_URL", DEFAULT_API_URL),
            auth_base_url: env_or("DEALFLOW_AUTH_URL", DEFAULT_AUTH_URL),
            timeout,
            session_file: PathBuf::from(env_or("DEALFLOW_SESSION_FILE", DEFAULT_SESSION_FILE)),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
