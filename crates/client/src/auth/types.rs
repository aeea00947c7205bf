//! Session and credential types

use dealflow_domain::User;
use serde::{Deserialize, Serialize};

/// Login credentials submitted to the auth endpoint
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

/// Access/refresh token pair issued on login
///
/// Both tokens are present or the session holds no pair at all; partial
/// pairs are never stored or persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived bearer credential for resource API calls
    pub access: String,
    /// Longer-lived credential exchanged for new access tokens
    pub refresh: String,
}

/// Response of the refresh endpoint: a new access token only, the refresh
/// token stays in place
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

/// Current user and token pair; exactly this record is persisted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub tokens: Option<TokenPair>,
}

impl Session {
    /// An authenticated session; `user` and `tokens` are set together.
    pub fn authenticated(user: User, tokens: TokenPair) -> Self {
        Self { user: Some(user), tokens: Some(tokens) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_some()
    }

    /// Drop user and tokens together.
    pub fn clear(&mut self) {
        self.user = None;
        self.tokens = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_session_drops_both_fields() {
        let mut session = Session {
            user: None,
            tokens: Some(TokenPair { access: "a".to_string(), refresh: "r".to_string() }),
        };

        session.clear();

        assert!(session.user.is_none());
        assert!(session.tokens.is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn empty_session_deserializes_from_empty_object() {
        let session: Session = serde_json::from_str("{}").unwrap();
        assert_eq!(session, Session::default());
    }
}
