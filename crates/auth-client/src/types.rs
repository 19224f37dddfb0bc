//! Session and identity types.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// OAuth provider selector for the authorize URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
}

impl OAuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
        }
    }
}

/// The authenticated user attached to a session.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// An authenticated session issued by the identity provider.
///
/// The access token is bearer-presented on protected calls; the refresh
/// token, when held, allows transparent renewal after expiry.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub user: AuthUser,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Token endpoint response for the refresh-token grant.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Lifetime of the access token in seconds.
    pub expires_in: i64,
    pub user: AuthUser,
}

impl TokenResponse {
    /// Convert to a session, stamping the expiry from the current time.
    pub fn into_session(self) -> Session {
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at: Utc::now() + Duration::seconds(self.expires_in),
            user: self.user,
        }
    }
}

/// Error body returned by the identity provider.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthErrorBody {
    #[serde(alias = "error_description", alias = "msg")]
    pub error: String,
}
