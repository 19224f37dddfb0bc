//! Identity provider HTTP client with in-memory session state.

use crate::error::AuthError;
use crate::types::*;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// Identity provider client (GoTrue-style surface).
///
/// Holds the current session in memory; there is no on-disk persistence.
/// The project API key is stored using `SecretString` to prevent accidental
/// exposure in logs or debug output.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: String,
    anon_key: SecretString,
    session: Arc<RwLock<Option<Session>>>,
}

impl AuthClient {
    /// Create a new auth client.
    pub fn new(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            anon_key: SecretString::new(anon_key.into()),
            session: Arc::new(RwLock::new(None)),
        })
    }

    /// Build the browser URL for an OAuth sign-in with redirect.
    pub fn authorize_url(&self, provider: OAuthProvider, redirect_to: &str) -> String {
        format!(
            "{}/authorize?provider={}&redirect_to={}",
            self.base_url,
            provider.as_str(),
            encode(redirect_to)
        )
    }

    /// Exchange a refresh token for a fresh session and store it.
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let response = self
            .client
            .post(format!("{}/token?grant_type=refresh_token", self.base_url))
            .header("Content-Type", "application/json")
            .header("apikey", self.anon_key.expose_secret())
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AuthErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(AuthError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let token: TokenResponse = response.json().await?;
        let session = token.into_session();

        let mut guard = self.session.write().await;
        *guard = Some(session.clone());
        debug!("Session refreshed, expires at {}", session.expires_at);

        Ok(session)
    }

    /// Get the current session, if any.
    ///
    /// An expired session with a refresh token is renewed transparently;
    /// expiry without one, or a failed renewal, yields `None`.
    pub async fn current_session(&self) -> Option<Session> {
        let stored = {
            let guard = self.session.read().await;
            guard.clone()
        };

        let session = stored?;
        if !session.is_expired() {
            return Some(session);
        }

        let refresh_token = session.refresh_token?;
        match self.refresh_session(&refresh_token).await {
            Ok(renewed) => Some(renewed),
            Err(e) => {
                warn!("Session refresh failed: {}", e);
                let mut guard = self.session.write().await;
                *guard = None;
                None
            }
        }
    }

    /// Sign out: revoke the session server-side and drop local state.
    ///
    /// Local state is cleared even when the server call fails; the caller is
    /// signed out from this client's perspective either way.
    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let session = {
            let mut guard = self.session.write().await;
            guard.take()
        };

        let Some(session) = session else {
            return Err(AuthError::NoSession);
        };

        let response = self
            .client
            .post(format!("{}/logout", self.base_url))
            .header("apikey", self.anon_key.expose_secret())
            .header("Authorization", format!("Bearer {}", session.access_token))
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("Server-side logout failed with {}", response.status());
        }

        debug!("Signed out");
        Ok(())
    }

    /// Replace the stored session (e.g. after an external OAuth callback).
    pub async fn set_session(&self, session: Session) {
        let mut guard = self.session.write().await;
        *guard = Some(session);
    }
}
