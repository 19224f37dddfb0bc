//! Profile Service HTTP client.

use crate::error::ProfileError;
use crate::types::*;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Maximum number of characters of a response body echoed to debug logs.
const LOG_PREVIEW_CHARS: usize = 200;

/// Truncate a response body for debug logging.
///
/// Counts characters rather than bytes so the cut never lands inside a
/// multibyte UTF-8 sequence.
fn log_preview(body: &str) -> &str {
    match body.char_indices().nth(LOG_PREVIEW_CHARS) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

/// Profile Service client.
///
/// Calls the registration edge functions with the project API key and the
/// caller's bearer token. The API key is stored using `SecretString` to
/// prevent accidental exposure in logs or debug output.
#[derive(Clone)]
pub struct ProfileClient {
    client: Client,
    base_url: String,
    anon_key: SecretString,
}

impl ProfileClient {
    /// Create a new Profile Service client.
    pub fn new(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProfileError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            anon_key: SecretString::new(anon_key.into()),
        })
    }

    /// Fetch the caller's profile and registration status.
    #[instrument(skip(self, access_token))]
    pub async fn fetch_profile(&self, access_token: &str) -> Result<Profile, ProfileError> {
        let response = self
            .client
            .post(format!("{}/get-student-info-by-auth", self.base_url))
            .header("Content-Type", "application/json")
            .header("apikey", self.anon_key.expose_secret())
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            debug!("Profile response: {}", log_preview(&body));
            serde_json::from_str(&body).map_err(ProfileError::from)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Submit a registration.
    ///
    /// A 409 response means the identity is already registered server-side
    /// and is reported as `AlreadyRegistered` rather than a plain API error.
    #[instrument(skip(self, access_token, request), fields(guest_count = request.guest_count))]
    pub async fn submit_registration(
        &self,
        access_token: &str,
        request: &RegistrationRequest,
    ) -> Result<(), ProfileError> {
        let response = self
            .client
            .post(format!("{}/register-student-by-auth", self.base_url))
            .header("Content-Type", "application/json")
            .header("apikey", self.anon_key.expose_secret())
            .header("Authorization", format!("Bearer {}", access_token))
            .json(request)
            .send()
            .await?;

        if response.status().is_success() {
            debug!("Registration accepted");
            return Ok(());
        }

        Err(self.extract_error(response).await)
    }

    /// Extract error information from a failed response.
    ///
    /// The service reports failures as `{ "error": string }` but may fall
    /// back to plain text; both are handled.
    async fn extract_error(&self, response: reqwest::Response) -> ProfileError {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!("Authentication failed");
            return ProfileError::Unauthorized;
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| {
                if body.is_empty() {
                    "Unknown error".into()
                } else {
                    body
                }
            });

        if status == StatusCode::CONFLICT {
            return ProfileError::AlreadyRegistered(message);
        }

        ProfileError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_preview_short_body_is_unchanged() {
        assert_eq!(log_preview("{}"), "{}");
        assert_eq!(log_preview(""), "");
    }

    #[test]
    fn test_log_preview_truncates_long_ascii_body() {
        let body = "x".repeat(500);
        let preview = log_preview(&body);
        assert_eq!(preview.len(), 200);
    }

    #[test]
    fn test_log_preview_never_splits_a_multibyte_character() {
        // Byte 200 falls inside a three-byte Malayalam vowel sign; a byte
        // slice at that offset would panic.
        let body = format!("{}{}", "x".repeat(199), "\u{d3e}".repeat(4));
        assert!(!body.is_char_boundary(200));

        let preview = log_preview(&body);
        assert_eq!(preview.chars().count(), 200);
        assert!(body.is_char_boundary(preview.len()));
        assert!(preview.ends_with('\u{d3e}'));
    }
}
