//! Injected dependency seams for the form controller.
//!
//! The controller talks to the identity provider and the Profile Service
//! only through these traits, so it is testable without a live network.

use async_trait::async_trait;
use auth_client::{AuthClient, AuthError, Session};
use profile_client::{Profile, ProfileClient, ProfileError, RegistrationRequest};

/// Session surface consumed by the form.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Current session, if one is held and still valid.
    async fn current_session(&self) -> Option<Session>;

    /// Sign out, dropping the session.
    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// Profile Service surface consumed by the form.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Fetch the caller's profile and registration status.
    async fn fetch_profile(&self, access_token: &str) -> Result<Profile, ProfileError>;

    /// Submit a registration.
    async fn submit_registration(
        &self,
        access_token: &str,
        request: RegistrationRequest,
    ) -> Result<(), ProfileError>;
}

#[async_trait]
impl SessionProvider for AuthClient {
    async fn current_session(&self) -> Option<Session> {
        AuthClient::current_session(self).await
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        AuthClient::sign_out(self).await
    }
}

#[async_trait]
impl ProfileService for ProfileClient {
    async fn fetch_profile(&self, access_token: &str) -> Result<Profile, ProfileError> {
        ProfileClient::fetch_profile(self, access_token).await
    }

    async fn submit_registration(
        &self,
        access_token: &str,
        request: RegistrationRequest,
    ) -> Result<(), ProfileError> {
        ProfileClient::submit_registration(self, access_token, &request).await
    }
}
