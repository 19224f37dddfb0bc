//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Auth error: {0}")]
    Auth(#[from] auth_client::AuthError),

    #[error("Profile service error: {0}")]
    Profile(#[from] profile_client::ProfileError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
