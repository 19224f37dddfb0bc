//! Profile Service client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("Already registered: {0}")]
    AlreadyRegistered(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}
