//! Profile Service client for convocation registration.

mod client;
mod error;
mod types;

pub use client::ProfileClient;
pub use error::ProfileError;
pub use types::*;
