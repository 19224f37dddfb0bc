//! Identity provider client for the convocation registration flow.
//!
//! Covers the surface the registration form consumes: OAuth authorize URL
//! building, refresh-token session establishment, current-session lookup
//! and sign-out. The OAuth handshake itself happens in the browser and is
//! out of scope here.

mod client;
mod error;
mod types;

pub use client::AuthClient;
pub use error::AuthError;
pub use types::*;
