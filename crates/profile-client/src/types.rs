//! Request and response types for the Profile Service.

use serde::{Deserialize, Serialize};

/// A student's profile as held by the Profile Service.
///
/// Read-only on the client. Older server revisions report guardian names
/// under `guardian1`/`guardian2`; the canonical fields are
/// `guest_1_name`/`guest_2_name`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub roll_no: String,
    #[serde(default)]
    pub dept: String,
    #[serde(default)]
    pub is_registered: bool,
    #[serde(default)]
    pub guest_count: Option<u8>,
    #[serde(default, alias = "guardian1")]
    pub guest_1_name: Option<String>,
    #[serde(default, alias = "guardian2")]
    pub guest_2_name: Option<String>,
}

impl Profile {
    /// Whether all identity fields required for registration are present.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.roll_no.is_empty()
            && !self.dept.is_empty()
    }
}

/// Registration submission payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegistrationRequest {
    pub guest_count: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_1_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_2_name: Option<String>,
}

/// Error body returned by the Profile Service on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
