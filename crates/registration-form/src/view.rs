//! Render state derived from the controller.

/// How a form-level message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTone {
    /// Informational banner (e.g. "already registered").
    Info,
    /// Error banner; the action that caused it may be retried.
    Error,
}

/// A form-level banner message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub text: String,
    pub tone: MessageTone,
}

impl FormMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: MessageTone::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: MessageTone::Error,
        }
    }
}

/// Everything a renderer needs, derived once per update.
///
/// Guardian fields are `None` while hidden; `Some(value)` while visible.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub loading: bool,
    pub submitting: bool,
    pub locked: bool,
    pub full_name: String,
    pub department: String,
    pub email: String,
    pub roll_number: String,
    pub guest_count: Option<u8>,
    pub guest_error: Option<String>,
    pub guardian_1: Option<String>,
    pub guardian_2: Option<String>,
    pub message: Option<FormMessage>,
    pub submit_enabled: bool,
}
