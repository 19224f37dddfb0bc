//! Registration form controller.
//!
//! Owns the form state machine and centralizes every transition: the
//! original flow's scattered loading/submitting/registered flags collapse
//! into a single [`FormStatus`] value, and renderers consume one derived
//! [`FormView`] per update.

use crate::draft::Draft;
use crate::traits::{ProfileService, SessionProvider};
use crate::validate;
use crate::view::{FormMessage, FormView};
use profile_client::{Profile, ProfileError};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Banner shown when a registered profile's data is loaded read-only.
const DATA_LOADED_MESSAGE: &str = "Registration Data Loaded";

/// Form lifecycle state.
///
/// `Loading -> {Editable, Locked, Failed}`; `Editable -> Submitting`;
/// `Submitting -> {Locked, Editable}`. `Locked` and `Failed` are terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum FormStatus {
    Loading,
    Editable,
    Submitting,
    Locked,
    Failed(String),
}

/// Where the surrounding shell should navigate next.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    /// Back to the login page, optionally carrying an error to display.
    Login { error: Option<String> },
    /// Forward to the ticket/confirmation view.
    Ticket,
}

/// Orchestrates session check, profile fetch, edits, validation and submit.
pub struct FormController<S, P> {
    sessions: Arc<S>,
    profiles: Arc<P>,
    status: FormStatus,
    profile: Option<Profile>,
    draft: Draft,
    message: Option<FormMessage>,
}

impl<S, P> FormController<S, P>
where
    S: SessionProvider,
    P: ProfileService,
{
    pub fn new(sessions: Arc<S>, profiles: Arc<P>) -> Self {
        Self {
            sessions,
            profiles,
            status: FormStatus::Loading,
            profile: None,
            draft: Draft::default(),
            message: None,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Run the mount sequence: session check, then one profile fetch.
    ///
    /// Returns a navigation when the flow leaves this form: no session sends
    /// the user to login, and a fetch failure signs out and carries the
    /// server message to the login page.
    pub async fn load(&mut self) -> Option<Navigation> {
        let Some(session) = self.sessions.current_session().await else {
            debug!("No session at mount, redirecting to login");
            return Some(Navigation::Login { error: None });
        };

        match self.profiles.fetch_profile(&session.access_token).await {
            Ok(profile) => {
                if profile.is_registered {
                    self.draft = Draft::from_profile(&profile);
                    self.message = Some(FormMessage::info(DATA_LOADED_MESSAGE));
                    self.status = FormStatus::Locked;
                    info!("Profile already registered, form locked");
                } else {
                    self.draft = Draft::default();
                    self.status = FormStatus::Editable;
                    debug!("Profile loaded, form editable");
                }
                self.profile = Some(profile);
                None
            }
            Err(e) => {
                let message = service_message(&e);
                warn!("Profile fetch failed: {}", e);
                if let Err(e) = self.sessions.sign_out().await {
                    warn!("Sign-out after fetch failure also failed: {}", e);
                }
                self.status = FormStatus::Failed(message.clone());
                Some(Navigation::Login {
                    error: Some(message),
                })
            }
        }
    }

    /// Apply a raw guest-count edit. No-op unless the form is editable.
    pub fn set_guest_count(&mut self, raw: &str) {
        if self.status == FormStatus::Editable {
            self.draft.set_guest_count(raw);
        }
    }

    /// Set the first guardian name. No-op unless editable and visible.
    pub fn set_guardian_1(&mut self, name: &str) {
        if self.status == FormStatus::Editable {
            self.draft.set_guardian_1(name);
        }
    }

    /// Set the second guardian name. No-op unless editable and visible.
    pub fn set_guardian_2(&mut self, name: &str) {
        if self.status == FormStatus::Editable {
            self.draft.set_guardian_2(name);
        }
    }

    /// Whether the submit action is currently enabled.
    pub fn is_submittable(&self) -> bool {
        self.status == FormStatus::Editable
            && self
                .profile
                .as_ref()
                .is_some_and(|p| validate::is_submittable(p, &self.draft))
    }

    /// Attempt the submission.
    ///
    /// A no-op unless the form is editable and submittable, so re-entrant
    /// activations while a request is outstanding are ignored. The session
    /// is re-confirmed first since it may have expired since mount.
    pub async fn submit(&mut self) -> Option<Navigation> {
        if !self.is_submittable() {
            return None;
        }

        let Some(session) = self.sessions.current_session().await else {
            debug!("Session gone at submit, redirecting to login");
            return Some(Navigation::Login { error: None });
        };

        let request = self.draft.to_request()?;
        self.status = FormStatus::Submitting;
        self.message = None;

        match self
            .profiles
            .submit_registration(&session.access_token, request)
            .await
        {
            Ok(()) => {
                info!("Registration submitted");
                self.status = FormStatus::Locked;
                Some(Navigation::Ticket)
            }
            Err(ProfileError::AlreadyRegistered(message)) => {
                // Server-side conflict is informational, not an error.
                info!("Submit conflict: {}", message);
                if let Some(profile) = self.profile.as_mut() {
                    profile.is_registered = true;
                }
                self.message = Some(FormMessage::info(message));
                self.status = FormStatus::Locked;
                None
            }
            Err(e) => {
                warn!("Submit failed: {}", e);
                self.message = Some(FormMessage::error(service_message(&e)));
                self.status = FormStatus::Editable;
                None
            }
        }
    }

    /// Derive the render state for the current update.
    pub fn view(&self) -> FormView {
        let required = self.draft.requirements();
        let locked = self.status == FormStatus::Locked;
        let profile = self.profile.as_ref();

        let message = match &self.status {
            FormStatus::Failed(text) => Some(FormMessage::error(text.clone())),
            _ => self.message.clone(),
        };

        FormView {
            loading: self.status == FormStatus::Loading,
            submitting: self.status == FormStatus::Submitting,
            locked,
            full_name: profile.map(|p| p.name.clone()).unwrap_or_default(),
            department: profile.map(|p| p.dept.clone()).unwrap_or_default(),
            email: profile.map(|p| p.email.clone()).unwrap_or_default(),
            roll_number: profile.map(|p| p.roll_no.clone()).unwrap_or_default(),
            guest_count: self.draft.guest_count(),
            guest_error: self.draft.guest_error().map(String::from),
            guardian_1: (required.guardian_1 || (locked && !self.draft.guardian_1().is_empty()))
                .then(|| self.draft.guardian_1().to_string()),
            guardian_2: (required.guardian_2 || (locked && !self.draft.guardian_2().is_empty()))
                .then(|| self.draft.guardian_2().to_string()),
            message,
            submit_enabled: self.is_submittable(),
        }
    }
}

/// User-facing text for a Profile Service failure.
///
/// Server-provided messages are shown verbatim; transport failures get a
/// generic connectivity message.
fn service_message(error: &ProfileError) -> String {
    match error {
        ProfileError::Api { message, .. } => message.clone(),
        ProfileError::AlreadyRegistered(message) => message.clone(),
        ProfileError::Unauthorized => "Authentication failed. Please sign in again.".into(),
        ProfileError::Http(_) | ProfileError::Json(_) => {
            "Could not reach the registration service. Please try again.".into()
        }
    }
}
