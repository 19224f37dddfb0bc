//! Client-owned draft of the guest/guardian portion of a registration.

use crate::validate::{guardian_requirements, validate_guest_input, GuardianRequirements};
use profile_client::{Profile, RegistrationRequest};

/// Editable registration draft.
///
/// Valid only before a submission succeeds; once the server considers the
/// student registered the draft is only ever populated from stored profile
/// values for read-only display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    guest_count: Option<u8>,
    guest_error: Option<String>,
    guardian_1: String,
    guardian_2: String,
}

impl Draft {
    /// Populate a draft from a registered profile's stored values.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            guest_count: Some(profile.guest_count.unwrap_or(0)),
            guest_error: None,
            guardian_1: profile.guest_1_name.clone().unwrap_or_default(),
            guardian_2: profile.guest_2_name.clone().unwrap_or_default(),
        }
    }

    pub fn guest_count(&self) -> Option<u8> {
        self.guest_count
    }

    pub fn guest_error(&self) -> Option<&str> {
        self.guest_error.as_deref()
    }

    pub fn guardian_1(&self) -> &str {
        &self.guardian_1
    }

    pub fn guardian_2(&self) -> &str {
        &self.guardian_2
    }

    pub fn requirements(&self) -> GuardianRequirements {
        guardian_requirements(self.guest_count)
    }

    /// Apply a raw guest-count edit.
    ///
    /// Runs the validator, then clears any guardian field that is no longer
    /// required so stale hidden values cannot be submitted.
    pub fn set_guest_count(&mut self, raw: &str) {
        let input = validate_guest_input(raw);
        self.guest_count = input.value;
        self.guest_error = input.error;

        let required = self.requirements();
        if !required.guardian_1 {
            self.guardian_1.clear();
        }
        if !required.guardian_2 {
            self.guardian_2.clear();
        }
    }

    /// Set the first guardian name. Ignored while the field is not required.
    pub fn set_guardian_1(&mut self, name: &str) {
        if self.requirements().guardian_1 {
            self.guardian_1 = name.to_string();
        }
    }

    /// Set the second guardian name. Ignored while the field is not required.
    pub fn set_guardian_2(&mut self, name: &str) {
        if self.requirements().guardian_2 {
            self.guardian_2 = name.to_string();
        }
    }

    /// Whether every required guardian name is filled in.
    pub fn has_required_guardians(&self) -> bool {
        let required = self.requirements();
        (!required.guardian_1 || !self.guardian_1.trim().is_empty())
            && (!required.guardian_2 || !self.guardian_2.trim().is_empty())
    }

    /// Build the submission payload, or `None` while the draft is invalid.
    ///
    /// Guardian slots that are not required are omitted from the payload.
    pub fn to_request(&self) -> Option<RegistrationRequest> {
        let guest_count = self.guest_count?;
        if !self.has_required_guardians() {
            return None;
        }

        let required = self.requirements();
        Some(RegistrationRequest {
            guest_count,
            guest_1_name: required
                .guardian_1
                .then(|| self.guardian_1.trim().to_string()),
            guest_2_name: required
                .guardian_2
                .then(|| self.guardian_2.trim().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft_is_empty() {
        let draft = Draft::default();
        assert_eq!(draft.guest_count(), None);
        assert_eq!(draft.guest_error(), None);
        assert!(draft.guardian_1().is_empty());
        assert!(draft.guardian_2().is_empty());
        assert!(draft.to_request().is_none());
    }

    #[test]
    fn test_lowering_guest_count_clears_guardian_2() {
        let mut draft = Draft::default();
        draft.set_guest_count("2");
        draft.set_guardian_1("K. Varma");
        draft.set_guardian_2("S. Varma");

        draft.set_guest_count("1");

        assert_eq!(draft.guardian_1(), "K. Varma");
        assert_eq!(draft.guardian_2(), "");
    }

    #[test]
    fn test_clearing_guest_count_clears_both_guardians() {
        let mut draft = Draft::default();
        draft.set_guest_count("2");
        draft.set_guardian_1("K. Varma");
        draft.set_guardian_2("S. Varma");

        draft.set_guest_count("");

        assert!(draft.guardian_1().is_empty());
        assert!(draft.guardian_2().is_empty());
    }

    #[test]
    fn test_invalid_guest_count_clears_both_guardians() {
        let mut draft = Draft::default();
        draft.set_guest_count("2");
        draft.set_guardian_1("K. Varma");
        draft.set_guardian_2("S. Varma");

        draft.set_guest_count("3");

        assert_eq!(draft.guest_count(), None);
        assert!(draft.guest_error().is_some());
        assert!(draft.guardian_1().is_empty());
        assert!(draft.guardian_2().is_empty());
    }

    #[test]
    fn test_guardian_edits_ignored_while_hidden() {
        let mut draft = Draft::default();
        draft.set_guest_count("0");

        draft.set_guardian_1("K. Varma");
        draft.set_guardian_2("S. Varma");

        assert!(draft.guardian_1().is_empty());
        assert!(draft.guardian_2().is_empty());
    }

    #[test]
    fn test_to_request_with_zero_guests() {
        let mut draft = Draft::default();
        draft.set_guest_count("0");

        let request = draft.to_request().unwrap();
        assert_eq!(request.guest_count, 0);
        assert_eq!(request.guest_1_name, None);
        assert_eq!(request.guest_2_name, None);
    }

    #[test]
    fn test_to_request_requires_guardian_names() {
        let mut draft = Draft::default();
        draft.set_guest_count("2");
        assert!(draft.to_request().is_none());

        draft.set_guardian_1("K. Varma");
        assert!(draft.to_request().is_none());

        draft.set_guardian_2("S. Varma");
        let request = draft.to_request().unwrap();
        assert_eq!(request.guest_count, 2);
        assert_eq!(request.guest_1_name.as_deref(), Some("K. Varma"));
        assert_eq!(request.guest_2_name.as_deref(), Some("S. Varma"));
    }

    #[test]
    fn test_whitespace_guardian_name_is_not_filled() {
        let mut draft = Draft::default();
        draft.set_guest_count("1");
        draft.set_guardian_1("   ");

        assert!(!draft.has_required_guardians());
        assert!(draft.to_request().is_none());
    }

    #[test]
    fn test_from_profile_carries_stored_values() {
        let profile = Profile {
            name: "A".into(),
            email: "a@x.com".into(),
            roll_no: "1".into(),
            dept: "CS".into(),
            is_registered: true,
            guest_count: Some(2),
            guest_1_name: Some("K. Varma".into()),
            guest_2_name: Some("S. Varma".into()),
        };

        let draft = Draft::from_profile(&profile);
        assert_eq!(draft.guest_count(), Some(2));
        assert_eq!(draft.guardian_1(), "K. Varma");
        assert_eq!(draft.guardian_2(), "S. Varma");
    }

    #[test]
    fn test_from_profile_defaults_missing_guest_count_to_zero() {
        let profile = Profile {
            name: "A".into(),
            email: "a@x.com".into(),
            roll_no: "1".into(),
            dept: "CS".into(),
            is_registered: true,
            guest_count: None,
            guest_1_name: None,
            guest_2_name: None,
        };

        let draft = Draft::from_profile(&profile);
        assert_eq!(draft.guest_count(), Some(0));
    }
}
