//! Guest-count and guardian-requirement validation.

use crate::draft::Draft;
use profile_client::Profile;

/// Canonical upper bound on the guest count.
pub const MAX_GUESTS: u8 = 2;

/// Inline error shown for an out-of-range guest count.
pub const GUEST_RANGE_MESSAGE: &str = "Number of guests must be between 0 and 2.";

/// Outcome of sanitizing a raw guest-count keystroke string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestInput {
    pub value: Option<u8>,
    pub error: Option<String>,
}

/// Translate raw input into a validated guest count.
///
/// Strips non-digit characters and truncates to a single digit before
/// parsing. Empty input is not an error (but is not submittable either);
/// a digit above [`MAX_GUESTS`] yields no value and the canonical message.
pub fn validate_guest_input(raw: &str) -> GuestInput {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(1).collect();

    if digits.is_empty() {
        return GuestInput {
            value: None,
            error: None,
        };
    }

    // A single ASCII digit always parses.
    let count: u8 = digits.parse().unwrap_or(0);

    if count > MAX_GUESTS {
        return GuestInput {
            value: None,
            error: Some(GUEST_RANGE_MESSAGE.into()),
        };
    }

    GuestInput {
        value: Some(count),
        error: None,
    }
}

/// Which guardian-name fields a given guest count requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuardianRequirements {
    pub guardian_1: bool,
    pub guardian_2: bool,
}

/// Derive guardian-field visibility from the guest count.
pub fn guardian_requirements(guest_count: Option<u8>) -> GuardianRequirements {
    match guest_count {
        Some(1) => GuardianRequirements {
            guardian_1: true,
            guardian_2: false,
        },
        Some(2) => GuardianRequirements {
            guardian_1: true,
            guardian_2: true,
        },
        _ => GuardianRequirements::default(),
    }
}

/// Whether the registration can be submitted.
///
/// Requires a complete profile, a valid guest count, every required
/// guardian name, and an unregistered profile. The controller additionally
/// gates on the form being editable (not loading or submitting).
pub fn is_submittable(profile: &Profile, draft: &Draft) -> bool {
    profile.is_complete()
        && !profile.is_registered
        && draft.guest_count().is_some()
        && draft.has_required_guardians()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_not_an_error() {
        let input = validate_guest_input("");
        assert_eq!(input.value, None);
        assert_eq!(input.error, None);
    }

    #[test]
    fn test_valid_digits() {
        for raw in ["0", "1", "2"] {
            let input = validate_guest_input(raw);
            assert_eq!(input.value, Some(raw.parse().unwrap()));
            assert_eq!(input.error, None);
        }
    }

    #[test]
    fn test_out_of_range_digit() {
        for raw in ["3", "4", "9"] {
            let input = validate_guest_input(raw);
            assert_eq!(input.value, None);
            assert_eq!(input.error.as_deref(), Some(GUEST_RANGE_MESSAGE));
        }
    }

    #[test]
    fn test_non_digit_characters_are_stripped() {
        let input = validate_guest_input("abc");
        assert_eq!(input.value, None);
        assert_eq!(input.error, None);

        let input = validate_guest_input("a2b");
        assert_eq!(input.value, Some(2));
        assert_eq!(input.error, None);
    }

    #[test]
    fn test_truncates_to_first_digit() {
        // "12" truncates to "1", not parsed as twelve.
        let input = validate_guest_input("12");
        assert_eq!(input.value, Some(1));
        assert_eq!(input.error, None);

        let input = validate_guest_input("99");
        assert_eq!(input.value, None);
        assert_eq!(input.error.as_deref(), Some(GUEST_RANGE_MESSAGE));
    }

    #[test]
    fn test_value_never_outside_range() {
        for raw in ["", "0", "5", "x7", "222", "-1", "2.5", " 1 "] {
            let input = validate_guest_input(raw);
            if let Some(value) = input.value {
                assert!(value <= MAX_GUESTS, "raw {:?} produced {}", raw, value);
            }
        }
    }

    #[test]
    fn test_guardian_requirements_table() {
        assert_eq!(
            guardian_requirements(Some(0)),
            GuardianRequirements {
                guardian_1: false,
                guardian_2: false
            }
        );
        assert_eq!(
            guardian_requirements(Some(1)),
            GuardianRequirements {
                guardian_1: true,
                guardian_2: false
            }
        );
        assert_eq!(
            guardian_requirements(Some(2)),
            GuardianRequirements {
                guardian_1: true,
                guardian_2: true
            }
        );
        assert_eq!(guardian_requirements(None), GuardianRequirements::default());
        assert_eq!(
            guardian_requirements(Some(7)),
            GuardianRequirements::default()
        );
    }

    #[test]
    fn test_is_submittable_requires_unregistered_profile() {
        let mut profile = Profile {
            name: "A".into(),
            email: "a@x.com".into(),
            roll_no: "1".into(),
            dept: "CS".into(),
            is_registered: true,
            guest_count: None,
            guest_1_name: None,
            guest_2_name: None,
        };
        let mut draft = Draft::default();
        draft.set_guest_count("0");

        assert!(!is_submittable(&profile, &draft));

        profile.is_registered = false;
        assert!(is_submittable(&profile, &draft));
    }

    #[test]
    fn test_is_submittable_requires_complete_profile() {
        let profile = Profile {
            name: "A".into(),
            email: String::new(),
            roll_no: "1".into(),
            dept: "CS".into(),
            is_registered: false,
            guest_count: None,
            guest_1_name: None,
            guest_2_name: None,
        };
        let mut draft = Draft::default();
        draft.set_guest_count("0");

        assert!(!is_submittable(&profile, &draft));
    }
}
