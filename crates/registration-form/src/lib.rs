//! Registration form core: guest/guardian validation and the form
//! controller state machine.
//!
//! The controller reconciles server-reported registration status with local
//! draft state. It depends on the identity provider and the Profile Service
//! only through the [`traits`] seams, so the whole flow is testable without
//! a live network.

mod controller;
mod draft;
mod traits;
mod validate;
mod view;

pub use controller::{FormController, FormStatus, Navigation};
pub use draft::Draft;
pub use traits::{ProfileService, SessionProvider};
pub use validate::{
    guardian_requirements, is_submittable, validate_guest_input, GuardianRequirements, GuestInput,
    GUEST_RANGE_MESSAGE, MAX_GUESTS,
};
pub use view::{FormMessage, FormView, MessageTone};
