//! Step wizard for creating a listing.
//!
//! State lives in [`WizardState`] and only changes through [`reduce`]; the
//! [`StepWizardController`] owns one state and exposes the navigation, field
//! and action operations hosts call. [`ModalView`] is what a modal shell draws.

pub mod body;
pub mod controller;
pub mod event;
pub mod modal;
pub mod state;

pub use body::{build_body, BodyView, CategoryOption, CounterView, Heading, MapPreview, StepBody};
pub use controller::StepWizardController;
pub use event::{reduce, Effect, Transition, WizardEvent, WizardPolicy};
pub use modal::{ModalAction, ModalView, MODAL_TITLE};
pub use state::{SubmissionStatus, WizardState};
