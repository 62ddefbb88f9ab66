#![doc(test(attr(deny(warnings))))]

//! Rent Wizard drives the multi-step "list your home" flow of a short-term
//! rental app: step navigation, the listing field bag, validation and the
//! hand-off of finished listings to a submission handler.

pub mod cli;
pub mod config;
pub mod errors;
pub mod listing;
pub mod submission;
pub mod user;
pub mod utils;
pub mod wizard;

pub use wizard::StepWizardController;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Rent Wizard tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
