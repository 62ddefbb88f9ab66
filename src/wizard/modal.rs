use serde::Serialize;

use crate::listing::Step;

use super::body::BodyView;
use super::event::WizardEvent;

pub const MODAL_TITLE: &str = "Airbnb your home!";
pub const PRIMARY_NEXT: &str = "Next";
pub const PRIMARY_CREATE: &str = "Create";
pub const SECONDARY_BACK: &str = "Back";

/// Everything the modal shell needs to draw the wizard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalView {
    pub is_open: bool,
    pub title: &'static str,
    pub body: BodyView,
    pub primary_label: &'static str,
    pub secondary_label: Option<&'static str>,
    /// Actions are disabled while a submission is in flight.
    pub disabled: bool,
    pub step: Step,
    pub step_count: usize,
    pub submission_error: Option<String>,
}

/// Callbacks the modal shell can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Primary,
    Secondary,
    Close,
}

impl From<ModalAction> for WizardEvent {
    fn from(action: ModalAction) -> Self {
        match action {
            ModalAction::Primary => WizardEvent::PrimaryAction,
            ModalAction::Secondary => WizardEvent::SecondaryAction,
            ModalAction::Close => WizardEvent::Close,
        }
    }
}

pub fn primary_label(step: Step) -> &'static str {
    if step.is_terminal() {
        PRIMARY_CREATE
    } else {
        PRIMARY_NEXT
    }
}

pub fn secondary_label(step: Step) -> Option<&'static str> {
    if step.is_first() {
        None
    } else {
        Some(SECONDARY_BACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_for_every_step() {
        for step in Step::ALL {
            let expected_primary = if step.index() == 5 { "Create" } else { "Next" };
            assert_eq!(primary_label(step), expected_primary);
            let expected_secondary = if step.index() == 0 { None } else { Some("Back") };
            assert_eq!(secondary_label(step), expected_secondary);
        }
    }
}
