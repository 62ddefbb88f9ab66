use std::collections::BTreeSet;

use crate::listing::{FieldErrors, FieldKey, ListingForm, Step, ValidationError};

/// Progress of the hand-off to the submission handler.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Failed(String),
}

/// Complete state of one wizard instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WizardState {
    pub is_open: bool,
    pub step: Step,
    pub form: ListingForm,
    pub touched: BTreeSet<FieldKey>,
    pub errors: FieldErrors,
    pub submission: SubmissionStatus,
    /// Bumped whenever the location changes; hosts recreate their map on change.
    pub map_instance: u64,
}

impl WizardState {
    pub fn is_pending(&self) -> bool {
        self.submission == SubmissionStatus::Pending
    }

    pub fn is_touched(&self, key: FieldKey) -> bool {
        self.touched.contains(&key)
    }

    pub fn is_dirty(&self, key: FieldKey) -> bool {
        self.form.is_dirty(key)
    }

    /// Errors for touched fields edited on `step`.
    pub fn step_errors(&self, step: Step) -> Vec<(FieldKey, &ValidationError)> {
        step.fields()
            .iter()
            .filter(|key| self.is_touched(**key))
            .filter_map(|key| self.errors.get(key).map(|err| (*key, err)))
            .collect()
    }

    /// Fresh state that keeps the modal visibility and map counter.
    pub(crate) fn cleared(&self) -> Self {
        let map_instance = if self.form.location.is_some() {
            self.map_instance + 1
        } else {
            self.map_instance
        };
        Self {
            is_open: self.is_open,
            map_instance,
            ..Self::default()
        }
    }
}
