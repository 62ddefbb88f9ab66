use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::{Result, WizardError};
use crate::listing::{FieldKey, FieldValue, ListingDraft, ListingForm, Step};
use crate::submission::{SubmissionHandler, SubmissionReceipt};

use super::body::{build_body, BodyView};
use super::event::{reduce, Effect, WizardEvent, WizardPolicy};
use super::modal::{self, ModalAction, ModalView, MODAL_TITLE};
use super::state::{SubmissionStatus, WizardState};

/// Owns one wizard's state and applies events to it.
///
/// Every mutating method funnels through [`StepWizardController::dispatch`],
/// which runs the pure reducer and stores the resulting state. Effects are
/// returned to the caller, who is responsible for acting on them.
#[derive(Debug, Clone, Default)]
pub struct StepWizardController {
    state: WizardState,
    policy: WizardPolicy,
}

impl StepWizardController {
    pub fn new(policy: WizardPolicy) -> Self {
        Self {
            state: WizardState::default(),
            policy,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.policy())
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn policy(&self) -> &WizardPolicy {
        &self.policy
    }

    pub fn step(&self) -> Step {
        self.state.step
    }

    pub fn form(&self) -> &ListingForm {
        &self.state.form
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn dispatch(&mut self, event: WizardEvent) -> Option<Effect> {
        let from = self.state.step;
        let label = event_name(&event);
        let transition = reduce(&self.state, event, &self.policy);
        self.state = transition.state;

        if from != self.state.step {
            debug!(event = label, from = %from, to = %self.state.step, "wizard step changed");
        }
        match &transition.effect {
            Some(Effect::Submit(draft)) => {
                info!(
                    category = %draft.category,
                    title = %draft.title,
                    "listing ready for submission"
                );
            }
            Some(Effect::Invalid(errors)) => {
                debug!(event = label, invalid = errors.len(), "action refused by validation");
            }
            Some(Effect::Rejected(err)) => warn!(event = label, error = %err, "event rejected"),
            Some(Effect::Closed) => debug!(event = label, "wizard closed"),
            None => {}
        }
        transition.effect
    }

    pub fn open(&mut self) {
        self.dispatch(WizardEvent::Open);
    }

    /// Dismisses the modal and discards everything entered so far.
    pub fn close(&mut self) -> Option<Effect> {
        self.dispatch(WizardEvent::Close)
    }

    pub fn reset(&mut self) {
        self.dispatch(WizardEvent::Reset);
    }

    pub fn advance(&mut self) -> Option<Effect> {
        self.dispatch(WizardEvent::Advance)
    }

    pub fn retreat(&mut self) -> Option<Effect> {
        self.dispatch(WizardEvent::Retreat)
    }

    /// Writes one field, marks it touched and re-validates it.
    pub fn set_field(&mut self, key: FieldKey, value: impl Into<FieldValue>) -> Result<()> {
        match self.dispatch(WizardEvent::SetField(key, value.into())) {
            Some(Effect::Rejected(err)) => Err(err),
            _ => Ok(()),
        }
    }

    /// Steps a counter up by one, saturating at the configured maximum.
    pub fn increment(&mut self, key: FieldKey) -> Result<()> {
        let current = self.counter_value(key)?;
        let next = self.policy.rules.clamp_counter(current.saturating_add(1));
        self.set_field(key, next)
    }

    /// Steps a counter down by one, saturating at the configured minimum.
    pub fn decrement(&mut self, key: FieldKey) -> Result<()> {
        let current = self.counter_value(key)?;
        let next = self.policy.rules.clamp_counter(current.saturating_sub(1));
        self.set_field(key, next)
    }

    fn counter_value(&self, key: FieldKey) -> Result<u32> {
        match (key, self.state.form.get(key)) {
            (
                FieldKey::GuestCount | FieldKey::RoomCount | FieldKey::BathroomCount,
                FieldValue::Number(value),
            ) => Ok(value),
            _ => Err(WizardError::FieldMismatch {
                key,
                expected: "a counter field",
            }),
        }
    }

    pub fn current_body(&self) -> BodyView {
        build_body(&self.state, &self.policy.rules)
    }

    pub fn primary_action_label(&self) -> &'static str {
        modal::primary_label(self.state.step)
    }

    pub fn secondary_action_label(&self) -> Option<&'static str> {
        modal::secondary_label(self.state.step)
    }

    /// Advances, or on the last step emits [`Effect::Submit`].
    pub fn on_primary_action(&mut self) -> Option<Effect> {
        self.dispatch(WizardEvent::PrimaryAction)
    }

    pub fn on_secondary_action(&mut self) -> Option<Effect> {
        self.dispatch(WizardEvent::SecondaryAction)
    }

    pub fn on_modal_action(&mut self, action: ModalAction) -> Option<Effect> {
        self.dispatch(action.into())
    }

    pub fn submission_succeeded(&mut self) -> Option<Effect> {
        self.dispatch(WizardEvent::SubmissionSucceeded)
    }

    pub fn submission_failed(&mut self, message: impl Into<String>) -> Option<Effect> {
        self.dispatch(WizardEvent::SubmissionFailed(message.into()))
    }

    /// Hands `draft` to `handler` and feeds the outcome back into the wizard.
    ///
    /// Refused unless a submission is pending, so a draft is handed over at
    /// most once per [`Effect::Submit`].
    pub fn complete_submission<H>(
        &mut self,
        draft: &ListingDraft,
        handler: &mut H,
    ) -> Result<SubmissionReceipt>
    where
        H: SubmissionHandler + ?Sized,
    {
        if !self.state.is_pending() {
            warn!("submission completed with nothing pending");
            return Err(WizardError::Submission("no submission pending".into()));
        }
        match handler.submit(draft) {
            Ok(receipt) => {
                info!(listing_id = %receipt.listing_id, "listing created");
                self.submission_succeeded();
                Ok(receipt)
            }
            Err(err) => {
                warn!(error = %err, "listing submission failed");
                self.submission_failed(err.to_string());
                Err(err)
            }
        }
    }

    pub fn modal_view(&self) -> ModalView {
        let submission_error = match &self.state.submission {
            SubmissionStatus::Failed(message) => Some(message.clone()),
            _ => None,
        };
        ModalView {
            is_open: self.state.is_open,
            title: MODAL_TITLE,
            body: self.current_body(),
            primary_label: self.primary_action_label(),
            secondary_label: self.secondary_action_label(),
            disabled: self.state.is_pending(),
            step: self.state.step,
            step_count: Step::ALL.len(),
            submission_error,
        }
    }
}

fn event_name(event: &WizardEvent) -> &'static str {
    match event {
        WizardEvent::Open => "open",
        WizardEvent::Close => "close",
        WizardEvent::Advance => "advance",
        WizardEvent::Retreat => "retreat",
        WizardEvent::SetField(..) => "set_field",
        WizardEvent::PrimaryAction => "primary",
        WizardEvent::SecondaryAction => "secondary",
        WizardEvent::SubmissionSucceeded => "submission_succeeded",
        WizardEvent::SubmissionFailed(_) => "submission_failed",
        WizardEvent::Reset => "reset",
    }
}
