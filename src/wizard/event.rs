//! Events accepted by the wizard and the pure reducer that applies them.
//!
//! [`reduce`] never mutates its input: it returns the next state together with
//! an optional [`Effect`] that the host must carry out (hand the draft to a
//! submission handler, close the modal, show errors).

use crate::errors::WizardError;
use crate::listing::{FieldErrors, FieldKey, FieldValue, ListingDraft, ValidationRules};

use super::state::{SubmissionStatus, WizardState};

#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    Open,
    Close,
    Advance,
    Retreat,
    SetField(FieldKey, FieldValue),
    PrimaryAction,
    SecondaryAction,
    SubmissionSucceeded,
    SubmissionFailed(String),
    Reset,
}

/// Instruction from the reducer to the host.
#[derive(Debug)]
pub enum Effect {
    /// Hand the draft to the submission handler and report back.
    Submit(ListingDraft),
    /// The modal was dismissed; state has been reset.
    Closed,
    /// The action was refused because these fields are invalid.
    Invalid(FieldErrors),
    /// The event carried data the wizard cannot accept.
    Rejected(WizardError),
}

/// Settings that shape how events are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WizardPolicy {
    pub rules: ValidationRules,
    /// Refuse to leave a step while its fields have errors.
    pub gate_navigation: bool,
}

/// Result of applying one event.
#[derive(Debug)]
pub struct Transition {
    pub state: WizardState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn unchanged(state: &WizardState) -> Self {
        Self {
            state: state.clone(),
            effect: None,
        }
    }

    fn to(state: WizardState) -> Self {
        Self {
            state,
            effect: None,
        }
    }

    fn with_effect(state: WizardState, effect: Effect) -> Self {
        Self {
            state,
            effect: Some(effect),
        }
    }
}

pub fn reduce(state: &WizardState, event: WizardEvent, policy: &WizardPolicy) -> Transition {
    let locked = state.is_pending();
    let is_outcome = matches!(
        event,
        WizardEvent::SubmissionSucceeded | WizardEvent::SubmissionFailed(_)
    );

    match event {
        WizardEvent::Open => {
            let mut next = state.clone();
            next.is_open = true;
            Transition::to(next)
        }
        WizardEvent::Close => {
            let mut next = state.cleared();
            next.is_open = false;
            Transition::with_effect(next, Effect::Closed)
        }
        WizardEvent::Reset => Transition::to(state.cleared()),
        _ if locked && !is_outcome => Transition::unchanged(state),
        WizardEvent::Advance => advance(state, policy),
        WizardEvent::Retreat | WizardEvent::SecondaryAction => {
            if state.step.is_first() {
                return Transition::unchanged(state);
            }
            let mut next = state.clone();
            next.step = state.step.previous();
            Transition::to(next)
        }
        WizardEvent::SetField(key, value) => set_field(state, key, value, policy),
        WizardEvent::PrimaryAction => {
            if state.step.is_terminal() {
                submit(state, policy)
            } else {
                advance(state, policy)
            }
        }
        WizardEvent::SubmissionSucceeded => {
            if !locked {
                return Transition::unchanged(state);
            }
            let mut next = state.cleared();
            next.is_open = false;
            Transition::with_effect(next, Effect::Closed)
        }
        WizardEvent::SubmissionFailed(message) => {
            if !locked {
                return Transition::unchanged(state);
            }
            let mut next = state.clone();
            next.submission = SubmissionStatus::Failed(message);
            Transition::to(next)
        }
    }
}

fn advance(state: &WizardState, policy: &WizardPolicy) -> Transition {
    if state.step.is_terminal() {
        return Transition::unchanged(state);
    }

    if policy.gate_navigation {
        let keys = state.step.fields();
        let errors = policy.rules.validate_fields(&state.form, keys);
        if !errors.is_empty() {
            let mut next = state.clone();
            next.touched.extend(keys.iter().copied());
            next.errors.extend(errors.clone());
            return Transition::with_effect(next, Effect::Invalid(errors));
        }
    }

    let mut next = state.clone();
    next.step = state.step.next();
    Transition::to(next)
}

fn set_field(
    state: &WizardState,
    key: FieldKey,
    value: FieldValue,
    policy: &WizardPolicy,
) -> Transition {
    let mut next = state.clone();
    if let Err(err) = next.form.set(key, value) {
        return Transition::with_effect(state.clone(), Effect::Rejected(err));
    }

    if key == FieldKey::Location && next.form.location != state.form.location {
        next.map_instance += 1;
    }

    next.touched.insert(key);
    match policy.rules.validate(&next.form, key) {
        Ok(()) => {
            next.errors.remove(&key);
        }
        Err(err) => {
            next.errors.insert(key, err);
        }
    }
    Transition::to(next)
}

fn submit(state: &WizardState, policy: &WizardPolicy) -> Transition {
    let mut next = state.clone();
    next.touched.extend(FieldKey::ALL);
    next.errors = policy.rules.validate_all(&state.form);
    if !next.errors.is_empty() {
        let errors = next.errors.clone();
        return Transition::with_effect(next, Effect::Invalid(errors));
    }

    match ListingDraft::try_from(&state.form) {
        Ok(draft) => {
            next.submission = SubmissionStatus::Pending;
            Transition::with_effect(next, Effect::Submit(draft))
        }
        Err(err) => Transition::with_effect(state.clone(), Effect::Rejected(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{find_country, Step};

    fn apply(state: &WizardState, event: WizardEvent) -> Transition {
        reduce(state, event, &WizardPolicy::default())
    }

    fn filled_state() -> WizardState {
        let mut state = WizardState::default();
        state.step = Step::Price;
        state.form.category = "Beach".into();
        state.form.location = find_country("US").cloned();
        state.form.image_src = "https://example.com/house.jpg".into();
        state.form.title = "Sea breeze".into();
        state.form.description = "Steps from the sand.".into();
        state
    }

    #[test]
    fn reducer_leaves_input_untouched() {
        let state = WizardState::default();
        let transition = apply(&state, WizardEvent::Advance);
        assert_eq!(state.step, Step::Category);
        assert_eq!(transition.state.step, Step::Location);
    }

    #[test]
    fn pending_submission_blocks_edits_and_navigation() {
        let mut state = filled_state();
        state.submission = SubmissionStatus::Pending;

        for event in [
            WizardEvent::PrimaryAction,
            WizardEvent::SecondaryAction,
            WizardEvent::Retreat,
            WizardEvent::SetField(FieldKey::Price, FieldValue::Number(99)),
        ] {
            let transition = apply(&state, event);
            assert_eq!(transition.state, state);
            assert!(transition.effect.is_none());
        }
    }

    #[test]
    fn submit_marks_everything_touched_when_invalid() {
        let mut state = WizardState::default();
        state.step = Step::Price;
        let transition = apply(&state, WizardEvent::PrimaryAction);
        assert!(matches!(transition.effect, Some(Effect::Invalid(_))));
        assert_eq!(transition.state.touched.len(), FieldKey::ALL.len());
        assert_eq!(transition.state.submission, SubmissionStatus::Idle);
    }

    #[test]
    fn stray_outcome_without_pending_submission_is_ignored() {
        let state = filled_state();
        let transition = apply(&state, WizardEvent::SubmissionSucceeded);
        assert_eq!(transition.state, state);
        let transition = apply(&state, WizardEvent::SubmissionFailed("late".into()));
        assert_eq!(transition.state, state);
    }

    #[test]
    fn gated_advance_surfaces_step_errors() {
        let policy = WizardPolicy {
            gate_navigation: true,
            ..WizardPolicy::default()
        };
        let transition = reduce(&WizardState::default(), WizardEvent::Advance, &policy);
        assert_eq!(transition.state.step, Step::Category);
        assert!(transition.state.is_touched(FieldKey::Category));
        match transition.effect {
            Some(Effect::Invalid(errors)) => {
                assert!(errors.contains_key(&FieldKey::Category));
            }
            other => panic!("Unexpected effect: {:?}", other),
        }
    }

    #[test]
    fn location_change_bumps_map_instance() {
        let state = WizardState::default();
        let location = find_country("JP").cloned();
        let first = apply(
            &state,
            WizardEvent::SetField(FieldKey::Location, location.clone().into()),
        );
        assert_eq!(first.state.map_instance, 1);
        let same = apply(
            &first.state,
            WizardEvent::SetField(FieldKey::Location, location.into()),
        );
        assert_eq!(same.state.map_instance, 1);
    }
}
