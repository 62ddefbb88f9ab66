mod common;

use common::{filled_controller, new_york};
use rent_wizard::errors::Result;
use rent_wizard::listing::{FieldKey, ListingDraft, ListingForm, Step};
use rent_wizard::submission::SubmissionReceipt;
use rent_wizard::wizard::{Effect, StepBody, WizardPolicy};
use rent_wizard::StepWizardController;
use uuid::Uuid;

#[test]
fn walks_from_category_to_price() {
    let mut controller = StepWizardController::default();
    controller.open();
    assert_eq!(controller.step(), Step::Category);

    controller.set_field(FieldKey::Category, "Beach").unwrap();
    controller.advance();
    assert!(matches!(
        controller.current_body().content,
        StepBody::Location { .. }
    ));

    controller
        .set_field(FieldKey::Location, Some(new_york()))
        .unwrap();
    match controller.current_body().content {
        StepBody::Location { value, map } => {
            assert_eq!(value.map(|location| location.value), Some("US".into()));
            let center = map.center.unwrap();
            assert_eq!((center.lat, center.lng), (40.7, -74.0));
        }
        other => panic!("Unexpected body: {:?}", other),
    }

    controller.advance();
    match controller.current_body().content {
        StepBody::Info { counters } => {
            assert_eq!(counters.len(), 3);
            assert!(counters.iter().all(|counter| counter.value == 1));
        }
        other => panic!("Unexpected body: {:?}", other),
    }

    controller.advance();
    assert_eq!(controller.step(), Step::Images);
    controller.advance();
    assert_eq!(controller.step(), Step::Description);
    controller.advance();
    assert_eq!(controller.step(), Step::Price);
    assert_eq!(controller.primary_action_label(), "Create");
    assert_eq!(controller.secondary_action_label(), Some("Back"));
}

#[test]
fn action_labels_follow_the_step() {
    let mut controller = StepWizardController::default();
    controller.open();
    for step in Step::ALL {
        assert_eq!(controller.step(), step);
        let expected = if step == Step::Price { "Create" } else { "Next" };
        assert_eq!(controller.primary_action_label(), expected);
        assert_eq!(
            controller.secondary_action_label().is_none(),
            step == Step::Category
        );
        controller.advance();
    }
}

#[test]
fn every_step_renders_exactly_its_own_body() {
    let mut controller = StepWizardController::default();
    controller.open();
    for step in Step::ALL {
        assert_eq!(controller.current_body().content.step(), step);
        controller.advance();
    }
}

#[test]
fn set_field_touches_only_one_key() {
    let mut controller = StepWizardController::default();
    controller.open();
    let before = controller.form().clone();
    controller.set_field(FieldKey::RoomCount, 3u32).unwrap();

    let after = controller.form();
    assert_eq!(after.room_count, 3);
    for key in FieldKey::ALL.into_iter().filter(|key| *key != FieldKey::RoomCount) {
        assert_eq!(after.get(key), before.get(key), "{key} changed");
    }
}

#[test]
fn reset_restores_documented_defaults() {
    let mut controller = filled_controller();
    controller.advance();
    controller.advance();
    controller.reset();

    assert_eq!(controller.step(), Step::Category);
    let form = controller.form();
    assert_eq!(form, &ListingForm::default());
    assert_eq!(form.category, "");
    assert!(form.location.is_none());
    assert_eq!(
        (form.guest_count, form.room_count, form.bathroom_count, form.price),
        (1, 1, 1, 1)
    );
    assert!(form.image_src.is_empty() && form.title.is_empty() && form.description.is_empty());
}

#[test]
fn close_discards_progress() {
    let mut controller = filled_controller();
    controller.advance();
    assert!(matches!(controller.close(), Some(Effect::Closed)));
    assert!(!controller.is_open());

    controller.open();
    assert_eq!(controller.step(), Step::Category);
    assert_eq!(controller.form(), &ListingForm::default());
}

#[test]
fn incomplete_listing_is_not_submitted() {
    let mut controller = StepWizardController::default();
    controller.open();
    for _ in 0..5 {
        controller.advance();
    }
    match controller.on_primary_action() {
        Some(Effect::Invalid(errors)) => {
            assert!(errors.contains_key(&FieldKey::Category));
            assert!(errors.contains_key(&FieldKey::Title));
        }
        other => panic!("Unexpected effect: {:?}", other),
    }
    assert_eq!(controller.step(), Step::Price);
    assert!(!controller.state().is_pending());
}

#[test]
fn successful_submission_resets_and_closes() {
    let mut controller = filled_controller();
    for _ in 0..5 {
        controller.on_primary_action();
    }
    let draft = match controller.on_primary_action() {
        Some(Effect::Submit(draft)) => draft,
        other => panic!("Unexpected effect: {:?}", other),
    };
    assert_eq!(draft.category, "Beach");
    assert_eq!(draft.price, 180);

    // ignored while the submission is in flight
    assert!(controller.modal_view().disabled);
    controller.set_field(FieldKey::Title, "Changed").unwrap();
    controller.retreat();
    assert_eq!(controller.form().title, "Harbor loft");
    assert_eq!(controller.step(), Step::Price);

    let mut handler = |_: &ListingDraft| -> Result<SubmissionReceipt> {
        Ok(SubmissionReceipt {
            listing_id: Uuid::new_v4(),
            location: None,
        })
    };
    controller.complete_submission(&draft, &mut handler).unwrap();

    assert!(!controller.is_open());
    assert_eq!(controller.step(), Step::Category);
    assert_eq!(controller.form(), &ListingForm::default());
}

#[test]
fn gated_navigation_blocks_incomplete_steps() {
    let policy = WizardPolicy {
        gate_navigation: true,
        ..WizardPolicy::default()
    };
    let mut controller = StepWizardController::new(policy);
    controller.open();
    assert!(matches!(controller.advance(), Some(Effect::Invalid(_))));
    assert_eq!(controller.step(), Step::Category);

    controller.set_field(FieldKey::Category, "Windmills").unwrap();
    assert!(controller.advance().is_none());
    assert_eq!(controller.step(), Step::Location);
}

#[test]
fn script_and_data_photo_references_are_flagged() {
    let mut controller = StepWizardController::default();
    controller.open();
    for reference in ["javascript:alert(1)", "data:image/png;base64,AAAA", "mailto:a@b.c"] {
        controller.set_field(FieldKey::ImageSrc, reference).unwrap();
        assert_eq!(
            controller
                .state()
                .errors
                .get(&FieldKey::ImageSrc)
                .map(|err| err.message.as_str()),
            Some("Photo URL must use http or https"),
            "{reference} accepted"
        );
    }
    controller
        .set_field(FieldKey::ImageSrc, "https://example.com/harbor.jpg")
        .unwrap();
    assert!(!controller.state().errors.contains_key(&FieldKey::ImageSrc));
}
