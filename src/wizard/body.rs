//! Per-step view models.
//!
//! One [`StepBody`] variant exists for each [`Step`]; [`build_body`] selects it
//! with an exhaustive match so exactly one sub-form is ever described.

use serde::Serialize;

use crate::listing::{
    categories, FieldKey, LatLng, ListingForm, LocationValue, Step, ValidationRules,
};

use super::state::WizardState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub selected: bool,
}

/// Input of the map collaborator. A new `instance` asks the host to rebuild
/// its map rather than update it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapPreview {
    pub center: Option<LatLng>,
    pub instance: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterView {
    pub key: FieldKey,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub value: u32,
    pub min: u32,
    pub max: u32,
}

impl CounterView {
    pub fn can_decrement(&self) -> bool {
        self.value > self.min
    }

    pub fn can_increment(&self) -> bool {
        self.value < self.max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "lowercase")]
pub enum StepBody {
    Category {
        options: Vec<CategoryOption>,
    },
    Location {
        value: Option<LocationValue>,
        map: MapPreview,
    },
    Info {
        counters: Vec<CounterView>,
    },
    Images {
        image_src: String,
    },
    Description {
        title: String,
        description: String,
    },
    Price {
        price: u32,
    },
}

impl StepBody {
    pub fn step(&self) -> Step {
        match self {
            StepBody::Category { .. } => Step::Category,
            StepBody::Location { .. } => Step::Location,
            StepBody::Info { .. } => Step::Info,
            StepBody::Images { .. } => Step::Images,
            StepBody::Description { .. } => Step::Description,
            StepBody::Price { .. } => Step::Price,
        }
    }
}

/// Heading, content and visible errors for the current step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyView {
    pub heading: Heading,
    pub content: StepBody,
    pub errors: Vec<(FieldKey, String)>,
}

pub fn heading(step: Step) -> Heading {
    match step {
        Step::Category => Heading {
            title: "Which of these best describes your place?",
            subtitle: "Pick a category",
        },
        Step::Location => Heading {
            title: "Where is your place located?",
            subtitle: "Help guests find you!",
        },
        Step::Info => Heading {
            title: "Please provide descriptions about your place",
            subtitle: "What amenities do you have?",
        },
        Step::Images => Heading {
            title: "Add a photo of your property",
            subtitle: "Show guests what your property looks like",
        },
        Step::Description => Heading {
            title: "How would you describe your place?",
            subtitle: "Short and sweet works best!",
        },
        Step::Price => Heading {
            title: "Now, set your price",
            subtitle: "How much do you charge per night?",
        },
    }
}

pub fn build_body(state: &WizardState, rules: &ValidationRules) -> BodyView {
    let form = &state.form;
    let content = match state.step {
        Step::Category => category_body(form),
        Step::Location => StepBody::Location {
            value: form.location.clone(),
            map: MapPreview {
                center: form.location.as_ref().map(|location| location.latlng),
                instance: state.map_instance,
            },
        },
        Step::Info => StepBody::Info {
            counters: counters(form, rules),
        },
        Step::Images => StepBody::Images {
            image_src: form.image_src.clone(),
        },
        Step::Description => StepBody::Description {
            title: form.title.clone(),
            description: form.description.clone(),
        },
        Step::Price => StepBody::Price { price: form.price },
    };

    let errors = state
        .step_errors(state.step)
        .into_iter()
        .map(|(key, err)| (key, err.message.clone()))
        .collect();

    BodyView {
        heading: heading(state.step),
        content,
        errors,
    }
}

fn category_body(form: &ListingForm) -> StepBody {
    let options = categories()
        .iter()
        .map(|category| CategoryOption {
            label: category.label,
            icon: category.icon,
            description: category.description,
            selected: form.category == category.label,
        })
        .collect();
    StepBody::Category { options }
}

fn counters(form: &ListingForm, rules: &ValidationRules) -> Vec<CounterView> {
    [
        (
            FieldKey::GuestCount,
            "Guests",
            "How many guests do you allow?",
            form.guest_count,
        ),
        (
            FieldKey::RoomCount,
            "Rooms",
            "How many rooms available in the property?",
            form.room_count,
        ),
        (
            FieldKey::BathroomCount,
            "Bathrooms",
            "How many bathrooms available in the property?",
            form.bathroom_count,
        ),
    ]
    .into_iter()
    .map(|(key, title, subtitle, value)| CounterView {
        key,
        title,
        subtitle,
        value,
        min: rules.counter_min,
        max: rules.counter_max,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_matches_step_for_every_step() {
        let rules = ValidationRules::default();
        for step in Step::ALL {
            let state = WizardState {
                step,
                ..WizardState::default()
            };
            let body = build_body(&state, &rules);
            assert_eq!(body.content.step(), step);
            assert_eq!(body.heading, heading(step));
        }
    }

    #[test]
    fn selected_category_is_flagged() {
        let mut state = WizardState::default();
        state.form.category = "Lake".into();
        let body = build_body(&state, &ValidationRules::default());
        match body.content {
            StepBody::Category { options } => {
                let selected: Vec<_> = options.iter().filter(|o| o.selected).collect();
                assert_eq!(selected.len(), 1);
                assert_eq!(selected[0].label, "Lake");
            }
            other => panic!("Unexpected body: {:?}", other),
        }
    }

    #[test]
    fn untouched_errors_stay_hidden() {
        let mut state = WizardState::default();
        state.errors.insert(
            FieldKey::Category,
            crate::listing::ValidationError::new("Pick a category"),
        );
        assert!(build_body(&state, &ValidationRules::default()).errors.is_empty());

        state.touched.insert(FieldKey::Category);
        let body = build_body(&state, &ValidationRules::default());
        assert_eq!(
            body.errors,
            vec![(FieldKey::Category, "Pick a category".to_string())]
        );
    }
}
