//! Text rendering of the wizard modal.
//!
//! Rendering is pure: every function returns lines so the shell decides how to
//! print them. Terminals cannot draw map tiles, so the location step falls back
//! to coordinates unless the host reports that capability.

use crate::listing::FieldKey;
use crate::wizard::{BodyView, CounterView, MapPreview, ModalView, StepBody};

/// What the hosting surface is able to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderCapabilities {
    pub map_tiles: bool,
}

pub fn render_modal(view: &ModalView, caps: RenderCapabilities) -> Vec<String> {
    if !view.is_open {
        return vec!["The listing wizard is closed. Type `open` to list your home.".into()];
    }

    let mut lines = vec![
        format!("=== {} ===", view.title),
        format!(
            "Step {} of {}: {}",
            view.step.index() + 1,
            view.step_count,
            view.step
        ),
        String::new(),
    ];
    lines.extend(render_body(&view.body, caps));

    if view.disabled {
        lines.push(String::new());
        lines.push("  Submitting your listing...".into());
    }
    if let Some(message) = &view.submission_error {
        lines.push(String::new());
        lines.push(format!("  ! Something went wrong: {message}"));
    }

    lines.push(String::new());
    let mut actions = Vec::new();
    if let Some(secondary) = view.secondary_label {
        actions.push(format!("[{secondary}]"));
    }
    actions.push(format!("[{}]", view.primary_label));
    lines.push(format!("Actions: {}", actions.join(" ")));
    lines
}

pub fn render_body(body: &BodyView, caps: RenderCapabilities) -> Vec<String> {
    let mut lines = vec![
        body.heading.title.to_string(),
        body.heading.subtitle.to_string(),
        String::new(),
    ];

    match &body.content {
        StepBody::Category { options } => {
            for option in options {
                let mark = if option.selected { "x" } else { " " };
                lines.push(format!(
                    "  [{mark}] {:<12} {}",
                    option.label, option.description
                ));
            }
        }
        StepBody::Location { value, map } => {
            match value {
                Some(location) => lines.push(format!("  Location: {}", location.display())),
                None => lines.push("  Location: not selected".into()),
            }
            lines.push(render_map(map, caps));
        }
        StepBody::Info { counters } => {
            for (index, counter) in counters.iter().enumerate() {
                if index > 0 {
                    lines.push("  ----".into());
                }
                lines.extend(render_counter(counter));
            }
        }
        StepBody::Images { image_src } => {
            if image_src.trim().is_empty() {
                lines.push("  Photo: none uploaded".into());
            } else {
                lines.push(format!("  Photo: {image_src}"));
            }
        }
        StepBody::Description { title, description } => {
            lines.push(format!("  Title: {}", or_empty(title)));
            lines.push(format!("  Description: {}", or_empty(description)));
        }
        StepBody::Price { price } => {
            lines.push(format!("  Price per night: $ {price}"));
        }
    }

    if !body.errors.is_empty() {
        lines.push(String::new());
        for (key, message) in &body.errors {
            lines.push(format!("  ! {}: {}", key.label(), message));
        }
    }
    lines
}

fn render_map(map: &MapPreview, caps: RenderCapabilities) -> String {
    match (map.center, caps.map_tiles) {
        (None, _) => "  Map: world view".into(),
        (Some(center), true) => format!(
            "  Map #{}: centered on {:.2}, {:.2}",
            map.instance, center.lat, center.lng
        ),
        (Some(center), false) => format!(
            "  Map: {:.2}, {:.2} (tiles unavailable in this terminal)",
            center.lat, center.lng
        ),
    }
}

fn render_counter(counter: &CounterView) -> Vec<String> {
    let minus = if counter.can_decrement() { "-" } else { " " };
    let plus = if counter.can_increment() { "+" } else { " " };
    vec![
        format!("  {} ({})", counter.title, counter.subtitle),
        format!(
            "    ({minus}) {} ({plus})   `{} +` / `{} -`",
            counter.value,
            command_name(counter.key),
            command_name(counter.key)
        ),
    ]
}

fn command_name(key: FieldKey) -> &'static str {
    match key {
        FieldKey::GuestCount => "guests",
        FieldKey::RoomCount => "rooms",
        FieldKey::BathroomCount => "bathrooms",
        other => other.name(),
    }
}

fn or_empty(value: &str) -> &str {
    if value.trim().is_empty() {
        "(empty)"
    } else {
        value
    }
}
