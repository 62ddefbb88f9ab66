//! Field-level validation for the listing form.
//!
//! Errors are advisory: they are collected per field and surfaced to the host
//! but only block the final submission (and navigation when the host opts in).

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::category::find_category;
use super::form::{FieldKey, ListingForm};

pub const TITLE_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 2000;

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Errors keyed by the field they belong to.
pub type FieldErrors = BTreeMap<FieldKey, ValidationError>;

/// Bounds applied to numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub counter_min: u32,
    pub counter_max: u32,
    pub price_max: u32,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            counter_min: 1,
            counter_max: 50,
            price_max: 100_000,
        }
    }
}

impl ValidationRules {
    pub fn validate(&self, form: &ListingForm, key: FieldKey) -> Result<(), ValidationError> {
        match key {
            FieldKey::Category => {
                if form.category.trim().is_empty() {
                    Err(ValidationError::new("Pick a category"))
                } else if find_category(&form.category).is_none() {
                    Err(ValidationError::new(format!(
                        "Unknown category `{}`",
                        form.category
                    )))
                } else {
                    Ok(())
                }
            }
            FieldKey::Location => match &form.location {
                Some(_) => Ok(()),
                None => Err(ValidationError::new("Select where your place is located")),
            },
            FieldKey::GuestCount | FieldKey::RoomCount | FieldKey::BathroomCount => {
                let value = match key {
                    FieldKey::GuestCount => form.guest_count,
                    FieldKey::RoomCount => form.room_count,
                    _ => form.bathroom_count,
                };
                self.check_counter(value)
            }
            FieldKey::ImageSrc => validate_image_src(&form.image_src),
            FieldKey::Price => {
                if form.price == 0 {
                    Err(ValidationError::new("Price must be at least 1"))
                } else if form.price > self.price_max {
                    Err(ValidationError::new(format!(
                        "Price cannot exceed {}",
                        self.price_max
                    )))
                } else {
                    Ok(())
                }
            }
            FieldKey::Title => validate_text(&form.title, "Title", TITLE_MAX_LEN),
            FieldKey::Description => {
                validate_text(&form.description, "Description", DESCRIPTION_MAX_LEN)
            }
        }
    }

    /// Validates every field in `keys`, returning only the failures.
    pub fn validate_fields(&self, form: &ListingForm, keys: &[FieldKey]) -> FieldErrors {
        keys.iter()
            .filter_map(|key| self.validate(form, *key).err().map(|err| (*key, err)))
            .collect()
    }

    pub fn validate_all(&self, form: &ListingForm) -> FieldErrors {
        self.validate_fields(form, &FieldKey::ALL)
    }

    /// Clamps a counter into the configured range.
    pub fn clamp_counter(&self, value: u32) -> u32 {
        value.clamp(self.counter_min, self.counter_max)
    }

    fn check_counter(&self, value: u32) -> Result<(), ValidationError> {
        if value < self.counter_min || value > self.counter_max {
            Err(ValidationError::new(format!(
                "Value must be between {} and {}",
                self.counter_min, self.counter_max
            )))
        } else {
            Ok(())
        }
    }
}

fn validate_text(value: &str, label: &str, max_len: usize) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::new(format!("{label} is required")))
    } else if trimmed.chars().count() > max_len {
        Err(ValidationError::new(format!(
            "{label} cannot exceed {max_len} characters"
        )))
    } else {
        Ok(())
    }
}

fn validate_image_src(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("Upload a photo of your place"));
    }
    if let Some(scheme) = uri_scheme(trimmed) {
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(ValidationError::new("Photo URL must use http or https"));
        }
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("Photo reference cannot contain spaces"));
    }
    Ok(())
}

/// RFC 3986 scheme of `value`, if it starts with one. Single letters are
/// Windows drive prefixes such as `C:`, not schemes.
fn uri_scheme(value: &str) -> Option<&str> {
    let end = value.find(|ch| matches!(ch, ':' | '/' | '?' | '#'))?;
    if !value[end..].starts_with(':') {
        return None;
    }
    let scheme = &value[..end];
    let mut chars = scheme.chars();
    let starts_alpha = chars.next().is_some_and(|ch| ch.is_ascii_alphabetic());
    let valid = starts_alpha
        && chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'));
    (valid && scheme.len() > 1).then_some(scheme)
}
