use std::fmt;

use serde::{Deserialize, Serialize};

use super::location::LocationValue;
use crate::errors::{Result, WizardError};

/// Fixed set of keys held by [`ListingForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    Category,
    Location,
    GuestCount,
    RoomCount,
    BathroomCount,
    ImageSrc,
    Price,
    Title,
    Description,
}

impl FieldKey {
    pub const ALL: [FieldKey; 9] = [
        FieldKey::Category,
        FieldKey::Location,
        FieldKey::GuestCount,
        FieldKey::RoomCount,
        FieldKey::BathroomCount,
        FieldKey::ImageSrc,
        FieldKey::Price,
        FieldKey::Title,
        FieldKey::Description,
    ];

    /// Wire name of the key.
    pub fn name(self) -> &'static str {
        match self {
            FieldKey::Category => "category",
            FieldKey::Location => "location",
            FieldKey::GuestCount => "guestCount",
            FieldKey::RoomCount => "roomCount",
            FieldKey::BathroomCount => "bathroomCount",
            FieldKey::ImageSrc => "imageSrc",
            FieldKey::Price => "price",
            FieldKey::Title => "title",
            FieldKey::Description => "description",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldKey::Category => "Category",
            FieldKey::Location => "Location",
            FieldKey::GuestCount => "Guests",
            FieldKey::RoomCount => "Rooms",
            FieldKey::BathroomCount => "Bathrooms",
            FieldKey::ImageSrc => "Photo",
            FieldKey::Price => "Price",
            FieldKey::Title => "Title",
            FieldKey::Description => "Description",
        }
    }

    fn expected(self) -> &'static str {
        match self {
            FieldKey::Category | FieldKey::ImageSrc | FieldKey::Title | FieldKey::Description => {
                "text"
            }
            FieldKey::GuestCount
            | FieldKey::RoomCount
            | FieldKey::BathroomCount
            | FieldKey::Price => "a whole number",
            FieldKey::Location => "a location or nothing",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value stored under a [`FieldKey`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(u32),
    Location(Option<LocationValue>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(value)
    }
}

impl From<LocationValue> for FieldValue {
    fn from(value: LocationValue) -> Self {
        FieldValue::Location(Some(value))
    }
}

impl From<Option<LocationValue>> for FieldValue {
    fn from(value: Option<LocationValue>) -> Self {
        FieldValue::Location(value)
    }
}

/// Every value collected by the wizard across its steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingForm {
    pub category: String,
    pub location: Option<LocationValue>,
    pub guest_count: u32,
    pub room_count: u32,
    pub bathroom_count: u32,
    pub image_src: String,
    pub price: u32,
    pub title: String,
    pub description: String,
}

impl Default for ListingForm {
    fn default() -> Self {
        Self {
            category: String::new(),
            location: None,
            guest_count: 1,
            room_count: 1,
            bathroom_count: 1,
            image_src: String::new(),
            price: 1,
            title: String::new(),
            description: String::new(),
        }
    }
}

impl ListingForm {
    pub fn get(&self, key: FieldKey) -> FieldValue {
        match key {
            FieldKey::Category => FieldValue::Text(self.category.clone()),
            FieldKey::Location => FieldValue::Location(self.location.clone()),
            FieldKey::GuestCount => FieldValue::Number(self.guest_count),
            FieldKey::RoomCount => FieldValue::Number(self.room_count),
            FieldKey::BathroomCount => FieldValue::Number(self.bathroom_count),
            FieldKey::ImageSrc => FieldValue::Text(self.image_src.clone()),
            FieldKey::Price => FieldValue::Number(self.price),
            FieldKey::Title => FieldValue::Text(self.title.clone()),
            FieldKey::Description => FieldValue::Text(self.description.clone()),
        }
    }

    /// Writes a single entry. Values of the wrong kind leave the form unchanged.
    pub fn set(&mut self, key: FieldKey, value: FieldValue) -> Result<()> {
        match (key, value) {
            (FieldKey::Category, FieldValue::Text(text)) => self.category = text,
            (FieldKey::ImageSrc, FieldValue::Text(text)) => self.image_src = text,
            (FieldKey::Title, FieldValue::Text(text)) => self.title = text,
            (FieldKey::Description, FieldValue::Text(text)) => self.description = text,
            (FieldKey::Location, FieldValue::Location(location)) => self.location = location,
            (FieldKey::GuestCount, FieldValue::Number(n)) => self.guest_count = n,
            (FieldKey::RoomCount, FieldValue::Number(n)) => self.room_count = n,
            (FieldKey::BathroomCount, FieldValue::Number(n)) => self.bathroom_count = n,
            (FieldKey::Price, FieldValue::Number(n)) => self.price = n,
            (key, _) => {
                return Err(WizardError::FieldMismatch {
                    key,
                    expected: key.expected(),
                })
            }
        }
        Ok(())
    }

    /// True when the entry differs from its initial value.
    pub fn is_dirty(&self, key: FieldKey) -> bool {
        self.get(key) != Self::default().get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::location::LatLng;

    #[test]
    fn defaults_match_documented_values() {
        let form = ListingForm::default();
        assert_eq!(form.category, "");
        assert!(form.location.is_none());
        assert_eq!(
            (form.guest_count, form.room_count, form.bathroom_count),
            (1, 1, 1)
        );
        assert_eq!(form.image_src, "");
        assert_eq!(form.price, 1);
        assert_eq!(form.title, "");
        assert_eq!(form.description, "");
    }

    #[test]
    fn set_touches_only_the_requested_key() {
        let mut form = ListingForm::default();
        let before = form.clone();
        form.set(FieldKey::RoomCount, FieldValue::Number(3)).unwrap();

        for key in FieldKey::ALL {
            if key == FieldKey::RoomCount {
                assert_eq!(form.get(key), FieldValue::Number(3));
            } else {
                assert_eq!(form.get(key), before.get(key), "{key} changed");
            }
        }
    }

    #[test]
    fn mismatched_kind_is_rejected() {
        let mut form = ListingForm::default();
        let err = form
            .set(FieldKey::Price, FieldValue::text("cheap"))
            .unwrap_err();
        assert!(matches!(
            err,
            WizardError::FieldMismatch {
                key: FieldKey::Price,
                ..
            }
        ));
        assert_eq!(form, ListingForm::default());
    }

    #[test]
    fn dirty_tracks_difference_from_default() {
        let mut form = ListingForm::default();
        let location = LocationValue::new(
            "US",
            "United States",
            "",
            LatLng::new(38.0, -97.0),
            "Americas",
        );
        form.set(FieldKey::Location, location.into()).unwrap();
        assert!(form.is_dirty(FieldKey::Location));
        form.set(FieldKey::Location, FieldValue::Location(None))
            .unwrap();
        assert!(!form.is_dirty(FieldKey::Location));
    }

    #[test]
    fn serializes_with_wire_names() {
        let json = serde_json::to_value(ListingForm::default()).unwrap();
        assert_eq!(json["guestCount"], 1);
        assert_eq!(json["imageSrc"], "");
        assert!(json["location"].is_null());
    }
}
