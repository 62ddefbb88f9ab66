use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::form::ListingForm;
use super::location::LocationValue;
use crate::errors::WizardError;

/// Snapshot of a completed form handed to the submission handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub category: String,
    pub location: LocationValue,
    pub guest_count: u32,
    pub room_count: u32,
    pub bathroom_count: u32,
    pub image_src: String,
    pub price: u32,
    pub title: String,
    pub description: String,
}

impl TryFrom<&ListingForm> for ListingDraft {
    type Error = WizardError;

    fn try_from(form: &ListingForm) -> Result<Self, Self::Error> {
        let location = form
            .location
            .clone()
            .ok_or_else(|| WizardError::Validation("location is missing".into()))?;
        Ok(Self {
            category: form.category.trim().to_string(),
            location,
            guest_count: form.guest_count,
            room_count: form.room_count,
            bathroom_count: form.bathroom_count,
            image_src: form.image_src.trim().to_string(),
            price: form.price,
            title: form.title.trim().to_string(),
            description: form.description.trim().to_string(),
        })
    }
}

/// Persisted listing shape. Only the country code of the location is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_src: String,
    pub created_at: DateTime<Utc>,
    pub category: String,
    pub room_count: u32,
    pub bathroom_count: u32,
    pub guest_count: u32,
    pub location_value: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_id: Option<String>,
    pub price: u32,
}

impl ListingRecord {
    pub fn from_draft(draft: &ListingDraft, user_id: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            image_src: draft.image_src.clone(),
            created_at: now,
            category: draft.category.clone(),
            room_count: draft.room_count,
            bathroom_count: draft.bathroom_count,
            guest_count: draft.guest_count,
            location_value: draft.location.value.clone(),
            user_id,
            price: draft.price,
        }
    }
}
