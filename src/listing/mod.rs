//! Listing domain: the wizard steps, the field bag they edit and the
//! catalogs backing the category and location pickers.

pub mod category;
pub mod form;
pub mod location;
pub mod record;
pub mod step;
pub mod validation;

pub use category::{categories, find_category, Category};
pub use form::{FieldKey, FieldValue, ListingForm};
pub use location::{countries, find_country, flag_emoji, LatLng, LocationValue};
pub use record::{ListingDraft, ListingRecord};
pub use step::Step;
pub use validation::{FieldErrors, ValidationError, ValidationRules};
