use std::fmt;

use serde::{Deserialize, Serialize};

use super::form::FieldKey;

/// Stages of the listing wizard in presentation order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    Category,
    Location,
    Info,
    Images,
    Description,
    Price,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Category,
        Step::Location,
        Step::Info,
        Step::Images,
        Step::Description,
        Step::Price,
    ];

    pub const FIRST: Step = Step::Category;
    pub const LAST: Step = Step::Price;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    /// Following step, saturating at [`Step::LAST`].
    pub fn next(self) -> Step {
        Self::from_index(self.index() + 1).unwrap_or(Self::LAST)
    }

    /// Preceding step, saturating at [`Step::FIRST`].
    pub fn previous(self) -> Step {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(Self::FIRST)
    }

    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    pub fn is_terminal(self) -> bool {
        self == Self::LAST
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Category => "Category",
            Step::Location => "Location",
            Step::Info => "Info",
            Step::Images => "Images",
            Step::Description => "Description",
            Step::Price => "Price",
        }
    }

    /// Fields edited on this step.
    pub fn fields(self) -> &'static [FieldKey] {
        match self {
            Step::Category => &[FieldKey::Category],
            Step::Location => &[FieldKey::Location],
            Step::Info => &[
                FieldKey::GuestCount,
                FieldKey::RoomCount,
                FieldKey::BathroomCount,
            ],
            Step::Images => &[FieldKey::ImageSrc],
            Step::Description => &[FieldKey::Title, FieldKey::Description],
            Step::Price => &[FieldKey::Price],
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
