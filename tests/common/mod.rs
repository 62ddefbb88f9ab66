use rent_wizard::listing::{FieldKey, LatLng, LocationValue};
use rent_wizard::StepWizardController;

pub fn new_york() -> LocationValue {
    LocationValue::new(
        "US",
        "United States",
        "🇺🇸",
        LatLng::new(40.7, -74.0),
        "Americas",
    )
}

/// Opens a wizard and fills every field with valid values without navigating.
#[allow(dead_code)]
pub fn filled_controller() -> StepWizardController {
    let mut controller = StepWizardController::default();
    controller.open();
    controller.set_field(FieldKey::Category, "Beach").unwrap();
    controller
        .set_field(FieldKey::Location, Some(new_york()))
        .unwrap();
    controller
        .set_field(FieldKey::ImageSrc, "https://example.com/loft.jpg")
        .unwrap();
    controller.set_field(FieldKey::Title, "Harbor loft").unwrap();
    controller
        .set_field(FieldKey::Description, "Bright loft next to the ferry.")
        .unwrap();
    controller.set_field(FieldKey::Price, 180u32).unwrap();
    controller
}
