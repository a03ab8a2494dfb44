use super::*;

fn fisher() -> Manufacturer {
    Manufacturer { id: 2, name: "Fisher Scientific".to_owned() }
}

fn product_hit() -> ProductLookup {
    ProductLookup { chemical_id: 11, manufacturer: fisher(), product_number: "A18-4".to_owned() }
}

fn chemical_hit() -> ChemicalLookup {
    ChemicalLookup {
        chemical_id: 12,
        chemical_name: "Acetone".to_owned(),
        chemical_formula: Some("C3H6O".to_owned()),
        storage_class: "Flammable".to_owned(),
    }
}

// =============================================================
// forward transitions
// =============================================================

#[test]
fn starts_at_product_number() {
    let state = WizardState::default();
    assert_eq!(state.step, Step::ProductNumber);
    assert!(!state.can_go_back());
}

#[test]
fn product_found_prefills_and_jumps_to_manufacturer() {
    let mut state = WizardState::default();
    assert!(state.apply(WizardEvent::ProductFound(product_hit())));
    assert_eq!(state.step, Step::Manufacturer);
    assert_eq!(state.chemical_id, Some(11));
    assert_eq!(state.manufacturer, Some(fisher()));
    assert_eq!(state.product_number, "A18-4");
}

#[test]
fn product_missing_goes_to_chemical_name() {
    let mut state = WizardState::default();
    assert!(state.apply(WizardEvent::ProductMissing));
    assert_eq!(state.step, Step::ChemicalName);
}

#[test]
fn chemical_found_goes_to_manufacturer() {
    let mut state = WizardState::default();
    state.apply(WizardEvent::ProductMissing);
    assert!(state.apply(WizardEvent::ChemicalFound(chemical_hit())));
    assert_eq!(state.step, Step::Manufacturer);
    assert_eq!(state.chemical_id, Some(12));
    assert_eq!(state.formula, "C3H6O");
}

#[test]
fn chemical_missing_goes_to_new_chemical_then_bottle() {
    let mut state = WizardState::default();
    state.apply(WizardEvent::ProductMissing);
    assert!(state.apply(WizardEvent::ChemicalMissing));
    assert_eq!(state.step, Step::NewChemical);
    assert!(state.apply(WizardEvent::ChemicalCreated(40)));
    assert_eq!(state.step, Step::BottleDetails);
    assert_eq!(state.chemical_id, Some(40));
}

#[test]
fn manufacturer_chosen_goes_to_bottle_details() {
    let mut state = WizardState::default();
    state.apply(WizardEvent::ProductFound(product_hit()));
    assert!(state.apply(WizardEvent::ManufacturerChosen(fisher())));
    assert_eq!(state.step, Step::BottleDetails);
}

#[test]
fn out_of_step_events_are_ignored() {
    let mut state = WizardState::default();
    assert!(!state.apply(WizardEvent::ChemicalCreated(1)));
    assert!(!state.apply(WizardEvent::ManufacturerChosen(fisher())));
    assert_eq!(state.step, Step::ProductNumber);
    assert!(state.path().is_empty());
}

// =============================================================
// back navigation
// =============================================================

#[test]
fn back_retraces_the_short_path() {
    let mut state = WizardState::default();
    state.apply(WizardEvent::ProductFound(product_hit()));
    state.apply(WizardEvent::ManufacturerChosen(fisher()));
    assert_eq!(state.path(), &[Step::ProductNumber, Step::Manufacturer]);
    assert!(state.back());
    assert_eq!(state.step, Step::Manufacturer);
    assert!(state.back());
    assert_eq!(state.step, Step::ProductNumber);
    assert!(!state.back());
}

#[test]
fn back_retraces_the_new_chemical_path() {
    let mut state = WizardState::default();
    state.apply(WizardEvent::ProductMissing);
    state.apply(WizardEvent::ChemicalMissing);
    state.apply(WizardEvent::ChemicalCreated(40));
    let mut visited = Vec::new();
    while state.back() {
        visited.push(state.step);
    }
    assert_eq!(visited, vec![Step::NewChemical, Step::ChemicalName, Step::ProductNumber]);
}

#[test]
fn back_from_manufacturer_via_name_returns_to_name() {
    let mut state = WizardState::default();
    state.apply(WizardEvent::ProductMissing);
    state.apply(WizardEvent::ChemicalFound(chemical_hit()));
    assert!(state.back());
    assert_eq!(state.step, Step::ChemicalName);
}

// =============================================================
// payloads
// =============================================================

#[test]
fn bottle_request_requires_every_field() {
    let mut state = WizardState::default();
    state.apply(WizardEvent::ProductFound(product_hit()));
    state.apply(WizardEvent::ManufacturerChosen(fisher()));
    assert!(state.bottle_request().is_err());

    state.sticker = "1001".to_owned();
    assert_eq!(state.bottle_request().unwrap_err(), "Sub-Location is required");

    state.sub_location_id = Some(5);
    state.msds = true;
    let body = state.bottle_request().unwrap();
    assert_eq!(body.sticker_number, Some(1001));
    assert_eq!(body.chemical_id, Some(11));
    assert_eq!(body.manufacturer_id, Some(2));
    assert_eq!(body.sub_location_id, Some(5));
    assert_eq!(body.product_number.as_deref(), Some("A18-4"));
    assert!(body.msds);
}

#[test]
fn chemical_request_requires_name_and_storage_class() {
    let mut state = WizardState::default();
    assert_eq!(state.chemical_request().unwrap_err(), "Chemical Name is required");
    state.chemical_name = "  Toluene ".to_owned();
    assert_eq!(state.chemical_request().unwrap_err(), "Storage Class is required");
    state.storage_class_id = Some(3);
    state.manufacturer = Some(fisher());
    let body = state.chemical_request().unwrap();
    assert_eq!(body.chemical_name, "Toluene");
    assert_eq!(body.chemical_formula, None);
    assert_eq!(body.storage_class_id, Some(3));
}

#[test]
fn new_chemical_without_manufacturer_is_refused() {
    let mut state = WizardState::default();
    state.product_number = "X-1".to_owned();
    assert!(state.apply(WizardEvent::ProductMissing));
    state.chemical_name = "Toluene".to_owned();
    assert!(state.apply(WizardEvent::ChemicalMissing));
    assert_eq!(state.step, Step::NewChemical);
    state.storage_class_id = Some(3);
    assert_eq!(state.chemical_request().unwrap_err(), "Manufacturer is required");

    state.manufacturer = Some(fisher());
    let body = state.chemical_request().unwrap();
    assert_eq!(body.manufacturer_id, Some(2));
    assert_eq!(body.product_number.as_deref(), Some("X-1"));
}
