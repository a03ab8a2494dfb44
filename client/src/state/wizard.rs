//! Add-chemical wizard state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wizard identifies a chemical (by product number, then by name) before
//! recording a bottle of it. Lookups happen in the component; their outcomes
//! arrive here as [`WizardEvent`]s and drive the step transitions:
//!
//! ```text
//! product_number --found--> manufacturer --chosen--> bottle_details
//!        |                       ^
//!     missing                  found
//!        v                       |
//! chemical_name ----------------+
//!        |
//!     missing
//!        v
//! new_chemical --created--> bottle_details
//! ```
//!
//! Every forward transition records the step it left, so [`WizardState::back`]
//! retraces exactly the path taken.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use records::{ChemicalLookup, Manufacturer, NewBottle, NewChemical, ProductLookup};

use crate::util::form::{optional_text, parse_sticker, required, required_id};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    ProductNumber,
    ChemicalName,
    Manufacturer,
    NewChemical,
    BottleDetails,
}

impl Step {
    pub fn title(self) -> &'static str {
        match self {
            Self::ProductNumber => "Product Number",
            Self::ChemicalName => "Chemical Name",
            Self::Manufacturer => "Manufacturer",
            Self::NewChemical => "New Chemical",
            Self::BottleDetails => "Bottle Details",
        }
    }
}

/// Outcome of a lookup or submission, fed back into the machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardEvent {
    ProductFound(ProductLookup),
    ProductMissing,
    ChemicalFound(ChemicalLookup),
    ChemicalMissing,
    ManufacturerChosen(Manufacturer),
    ChemicalCreated(i32),
}

#[derive(Clone, Debug, Default)]
pub struct WizardState {
    pub step: Step,
    path: Vec<Step>,
    pub product_number: String,
    pub chemical_id: Option<i32>,
    pub chemical_name: String,
    pub formula: String,
    pub storage_class_id: Option<i32>,
    pub manufacturer: Option<Manufacturer>,
    pub sticker: String,
    pub sub_location_id: Option<i32>,
    pub msds: bool,
}

impl WizardState {
    /// Apply an event. Events that do not belong to the current step are
    /// ignored and `false` is returned.
    pub fn apply(&mut self, event: WizardEvent) -> bool {
        let next = match (self.step, event) {
            (Step::ProductNumber, WizardEvent::ProductFound(found)) => {
                self.chemical_id = Some(found.chemical_id);
                self.manufacturer = Some(found.manufacturer);
                self.product_number = found.product_number;
                Step::Manufacturer
            }
            (Step::ProductNumber, WizardEvent::ProductMissing) => {
                self.chemical_id = None;
                self.manufacturer = None;
                Step::ChemicalName
            }
            (Step::ChemicalName, WizardEvent::ChemicalFound(found)) => {
                self.chemical_id = Some(found.chemical_id);
                self.chemical_name = found.chemical_name;
                self.formula = found.chemical_formula.unwrap_or_default();
                Step::Manufacturer
            }
            (Step::ChemicalName, WizardEvent::ChemicalMissing) => {
                self.chemical_id = None;
                Step::NewChemical
            }
            (Step::Manufacturer, WizardEvent::ManufacturerChosen(manufacturer)) => {
                self.manufacturer = Some(manufacturer);
                Step::BottleDetails
            }
            (Step::NewChemical, WizardEvent::ChemicalCreated(id)) => {
                self.chemical_id = Some(id);
                Step::BottleDetails
            }
            _ => return false,
        };
        self.path.push(self.step);
        self.step = next;
        true
    }

    /// Return to the step the user came from. `false` on the first step.
    pub fn back(&mut self) -> bool {
        match self.path.pop() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.path.is_empty()
    }

    /// Steps visited before the current one, oldest first.
    pub fn path(&self) -> &[Step] {
        &self.path
    }

    /// Payload for `POST /api/add_chemical`.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message naming the first missing field: name,
    /// storage class, then manufacturer.
    pub fn chemical_request(&self) -> Result<NewChemical, String> {
        let name = required("Chemical Name", &self.chemical_name)?;
        let storage_class_id = required_id("Storage Class", self.storage_class_id)?;
        let manufacturer_id = required_id("Manufacturer", self.manufacturer.as_ref().map(|m| m.id))?;
        Ok(NewChemical {
            chemical_name: name.to_owned(),
            chemical_formula: optional_text(&self.formula),
            storage_class_id: Some(storage_class_id),
            manufacturer_id: Some(manufacturer_id),
            product_number: optional_text(&self.product_number),
        })
    }

    /// Payload for `POST /api/add_bottle`.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message naming the first missing field.
    pub fn bottle_request(&self) -> Result<NewBottle, String> {
        let sticker = parse_sticker(&self.sticker)?;
        let chemical_id = required_id("Chemical", self.chemical_id)?;
        let manufacturer_id = required_id("Manufacturer", self.manufacturer.as_ref().map(|m| m.id))?;
        let sub_location_id = required_id("Sub-Location", self.sub_location_id)?;
        Ok(NewBottle {
            sticker_number: Some(sticker),
            chemical_id: Some(chemical_id),
            manufacturer_id: Some(manufacturer_id),
            sub_location_id: Some(sub_location_id),
            product_number: optional_text(&self.product_number),
            msds: self.msds,
        })
    }
}
