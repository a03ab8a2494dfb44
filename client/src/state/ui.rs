//! Which dialog is open, and when the chemical list must reload.
//!
//! DESIGN
//! ======
//! Only one top-level dialog is open at a time. Nested editors (inventory
//! edit inside the chemical view) are owned by their parent dialog, so this
//! state never needs a stack.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level dialogs reachable from the navbar or the chemical table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modal {
    AddChemical,
    /// Read-only chemical view with its bottles.
    Chemical(i32),
    ChemicalEdit(i32),
    InventoryAudit,
    DeadBottles,
    MissingMsds,
    Manufacturers,
    Locations,
    SubLocations,
    StorageClasses,
    ManageUsers,
}

impl Modal {
    /// Dialogs that mutate inventory and are hidden from visitors.
    pub fn requires_editor(self) -> bool {
        !matches!(self, Self::Chemical(_))
    }

    pub fn requires_full_access(self) -> bool {
        matches!(self, Self::ManageUsers)
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub modal: Option<Modal>,
    /// Bumped after every mutation; the chemical list re-fetches on change.
    pub refresh_seq: u64,
}

impl UiState {
    pub fn open(&mut self, modal: Modal) {
        self.modal = Some(modal);
    }

    /// Close the open dialog and schedule a list refresh, since any dialog
    /// may have changed inventory.
    pub fn close(&mut self) {
        self.modal = None;
        self.refresh_seq += 1;
    }

    pub fn refresh(&mut self) {
        self.refresh_seq += 1;
    }

    pub fn is_open(&self, modal: Modal) -> bool {
        self.modal == Some(modal)
    }
}
