//! Navbar entries gated by access level.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use records::AccessLevel;

use crate::state::ui::Modal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    AddChemical,
    Inventory,
    DeadBottles,
    MissingMsds,
    MsdsLog,
    ManageDatabase,
    ManageUsers,
}

impl NavItem {
    pub fn label(self) -> &'static str {
        match self {
            Self::AddChemical => "Add Chemical",
            Self::Inventory => "Inventory",
            Self::DeadBottles => "Dead Bottles",
            Self::MissingMsds => "Missing MSDS",
            Self::MsdsLog => "MSDS Log",
            Self::ManageDatabase => "Manage Database",
            Self::ManageUsers => "Manage Users",
        }
    }

    /// Dialog opened by the link. `MsdsLog` opens a URL and `ManageDatabase`
    /// is a menu, so neither maps to a dialog.
    pub fn modal(self) -> Option<Modal> {
        match self {
            Self::AddChemical => Some(Modal::AddChemical),
            Self::Inventory => Some(Modal::InventoryAudit),
            Self::DeadBottles => Some(Modal::DeadBottles),
            Self::MissingMsds => Some(Modal::MissingMsds),
            Self::ManageUsers => Some(Modal::ManageUsers),
            Self::MsdsLog | Self::ManageDatabase => None,
        }
    }
}

/// Entries of the "Manage Database" menu.
pub const DATABASE_MENU: [(&str, Modal); 4] = [
    ("Manufacturer List", Modal::Manufacturers),
    ("Location List", Modal::Locations),
    ("Sub Location List", Modal::SubLocations),
    ("Storage Classes", Modal::StorageClasses),
];

/// Navbar links visible at `access`; signed-out users and visitors get none.
pub fn nav_items(access: Option<AccessLevel>) -> Vec<NavItem> {
    let Some(access) = access.filter(|a| a.can_edit()) else {
        return Vec::new();
    };
    let mut items = vec![
        NavItem::AddChemical,
        NavItem::Inventory,
        NavItem::DeadBottles,
        NavItem::MissingMsds,
        NavItem::MsdsLog,
        NavItem::ManageDatabase,
    ];
    if access.is_full() {
        items.push(NavItem::ManageUsers);
    }
    items
}

/// Whether a dialog may be shown at `access`.
pub fn may_open(modal: Modal, access: Option<AccessLevel>) -> bool {
    let access = access.unwrap_or_default();
    if modal.requires_full_access() {
        access.is_full()
    } else if modal.requires_editor() {
        access.can_edit()
    } else {
        true
    }
}
