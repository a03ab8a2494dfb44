//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page chrome (navbar, sidebar, chemical table) reads shared state from
//! Leptos context. Every dialog fetches the records it shows on mount and
//! reports back only by closing, which bumps `UiState::refresh_seq`.

pub mod add_chemical_modal;
pub mod chemical_edit_modal;
pub mod chemical_modal;
pub mod dead_bottles_modal;
pub mod dialog;
pub mod inventory_audit_modal;
pub mod inventory_edit_modal;
pub mod location_modal;
pub mod location_selector;
pub mod main_content;
pub mod manage_users_modal;
pub mod manufacturer_modal;
pub mod manufacturer_selector;
pub mod missing_msds_modal;
pub mod navbar;
pub mod sidebar;
pub mod status_message;
pub mod storage_class_modal;
pub mod storage_class_selector;
pub mod sub_location_modal;
