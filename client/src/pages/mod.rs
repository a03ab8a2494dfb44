//! Page modules for route-level screens.
//!
//! The inventory is a single screen; dialogs stand in for sub-pages.

pub mod home;
