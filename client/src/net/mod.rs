//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the inventory REST endpoints; `pubchem` fetches the public
//! compound description and structure image shown in the chemical view.

pub mod api;
pub mod pubchem;
