//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and persistence concerns so route
//! handlers can stay focused on protocol translation and auth plumbing.
//! Each module exposes its own `thiserror` enum whose `Display` strings are
//! the messages API clients see.

pub mod auth;
pub mod chemical;
pub mod export;
pub mod inventory;
pub mod location;
pub mod manufacturer;
pub mod msds;
pub mod pubchem;
pub mod search;
pub mod session;
pub mod storage_class;
pub mod user;

/// Current UTC calendar date, used for `last_updated` stamps.
#[must_use]
pub fn today() -> time::Date {
    time::OffsetDateTime::now_utc().date()
}
