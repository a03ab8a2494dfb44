//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure functions kept out of components so the rules they encode (access
//! gating, list filtering, the stale-bottle cutoff, form checks) are testable
//! without a browser.

pub mod access;
pub mod filter;
pub mod form;
pub mod stale;
