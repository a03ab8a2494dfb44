//! Shared reactive state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entities are never cached here: components fetch what they render. These
//! modules hold only session identity, sidebar filters, which dialog is open,
//! the add-chemical wizard's progress and the audit walkthrough.

pub mod audit;
pub mod auth;
pub mod filters;
pub mod ui;
pub mod wizard;
