//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filled once at startup from `GET /api/user` and `GET /api/get_msds_url`.
//! Navbar links and modal actions read it to decide what the user may do.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use records::{AccessLevel, CurrentUser};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<CurrentUser>,
    pub loading: bool,
    /// Stored MSDS log URL; empty when unset.
    pub msds_url: String,
}

impl AuthState {
    /// Access level of the signed-in user, `None` when signed out.
    pub fn access(&self) -> Option<AccessLevel> {
        self.user.as_ref().map(|u| u.access)
    }

    /// Editors and full-access users see the inventory editing links.
    pub fn can_edit(&self) -> bool {
        self.access().is_some_and(AccessLevel::can_edit)
    }

    pub fn is_full(&self) -> bool {
        self.access().is_some_and(AccessLevel::is_full)
    }

    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(|| "Guest".to_owned(), |u| u.name.clone())
    }
}
