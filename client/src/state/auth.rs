//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the header to coordinate login redirects and
//! identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the first `/api/auth/me` lookup settles.
    pub loading: bool,
}

impl AuthState {
    /// State before the session lookup has returned.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// Settle the lookup. `None` means signed out.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }
}
