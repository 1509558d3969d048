//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided by `AuthProvider` and read by the account widget and the login
//! page to decide between signed-in and signed-out rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

/// Coarse session status for rendering decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    SignedIn,
    SignedOut,
}

impl AuthState {
    /// State used before the first `/api/auth/me` round-trip completes.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match (&self.user, self.loading) {
            (Some(_), _) => SessionStatus::SignedIn,
            (None, true) => SessionStatus::Loading,
            (None, false) => SessionStatus::SignedOut,
        }
    }

    /// Record the result of a session lookup.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Forget the current user after sign-out.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }
}
