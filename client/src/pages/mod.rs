//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `home` is the landing page at `/` and `/home`; `login` starts GitHub
//! sign-in. Pages read the store through the typed hooks in `state::store`.

pub mod home;
pub mod login;
