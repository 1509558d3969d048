//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `store` holds the centralized reducer-driven state tree (currently the
//! `data` slice); `auth` is the session context and lives outside the store.

pub mod auth;
pub mod data;
pub mod store;
