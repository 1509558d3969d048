//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from the Leptos context providers set up by
//! the root layout.

pub mod user_button;
