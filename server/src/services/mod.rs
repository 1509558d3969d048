//! Service layer modules.
//!
//! ARCHITECTURE
//! ============
//! Route handlers stay thin and delegate persistence and identity work here.
//! `catalog`, `customer` and `shop` own the three record tables and share the
//! error type in `record`; `auth` and `session` implement sign-in.

pub mod auth;
pub mod catalog;
pub mod customer;
pub mod record;
pub mod session;
pub mod shop;
