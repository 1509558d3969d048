//! # client
//!
//! Leptos + WASM frontend for the barber shop management app.
//!
//! This crate contains the root layout and context providers, the
//! reducer-driven application store, pages, the account widget, and the
//! REST helpers. The `server` crate links it with the `ssr` feature; the
//! browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
