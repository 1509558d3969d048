//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so session and
//! record fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{BarberShop, Customer, Service, User};

/// REST collections exposed by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Services,
    Customers,
    Shops,
}

impl Resource {
    #[must_use]
    pub fn collection_path(self) -> &'static str {
        match self {
            Self::Services => "/api/services",
            Self::Customers => "/api/customers",
            Self::Shops => "/api/shops",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Customers => "customers",
            Self::Shops => "shops",
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(resource: Resource, status: u16) -> String {
    format!("{} request failed: {status}", resource.label())
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_list<T: serde::de::DeserializeOwned>(resource: Resource) -> Result<Vec<T>, String> {
    let resp = gloo_net::http::Request::get(resource.collection_path())
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(resource, resp.status()));
    }
    resp.json::<Vec<T>>().await.map_err(|e| e.to_string())
}

/// Fetch every service via `GET /api/services`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_services() -> Result<Vec<Service>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_list(Resource::Services).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch every customer via `GET /api/customers`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_customers() -> Result<Vec<Customer>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_list(Resource::Customers).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch every shop record via `GET /api/shops`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_shops() -> Result<Vec<BarberShop>, String> {
    #[cfg(feature = "hydrate")]
    {
        fetch_list(Resource::Shops).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
