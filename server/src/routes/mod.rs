//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API (`/api/...`), the OAuth endpoints
//! (`/auth/...`) and Leptos SSR rendering under a single Axum router. Anything
//! the API does not claim is rendered by the Leptos app; compiled WASM, JS and
//! CSS are served from `/pkg`.

pub mod auth;
pub mod customers;
pub mod records;
pub mod services;
pub mod shops;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Plain-text banner answered at `GET /api`.
pub const API_BANNER: &str = "API BARBER!";

/// JSON API and OAuth routes, without the Leptos frontend.
pub(crate) fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api", get(banner))
        .route("/auth/github", get(auth::github_redirect))
        .route("/auth/github/callback", get(auth::github_callback))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/services", get(services::list).post(services::create))
        .route(
            "/api/services/{id}",
            get(services::get_one).put(services::update).delete(services::delete),
        )
        .route("/api/customers", get(customers::list).post(customers::create))
        .route(
            "/api/customers/{id}",
            get(customers::get_one).put(customers::update).delete(customers::delete),
        )
        .route("/api/shops", get(shops::list).post(shops::create))
        .route(
            "/api/shops/{id}",
            get(shops::get_one).put(shops::update).delete(shops::delete),
        )
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes + Leptos SSR for every page route + static `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn banner() -> &'static str {
    API_BANNER
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
