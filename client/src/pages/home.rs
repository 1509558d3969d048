//! Landing page: shop summary plus the account widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted under `/` and `/home`. Selects a summary of the `data` slice (not
//! the whole tree, so unrelated state changes do not re-render it) and, once
//! hydrated, loads shop records from the REST API into the store.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::user_button::UserButton;
use crate::net::types::{BarberShop, Customer, Service};
use crate::state::data::{DataAction, DataSummary};
use crate::state::store::{use_app_dispatch, use_app_selector};

/// Where the account widget sends the browser after sign-out.
pub const AFTER_SIGN_OUT_URL: &str = "/";

/// Translate the three list fetches into store actions.
///
/// Successful lists are always applied; the first failure is reported last so
/// the slice ends with `loading == false` and the error set.
pub(crate) fn load_actions(
    shops: Result<Vec<BarberShop>, String>,
    services: Result<Vec<Service>, String>,
    customers: Result<Vec<Customer>, String>,
) -> Vec<DataAction> {
    let mut actions = Vec::with_capacity(4);
    let mut failure = None;

    match shops {
        Ok(items) => actions.push(DataAction::ShopsLoaded(items)),
        Err(e) => failure = failure.or(Some(e)),
    }
    match services {
        Ok(items) => actions.push(DataAction::ServicesLoaded(items)),
        Err(e) => failure = failure.or(Some(e)),
    }
    match customers {
        Ok(items) => actions.push(DataAction::CustomersLoaded(items)),
        Err(e) => failure = failure.or(Some(e)),
    }

    if let Some(message) = failure {
        actions.push(DataAction::LoadFailed(message));
    }
    actions
}

pub(crate) fn summary_line(summary: &DataSummary) -> String {
    let shop = summary.shop_name.as_deref().unwrap_or("No shop registered");
    format!("{shop} · {} services · {} customers", summary.service_count, summary.customer_count)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let summary = use_app_selector(|state| state.data.summary());
    let dispatch = use_app_dispatch();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        dispatch.dispatch(DataAction::LoadStarted);
        let shops = crate::net::api::fetch_shops().await;
        let services = crate::net::api::fetch_services().await;
        let customers = crate::net::api::fetch_customers().await;
        for action in load_actions(shops, services, customers) {
            if let DataAction::LoadFailed(message) = &action {
                log::warn!("home data load failed: {message}");
            }
            dispatch.dispatch(action);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = dispatch;

    view! {
        <main class="home-page">
            <div class="home-page__bar">
                "home"
                <UserButton after_sign_out_url=AFTER_SIGN_OUT_URL/>
            </div>
            <section class="home-page__summary">
                {move || {
                    let s = summary.get();
                    if s.loading {
                        view! { <p class="home-page__status">"Loading..."</p> }.into_any()
                    } else {
                        view! { <p class="home-page__status">{summary_line(&s)}</p> }.into_any()
                    }
                }}
                <Show when=move || summary.get().error.is_some()>
                    <p class="home-page__error">{move || summary.get().error.unwrap_or_default()}</p>
                </Show>
            </section>
        </main>
    }
}
