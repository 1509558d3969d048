//! The `data` slice: shop records loaded from the REST API.
//!
//! DESIGN
//! ======
//! `reduce` is the only way this slice changes. It is a plain function over
//! `&mut DataState` so it can be unit-tested without a reactive runtime; the
//! store wraps it in a signal update.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use crate::net::types::{BarberShop, Customer, Service};

/// Shop records mirrored from the server plus request status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataState {
    pub services: Vec<Service>,
    pub customers: Vec<Customer>,
    pub shops: Vec<BarberShop>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Actions accepted by the `data` reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataAction {
    LoadStarted,
    LoadFailed(String),
    ServicesLoaded(Vec<Service>),
    CustomersLoaded(Vec<Customer>),
    ShopsLoaded(Vec<BarberShop>),
}

/// Apply one action to the slice.
pub fn reduce(state: &mut DataState, action: DataAction) {
    match action {
        DataAction::LoadStarted => {
            state.loading = true;
            state.error = None;
        }
        DataAction::LoadFailed(message) => {
            state.loading = false;
            state.error = Some(message);
        }
        DataAction::ServicesLoaded(items) => {
            state.services = items;
            state.loading = false;
        }
        DataAction::CustomersLoaded(items) => {
            state.customers = items;
            state.loading = false;
        }
        DataAction::ShopsLoaded(items) => {
            state.shops = items;
            state.loading = false;
        }
    }
}

/// Compact view of the slice used by the home page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataSummary {
    pub shop_name: Option<String>,
    pub service_count: usize,
    pub customer_count: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl DataState {
    #[must_use]
    pub fn summary(&self) -> DataSummary {
        DataSummary {
            shop_name: self.shops.first().map(|shop| shop.name.clone()),
            service_count: self.services.len(),
            customer_count: self.customers.len(),
            loading: self.loading,
            error: self.error.clone(),
        }
    }
}
