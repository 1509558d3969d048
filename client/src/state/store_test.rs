use leptos::reactive::owner::Owner;

use super::*;
use crate::net::types::Service;

fn with_owner<R>(f: impl FnOnce() -> R) -> R {
    let owner = Owner::new();
    owner.set();
    f()
}

fn corte() -> Service {
    Service { id: Some("s-1".to_owned()), name: "Corte".to_owned(), price: 150, duration_minutes: 30 }
}

// =============================================================
// Configuration
// =============================================================

#[test]
fn app_state_registers_only_data_slice() {
    assert_eq!(AppState::SLICES, &["data"]);
}

#[test]
fn get_state_after_configure_is_initial_data() {
    with_owner(|| {
        let store = Store::configure();
        assert_eq!(store.get_state(), AppState { data: DataState::default() });
    });
}

#[test]
fn identity_selector_returns_state_with_data_slice() {
    with_owner(|| {
        let store = Store::configure();
        let whole = store.select(AppState::clone);
        assert_eq!(whole.get_untracked().data, DataState::default());
    });
}

// =============================================================
// Dispatch
// =============================================================

#[test]
fn dispatch_routes_data_actions_to_data_slice() {
    with_owner(|| {
        let store = Store::configure();
        store.dispatch(DataAction::ServicesLoaded(vec![corte()]));
        assert_eq!(store.get_state().data.services, vec![corte()]);
    });
}

#[test]
fn dispatch_that_changes_nothing_leaves_data_unchanged() {
    with_owner(|| {
        let store = Store::configure();
        store.dispatch(DataAction::ServicesLoaded(vec![corte()]));
        let before = store.get_state();
        store.dispatch(AppAction::Data(DataAction::ServicesLoaded(vec![corte()])));
        assert_eq!(store.get_state(), before);
    });
}

#[test]
fn dispatcher_handle_targets_same_store() {
    with_owner(|| {
        let store = Store::configure();
        let dispatch = store.dispatcher();
        dispatch.dispatch(DataAction::LoadStarted);
        assert!(store.get_state().data.loading);
    });
}

#[test]
fn root_reduce_is_usable_without_a_store() {
    let mut state = AppState::default();
    root_reduce(&mut state, AppAction::Data(DataAction::LoadFailed("x".to_owned())));
    assert_eq!(state.data.error.as_deref(), Some("x"));
}

// =============================================================
// Selectors
// =============================================================

#[test]
fn selector_tracks_dispatched_changes() {
    with_owner(|| {
        let store = Store::configure();
        let count = store.select(|s| s.data.services.len());
        assert_eq!(count.get_untracked(), 0);
        store.dispatch(DataAction::ServicesLoaded(vec![corte()]));
        assert_eq!(count.get_untracked(), 1);
    });
}

#[test]
fn hooks_resolve_store_from_context() {
    with_owner(|| {
        let store = Store::configure();
        provide_context(store);

        let loading = use_app_selector(|s| s.data.loading);
        use_app_dispatch().dispatch(DataAction::LoadStarted);
        assert!(loading.get_untracked());
    });
}
