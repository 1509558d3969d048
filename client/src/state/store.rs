//! Centralized application store.
//!
//! ARCHITECTURE
//! ============
//! `Store` owns one `RwSignal<AppState>`. The root reducer routes each
//! `AppAction` to the slice reducer registered for it; `dispatch` is the only
//! mutation path. The store is constructed once in `StoreProvider` and reached
//! through Leptos context by `use_app_selector` / `use_app_dispatch`, never
//! through a static.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use leptos::prelude::*;

use super::data::{self, DataAction, DataState};

/// Full state tree. One field per registered slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub data: DataState,
}

impl AppState {
    /// Names of the registered slices, in registration order.
    pub const SLICES: &'static [&'static str] = &["data"];
}

/// Actions accepted by the store, tagged by the slice they target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppAction {
    Data(DataAction),
}

impl From<DataAction> for AppAction {
    fn from(action: DataAction) -> Self {
        Self::Data(action)
    }
}

/// Root reducer: hand the action to the slice that owns it.
pub fn root_reduce(state: &mut AppState, action: AppAction) {
    match action {
        AppAction::Data(action) => data::reduce(&mut state.data, action),
    }
}

/// Handle to the application store. `Copy`, so it can move into closures freely.
#[derive(Clone, Copy, Debug)]
pub struct Store {
    state: RwSignal<AppState>,
}

impl Store {
    #[must_use]
    pub fn new(initial: AppState) -> Self {
        Self { state: RwSignal::new(initial) }
    }

    /// Store with every slice at its reducer's initial value.
    #[must_use]
    pub fn configure() -> Self {
        Self::new(AppState::default())
    }

    /// Snapshot of the current state. Does not subscribe the caller.
    #[must_use]
    pub fn get_state(&self) -> AppState {
        self.state.get_untracked()
    }

    /// Run `action` through the root reducer.
    pub fn dispatch(&self, action: impl Into<AppAction>) {
        let action = action.into();
        self.state.update(|state| root_reduce(state, action));
    }

    /// Derive a memoized value from the state tree. Subscribers re-run only
    /// when the selected value changes.
    pub fn select<T, F>(&self, selector: F) -> Memo<T>
    where
        T: PartialEq + Send + Sync + 'static,
        F: Fn(&AppState) -> T + Send + Sync + 'static,
    {
        let state = self.state;
        Memo::new(move |_| state.with(|s| selector(s)))
    }

    #[must_use]
    pub fn dispatcher(&self) -> Dispatch {
        Dispatch { store: *self }
    }
}

/// Dispatch handle bound to one store.
#[derive(Clone, Copy, Debug)]
pub struct Dispatch {
    store: Store,
}

impl Dispatch {
    pub fn dispatch(&self, action: impl Into<AppAction>) {
        self.store.dispatch(action);
    }
}

/// The store provided by the nearest `StoreProvider`.
///
/// # Panics
///
/// Panics if called outside a `StoreProvider`.
#[must_use]
pub fn use_store() -> Store {
    expect_context::<Store>()
}

/// Typed read hook: select a value from the provided store.
pub fn use_app_selector<T, F>(selector: F) -> Memo<T>
where
    T: PartialEq + Send + Sync + 'static,
    F: Fn(&AppState) -> T + Send + Sync + 'static,
{
    use_store().select(selector)
}

/// Typed dispatch hook for the provided store.
#[must_use]
pub fn use_app_dispatch() -> Dispatch {
    use_store().dispatcher()
}
