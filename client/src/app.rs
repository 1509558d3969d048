//! Root application component, document shell and context providers.
//!
//! DESIGN
//! ======
//! The store and the auth session are each constructed exactly once, by
//! `StoreProvider` and `AuthProvider`, and handed to descendants through Leptos
//! context. Pages never build either themselves.
//!
//! TESTING
//! =======
//! The rendering tests in `app_test.rs` call `to_html` and only compile with
//! the `ssr` feature: `cargo test -p client --features ssr`, or
//! `cargo test --workspace`, where `server` turns `ssr` on. A plain
//! `cargo test -p client` runs the reducer, store and helper tests only.

#[cfg(all(test, feature = "ssr"))]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::state::store::Store;

pub const APP_TITLE: &str = "Barber App";
pub const APP_DESCRIPTION: &str = "app para gestionar barberia";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/barberia.css"/>
        <Title text=APP_TITLE/>
        <Meta name="description" content=APP_DESCRIPTION/>

        <StoreProvider>
            <AuthProvider>
                <Router>
                    <RootLayout>
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=StaticSegment("") view=HomePage/>
                            <Route path=StaticSegment("home") view=HomePage/>
                            <Route path=StaticSegment("login") view=LoginPage/>
                        </Routes>
                    </RootLayout>
                </Router>
            </AuthProvider>
        </StoreProvider>
    }
}

/// Page chrome shared by every route. Renders `children` unchanged inside it.
#[component]
pub fn RootLayout(children: Children) -> impl IntoView {
    view! { <div class="root-layout">{children()}</div> }
}

/// Configures the application store and provides it to descendants.
#[component]
pub fn StoreProvider(children: Children) -> impl IntoView {
    provide_context(Store::configure());
    children()
}

/// Provides the auth session and, once hydrated, resolves it from the server.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = RwSignal::new(AuthState::pending());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.update(|a| a.resolve(user));
    });

    children()
}
