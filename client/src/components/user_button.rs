//! Account widget: session status, sign-out, post-sign-out redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the auth context provided by `AuthProvider`. Identity itself is
//! delegated to the external OAuth provider; this widget only renders the
//! session and ends it.

#[cfg(test)]
#[path = "user_button_test.rs"]
mod user_button_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::auth::{AuthState, SessionStatus};

/// Up to two uppercase initials for the avatar fallback.
pub(crate) fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() { "?".to_owned() } else { letters }
}

/// Account button. After sign-out the browser is sent to `after_sign_out_url`.
#[component]
pub fn UserButton(#[prop(into)] after_sign_out_url: String) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let menu_open = RwSignal::new(false);
    let target = after_sign_out_url.clone();

    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        menu_open.set(false);
        #[cfg(feature = "hydrate")]
        {
            let target = target.clone();
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(AuthState::sign_out);
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&target);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &target;
        }
    };

    let signed_in = move |user: User| {
        let on_sign_out = on_sign_out.clone();
        let title = user.name.clone();
        let badge = match user.avatar_url.clone() {
            Some(url) => view! { <img class="user-button__avatar-img" src=url alt=title.clone()/> }.into_any(),
            None => view! { <span class="user-button__initials">{initials(&user.name)}</span> }.into_any(),
        };
        view! {
            <button
                class="user-button__avatar"
                title=title
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {badge}
            </button>
            {move || {
                let on_sign_out = on_sign_out.clone();
                let name = user.name.clone();
                let method = user.auth_method.clone();
                menu_open.get().then(|| {
                    view! {
                        <div class="user-button__menu">
                            <span class="user-button__name">{name}</span>
                            <span class="user-button__method">{method}</span>
                            <button class="btn user-button__sign-out" on:click=on_sign_out>
                                "Sign out"
                            </button>
                        </div>
                    }
                })
            }}
        }
        .into_any()
    };

    view! {
        <div class="user-button" data-after-sign-out-url=after_sign_out_url>
            {move || {
                let state = auth.get();
                match (state.status(), state.user) {
                    (SessionStatus::SignedIn, Some(user)) => signed_in(user),
                    (SessionStatus::Loading, _) => {
                        view! { <span class="user-button__placeholder" aria-busy="true"></span> }.into_any()
                    }
                    _ => view! { <a class="user-button__sign-in" href="/login" rel="external">"Sign in"</a> }.into_any(),
                }
            }}
        </div>
    }
}
