//! Login page handing off to the GitHub OAuth flow.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::auth::{AuthState, SessionStatus};

/// Server route that starts the OAuth redirect.
pub const GITHUB_SIGN_IN_PATH: &str = "/auth/github";

pub(crate) fn login_message(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Loading => "Checking session...",
        SessionStatus::SignedIn => "You are already signed in.",
        SessionStatus::SignedOut => "Sign in to manage the shop.",
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Barber App"</h1>
                <p class="login-card__subtitle">{move || login_message(auth.with(AuthState::status))}</p>
                <Show
                    when=move || auth.with(AuthState::status) == SessionStatus::SignedIn
                    fallback=|| {
                        view! {
                            <a href=GITHUB_SIGN_IN_PATH rel="external" class="login-button">
                                "Sign in with GitHub"
                            </a>
                        }
                    }
                >
                    <a href="/" class="login-button">"Go to home"</a>
                </Show>
            </div>
        </div>
    }
}
