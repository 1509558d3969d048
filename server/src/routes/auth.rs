//! Auth routes: GitHub OAuth sign-in, current user, sign-out.
//!
//! DESIGN
//! ======
//! Sessions are opaque tokens in an HttpOnly `session_token` cookie. The OAuth
//! round-trip is CSRF-protected by a short-lived `oauth_state` cookie that
//! must match the `state` query parameter on callback.

use axum::extract::{FromRef, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use super::records::ApiError;
use crate::services::{auth as auth_svc, session};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";
pub(crate) const OAUTH_STATE_COOKIE_NAME: &str = "oauth_state";
const OAUTH_STATE_TTL_MINUTES: i64 = 10;
/// Where a declined GitHub authorization lands.
pub(crate) const SIGN_IN_DECLINED_REDIRECT: &str = "/login";

/// HttpOnly, `SameSite=Lax`, path `/`. `max_age` of `None` is a browser-session cookie.
pub(crate) fn auth_cookie(name: &'static str, value: String, secure: bool, max_age: Option<Duration>) -> Cookie<'static> {
    let mut builder = Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure);
    if let Some(age) = max_age {
        builder = builder.max_age(age);
    }
    builder.build()
}

fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    auth_cookie(name, String::new(), secure, Some(Duration::ZERO))
}

fn oauth_unavailable() -> Response {
    ApiError::new(StatusCode::SERVICE_UNAVAILABLE, "GitHub OAuth not configured").into_response()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let unauthorized = || ApiError::new(StatusCode::UNAUTHORIZED, "Authentication required");

        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(unauthorized());
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session lookup failed");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Error querying the database")
            })?
            .ok_or_else(unauthorized)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /auth/github` — set the state cookie and redirect to GitHub.
pub async fn github_redirect(State(state): State<AppState>) -> Response {
    let Some(config) = &state.github else {
        return oauth_unavailable();
    };

    let oauth_state = session::generate_token();
    let cookie = auth_cookie(
        OAUTH_STATE_COOKIE_NAME,
        oauth_state.clone(),
        state.cookie_secure,
        Some(Duration::minutes(OAUTH_STATE_TTL_MINUTES)),
    );

    let jar = CookieJar::new().add(cookie);
    (jar, Redirect::temporary(&config.authorize_url(&oauth_state))).into_response()
}

/// GitHub sends `code` on approval and `error` (e.g. `access_denied`) when
/// the user declines. Every field is optional so a malformed callback still
/// gets a JSON error instead of an extractor rejection.
#[derive(Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
    state: Option<String>,
    error: Option<String>,
}

/// `true` when the callback `state` matches the cookie issued by [`github_redirect`].
pub(crate) fn oauth_state_matches(expected: Option<&str>, received: Option<&str>) -> bool {
    matches!((expected, received), (Some(e), Some(r)) if !e.is_empty() && e == r)
}

/// `GET /auth/github/callback` — exchange code, upsert user, start session, redirect to `/`.
pub async fn github_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<CallbackQuery>,
) -> Response {
    let Some(config) = &state.github else {
        return oauth_unavailable();
    };
    let secure = state.cookie_secure;

    let expected = jar.get(OAUTH_STATE_COOKIE_NAME).map(Cookie::value);
    if !oauth_state_matches(expected, params.state.as_deref()) {
        tracing::warn!("oauth callback with mismatched state");
        return ApiError::new(StatusCode::UNAUTHORIZED, "Invalid OAuth state").into_response();
    }

    if let Some(reason) = params.error.as_deref() {
        tracing::info!(%reason, "github sign-in declined");
        let jar = jar.add(expired_cookie(OAUTH_STATE_COOKIE_NAME, secure));
        return (jar, Redirect::temporary(SIGN_IN_DECLINED_REDIRECT)).into_response();
    }
    let Some(code) = params.code.as_deref().filter(|c| !c.is_empty()) else {
        return ApiError::new(StatusCode::BAD_REQUEST, "Missing OAuth code").into_response();
    };

    let signed_in = async {
        let access_token = auth_svc::exchange_code(config, code).await?;
        let gh_user = auth_svc::fetch_github_user(&access_token).await?;
        let user_id = auth_svc::upsert_user(&state.pool, &gh_user).await?;
        tracing::info!(%user_id, login = %gh_user.login, "github sign-in");
        session::create_session(&state.pool, user_id)
            .await
            .map_err(auth_svc::AuthError::from)
    }
    .await;

    let token = match signed_in {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(error = %e, "github sign-in failed");
            return ApiError::new(auth_error_to_status(&e), "GitHub sign-in failed").into_response();
        }
    };

    let jar = jar
        .add(auth_cookie(COOKIE_NAME, token, secure, None))
        .add(expired_cookie(OAUTH_STATE_COOKIE_NAME, secure));
    (jar, Redirect::temporary("/")).into_response()
}

/// Upstream GitHub failures are `502`; our own database failures are `500`.
pub(crate) fn auth_error_to_status(err: &auth_svc::AuthError) -> StatusCode {
    match err {
        auth_svc::AuthError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, user_id = %auth.user.id, "session delete failed");
    }

    let jar = CookieJar::new().add(expired_cookie(COOKIE_NAME, state.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
