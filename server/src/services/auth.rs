//! GitHub OAuth service — code exchange, profile fetch, user upsert.

use sqlx::{PgPool, Row};
use uuid::Uuid;

const AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
const TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
const USER_URL: &str = "https://api.github.com/user";

/// GitHub OAuth configuration loaded from environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl GitHubConfig {
    /// Read `GITHUB_CLIENT_ID`, `GITHUB_CLIENT_SECRET`, `GITHUB_REDIRECT_URI`
    /// from `lookup`. Returns `None` if any is missing or blank (sign-in disabled).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Some(Self {
            client_id: non_empty("GITHUB_CLIENT_ID")?,
            client_secret: non_empty("GITHUB_CLIENT_SECRET")?,
            redirect_uri: non_empty("GITHUB_REDIRECT_URI")?,
        })
    }

    /// Build the GitHub authorization URL carrying the CSRF `state`.
    #[must_use]
    pub fn authorize_url(&self, state: &str) -> String {
        let params = [
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("scope", "read:user"),
            ("state", state),
        ];
        reqwest::Url::parse_with_params(AUTHORIZE_URL, &params)
            .map_or_else(|_| AUTHORIZE_URL.to_owned(), String::from)
    }
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct GitHubUser {
    pub id: i64,
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

impl GitHubUser {
    /// Profile name when set, login otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.login)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("github token exchange failed: {0}")]
    TokenExchange(String),
    #[error("github api error: {0}")]
    GitHubApi(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Exchange an OAuth code for an access token.
///
/// # Errors
///
/// Returns [`AuthError::TokenExchange`] if GitHub is unreachable or answers
/// without an access token.
pub async fn exchange_code(config: &GitHubConfig, code: &str) -> Result<String, AuthError> {
    let client = reqwest::Client::new();
    let resp = client
        .post(TOKEN_URL)
        .header("Accept", "application/json")
        .json(&serde_json::json!({
            "client_id": config.client_id,
            "client_secret": config.client_secret,
            "code": code,
            "redirect_uri": config.redirect_uri,
        }))
        .send()
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

    let body = resp
        .text()
        .await
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;
    parse_token_response(&body)
}

pub(crate) fn parse_token_response(body: &str) -> Result<String, AuthError> {
    let token_resp: TokenResponse =
        serde_json::from_str(body).map_err(|_| AuthError::TokenExchange(format!("unexpected response: {body}")))?;
    Ok(token_resp.access_token)
}

/// Fetch the authenticated GitHub user's profile.
///
/// # Errors
///
/// Returns [`AuthError::GitHubApi`] on transport failure or a non-success status.
pub async fn fetch_github_user(access_token: &str) -> Result<GitHubUser, AuthError> {
    let client = reqwest::Client::new();
    let resp = client
        .get(USER_URL)
        .header("Authorization", format!("Bearer {access_token}"))
        .header("User-Agent", "barberia")
        .send()
        .await
        .map_err(|e| AuthError::GitHubApi(e.to_string()))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(AuthError::GitHubApi(format!("{status}: {body}")));
    }

    resp.json::<GitHubUser>()
        .await
        .map_err(|e| AuthError::GitHubApi(e.to_string()))
}

/// Upsert a user from their GitHub profile. Returns the user's UUID.
///
/// # Errors
///
/// Returns [`AuthError::Db`] if the upsert fails.
pub async fn upsert_user(pool: &PgPool, gh: &GitHubUser) -> Result<Uuid, AuthError> {
    let row = sqlx::query(
        r"INSERT INTO users (github_id, name, avatar_url)
          VALUES ($1, $2, $3)
          ON CONFLICT (github_id) DO UPDATE SET name = EXCLUDED.name, avatar_url = EXCLUDED.avatar_url
          RETURNING id",
    )
    .bind(gh.id)
    .bind(gh.display_name())
    .bind(&gh.avatar_url)
    .fetch_one(pool)
    .await?;
    Ok(row.get("id"))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
