//! Session management.
//!
//! ARCHITECTURE
//! ============
//! HTTP auth uses long-lived opaque session tokens stored in Postgres and
//! carried in an HttpOnly cookie. Expiry is enforced in the lookup query, so
//! stale rows are harmless until they are cleaned up.

use std::fmt::Write;
use std::time::Duration;

use rand::Rng;
use sqlx::{PgPool, Row};
use tracing::{info, warn};
use uuid::Uuid;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// User row returned from session validation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionUser {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
    /// Identity provider that created the user (e.g. `"github"`).
    pub auth_method: String,
}

/// Create a session for the given user, returning the token.
pub async fn create_session(pool: &PgPool, user_id: Uuid) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO sessions (token, user_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token and return the associated user.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionUser>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT
              u.id,
              u.name,
              u.avatar_url,
              CASE WHEN u.github_id IS NOT NULL THEN 'github' ELSE 'session' END AS auth_method
          FROM sessions s
          JOIN users u ON u.id = s.user_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| SessionUser {
        id: r.get("id"),
        name: r.get("name"),
        avatar_url: r.get("avatar_url"),
        auth_method: r.get("auth_method"),
    }))
}

/// Delete a session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove expired sessions. Returns the number of rows deleted.
pub async fn purge_expired_sessions(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= now()")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Periodically purge expired sessions until the runtime shuts down.
pub fn spawn_session_sweeper(pool: PgPool, every: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            match purge_expired_sessions(&pool).await {
                Ok(0) => {}
                Ok(purged) => info!(purged, "expired sessions removed"),
                Err(e) => warn!(error = %e, "session sweep failed"),
            }
        }
    })
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
