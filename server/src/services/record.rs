//! Shared error type and validation helpers for the shop record services.
//!
//! ERROR HANDLING
//! ==============
//! Every query runs under the pool's acquire timeout and the connection's
//! `statement_timeout`. Both surface here as `RecordError::Timeout` so routes
//! can answer `504` instead of a generic database failure.

use uuid::Uuid;

/// Postgres SQLSTATE raised when `statement_timeout` cancels a query.
const QUERY_CANCELED: &str = "57014";

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: Uuid },
    #[error("invalid {kind}: {reason}")]
    Invalid { kind: RecordKind, reason: String },
    #[error("database query timed out")]
    Timeout,
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for RecordError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::PoolTimedOut => Self::Timeout,
            sqlx::Error::Database(db) if db.code().as_deref() == Some(QUERY_CANCELED) => Self::Timeout,
            _ => Self::Database(err),
        }
    }
}

/// The three record collections the API manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Service,
    Customer,
    Shop,
}

impl RecordKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Customer => "customer",
            Self::Shop => "shop",
        }
    }

    /// Capitalized label for user-facing messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Service => "Service",
            Self::Customer => "Customer",
            Self::Shop => "Shop",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn require_text(kind: RecordKind, field: &str, value: &str) -> Result<(), RecordError> {
    if value.trim().is_empty() {
        return Err(RecordError::Invalid { kind, reason: format!("{field} must not be empty") });
    }
    Ok(())
}

pub(crate) fn require_non_negative(kind: RecordKind, field: &str, value: i64) -> Result<(), RecordError> {
    if value < 0 {
        return Err(RecordError::Invalid { kind, reason: format!("{field} must not be negative") });
    }
    Ok(())
}

/// Map a zero-row `UPDATE`/`DELETE` to `NotFound`.
pub(crate) fn ensure_affected(rows: u64, kind: RecordKind, id: Uuid) -> Result<(), RecordError> {
    if rows == 0 {
        return Err(RecordError::NotFound { kind, id });
    }
    Ok(())
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
