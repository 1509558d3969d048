//! Shared plumbing for the record REST routes (services, customers, shops).
//!
//! ERROR HANDLING
//! ==============
//! Every failure leaves as `ApiError`, a status plus a JSON `{"message"}`
//! body. `RecordError` maps to 400/404/500/504; database details are logged
//! and never echoed to the client.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use uuid::Uuid;

use crate::services::record::{RecordError, RecordKind};

/// `{ "message": ... }` body shared by errors and mutation acknowledgements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Build a `{ "message": ... }` JSON body.
pub fn message(text: impl Into<String>) -> Json<MessageBody> {
    Json(MessageBody { message: text.into() })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, message(self.message)).into_response()
    }
}

impl From<RecordError> for ApiError {
    fn from(err: RecordError) -> Self {
        let status = record_error_to_status(&err);
        let text = match &err {
            RecordError::NotFound { kind, .. } => format!("{} not found", kind.label()),
            RecordError::Invalid { reason, .. } => reason.clone(),
            RecordError::Timeout => {
                tracing::warn!("database request timed out");
                "Database request timed out".to_owned()
            }
            RecordError::Database(e) => {
                tracing::error!(error = %e, "database query failed");
                "Error querying the database".to_owned()
            }
        };
        Self::new(status, text)
    }
}

pub(crate) fn record_error_to_status(err: &RecordError) -> StatusCode {
    match err {
        RecordError::NotFound { .. } => StatusCode::NOT_FOUND,
        RecordError::Invalid { .. } => StatusCode::BAD_REQUEST,
        RecordError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        RecordError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Parse a path id, answering `400 Invalid <kind> ID` when it is not a UUID.
pub(crate) fn parse_id(kind: RecordKind, raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| ApiError::new(StatusCode::BAD_REQUEST, format!("Invalid {} ID", kind.as_str())))
}

/// Unwrap a JSON body, turning any extractor rejection into `400`.
pub(crate) fn payload<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected request payload");
            Err(ApiError::new(StatusCode::BAD_REQUEST, "Invalid request payload"))
        }
    }
}

pub(crate) fn updated(kind: RecordKind) -> Json<MessageBody> {
    message(format!("{} updated successfully", kind.label()))
}

pub(crate) fn deleted(kind: RecordKind) -> Json<MessageBody> {
    message(format!("{} deleted successfully", kind.label()))
}

#[cfg(test)]
#[path = "records_test.rs"]
mod tests;
