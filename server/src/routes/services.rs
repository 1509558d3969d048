//! Service catalog REST routes under `/api/services`.
//!
//! Reads are public; writes require a session (`AuthUser`).

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use super::auth::AuthUser;
use super::records::{ApiError, MessageBody, deleted, parse_id, payload, updated};
use crate::services::catalog::{self, Service};
use crate::services::record::RecordKind;
use crate::state::AppState;

const KIND: RecordKind = RecordKind::Service;

/// `GET /api/services`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Service>>, ApiError> {
    Ok(Json(catalog::list_services(&state.pool).await?))
}

/// `POST /api/services`
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<Service>, JsonRejection>,
) -> Result<(StatusCode, Json<Service>), ApiError> {
    let input = payload(body)?;
    let created = catalog::create_service(&state.pool, input).await?;
    tracing::info!(user_id = %auth.user.id, service = %created.name, "service created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/services/{id}`
pub async fn get_one(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Service>, ApiError> {
    let id = parse_id(KIND, &id)?;
    Ok(Json(catalog::get_service(&state.pool, id).await?))
}

/// `PUT /api/services/{id}`
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    body: Result<Json<Service>, JsonRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let id = parse_id(KIND, &id)?;
    let input = payload(body)?;
    catalog::update_service(&state.pool, id, &input).await?;
    tracing::info!(user_id = %auth.user.id, %id, "service updated");
    Ok(updated(KIND))
}

/// `DELETE /api/services/{id}`
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let id = parse_id(KIND, &id)?;
    catalog::delete_service(&state.pool, id).await?;
    tracing::info!(user_id = %auth.user.id, %id, "service deleted");
    Ok(deleted(KIND))
}
