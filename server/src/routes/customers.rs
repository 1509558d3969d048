//! Customer REST routes under `/api/customers`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use super::auth::AuthUser;
use super::records::{ApiError, MessageBody, deleted, parse_id, payload, updated};
use crate::services::customer::{self, Customer};
use crate::services::record::RecordKind;
use crate::state::AppState;

const KIND: RecordKind = RecordKind::Customer;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Customer>>, ApiError> {
    Ok(Json(customer::list_customers(&state.pool).await?))
}

pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<Customer>, JsonRejection>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let input = payload(body)?;
    let created = customer::create_customer(&state.pool, input).await?;
    tracing::info!(user_id = %auth.user.id, customer_id = ?created.id, "customer created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_one(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Customer>, ApiError> {
    let id = parse_id(KIND, &id)?;
    Ok(Json(customer::get_customer(&state.pool, id).await?))
}

/// Replaces every field, including the visit history.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    body: Result<Json<Customer>, JsonRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let id = parse_id(KIND, &id)?;
    let input = payload(body)?;
    customer::update_customer(&state.pool, id, &input).await?;
    tracing::info!(user_id = %auth.user.id, %id, "customer updated");
    Ok(updated(KIND))
}

pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let id = parse_id(KIND, &id)?;
    customer::delete_customer(&state.pool, id).await?;
    tracing::info!(user_id = %auth.user.id, %id, "customer deleted");
    Ok(deleted(KIND))
}
