//! Barber shop REST routes under `/api/shops`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use super::auth::AuthUser;
use super::records::{ApiError, MessageBody, deleted, parse_id, payload, updated};
use crate::services::record::RecordKind;
use crate::services::shop::{self, BarberShop};
use crate::state::AppState;

const KIND: RecordKind = RecordKind::Shop;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<BarberShop>>, ApiError> {
    Ok(Json(shop::list_shops(&state.pool).await?))
}

pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<BarberShop>, JsonRejection>,
) -> Result<(StatusCode, Json<BarberShop>), ApiError> {
    let input = payload(body)?;
    let created = shop::create_shop(&state.pool, input).await?;
    tracing::info!(user_id = %auth.user.id, shop = %created.name, "shop created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_one(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<BarberShop>, ApiError> {
    let id = parse_id(KIND, &id)?;
    Ok(Json(shop::get_shop(&state.pool, id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    body: Result<Json<BarberShop>, JsonRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let id = parse_id(KIND, &id)?;
    let input = payload(body)?;
    shop::update_shop(&state.pool, id, &input).await?;
    tracing::info!(user_id = %auth.user.id, %id, "shop updated");
    Ok(updated(KIND))
}

pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let id = parse_id(KIND, &id)?;
    shop::delete_shop(&state.pool, id).await?;
    tracing::info!(user_id = %auth.user.id, %id, "shop deleted");
    Ok(deleted(KIND))
}
