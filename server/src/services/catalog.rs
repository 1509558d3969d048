//! Service catalog: the haircuts, shaves and treatments the shop sells.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use super::record::{RecordError, RecordKind, ensure_affected, require_non_negative, require_text};

const KIND: RecordKind = RecordKind::Service;

/// A sellable service. `_id` is omitted on create and assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    /// Price in whole currency units.
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub duration_minutes: i64,
}

impl Service {
    /// # Errors
    ///
    /// Returns [`RecordError::Invalid`] for a blank name or a negative price/duration.
    pub fn validate(&self) -> Result<(), RecordError> {
        require_text(KIND, "name", &self.name)?;
        require_non_negative(KIND, "price", self.price)?;
        require_non_negative(KIND, "duration_minutes", self.duration_minutes)
    }
}

type ServiceRow = (Uuid, String, i64, i64);

fn from_row((id, name, price, duration_minutes): ServiceRow) -> Service {
    Service { id: Some(id), name, price, duration_minutes }
}

/// List all services, oldest first.
///
/// # Errors
///
/// Returns a database or timeout error if the query fails.
pub async fn list_services(pool: &PgPool) -> Result<Vec<Service>, RecordError> {
    let rows = sqlx::query_as::<_, ServiceRow>(
        "SELECT id, name, price, duration_minutes FROM services ORDER BY created_at, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(from_row).collect())
}

/// Fetch one service.
///
/// # Errors
///
/// Returns [`RecordError::NotFound`] if no service has this id.
pub async fn get_service(pool: &PgPool, id: Uuid) -> Result<Service, RecordError> {
    sqlx::query_as::<_, ServiceRow>("SELECT id, name, price, duration_minutes FROM services WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .map(from_row)
        .ok_or(RecordError::NotFound { kind: KIND, id })
}

/// Insert a new service and return it with its assigned id.
///
/// # Errors
///
/// Returns a validation, database or timeout error.
pub async fn create_service(pool: &PgPool, input: Service) -> Result<Service, RecordError> {
    input.validate()?;
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO services (id, name, price, duration_minutes) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(&input.name)
        .bind(input.price)
        .bind(input.duration_minutes)
        .execute(pool)
        .await?;
    Ok(Service { id: Some(id), ..input })
}

/// Overwrite name, price and duration of an existing service.
///
/// # Errors
///
/// Returns a validation error, or [`RecordError::NotFound`] if the id is unknown.
pub async fn update_service(pool: &PgPool, id: Uuid, input: &Service) -> Result<(), RecordError> {
    input.validate()?;
    let result = sqlx::query("UPDATE services SET name = $2, price = $3, duration_minutes = $4 WHERE id = $1")
        .bind(id)
        .bind(&input.name)
        .bind(input.price)
        .bind(input.duration_minutes)
        .execute(pool)
        .await?;
    ensure_affected(result.rows_affected(), KIND, id)
}

/// Delete a service.
///
/// # Errors
///
/// Returns [`RecordError::NotFound`] if the id is unknown.
pub async fn delete_service(pool: &PgPool, id: Uuid) -> Result<(), RecordError> {
    let result = sqlx::query("DELETE FROM services WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    ensure_affected(result.rows_affected(), KIND, id)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
