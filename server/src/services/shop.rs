//! Barber shop contact records.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use super::record::{RecordError, RecordKind, ensure_affected, require_text};

const KIND: RecordKind = RecordKind::Shop;

/// Name, address and phone of a shop. The name travels as `barber_shop`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarberShop {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(rename = "barber_shop")]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
}

impl BarberShop {
    /// # Errors
    ///
    /// Returns [`RecordError::Invalid`] for a blank shop name.
    pub fn validate(&self) -> Result<(), RecordError> {
        require_text(KIND, "barber_shop", &self.name)
    }
}

type ShopRow = (Uuid, String, String, String);

fn from_row((id, name, address, phone): ShopRow) -> BarberShop {
    BarberShop { id: Some(id), name, address, phone }
}

/// List all shops, oldest first.
///
/// # Errors
///
/// Returns a database or timeout error if the query fails.
pub async fn list_shops(pool: &PgPool) -> Result<Vec<BarberShop>, RecordError> {
    let rows =
        sqlx::query_as::<_, ShopRow>("SELECT id, name, address, phone FROM barber_shops ORDER BY created_at, id")
            .fetch_all(pool)
            .await?;
    Ok(rows.into_iter().map(from_row).collect())
}

/// Fetch one shop.
///
/// # Errors
///
/// Returns [`RecordError::NotFound`] if no shop has this id.
pub async fn get_shop(pool: &PgPool, id: Uuid) -> Result<BarberShop, RecordError> {
    sqlx::query_as::<_, ShopRow>("SELECT id, name, address, phone FROM barber_shops WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .map(from_row)
        .ok_or(RecordError::NotFound { kind: KIND, id })
}

/// Insert a new shop and return it with its assigned id.
///
/// # Errors
///
/// Returns a validation, database or timeout error.
pub async fn create_shop(pool: &PgPool, input: BarberShop) -> Result<BarberShop, RecordError> {
    input.validate()?;
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO barber_shops (id, name, address, phone) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(&input.name)
        .bind(&input.address)
        .bind(&input.phone)
        .execute(pool)
        .await?;
    Ok(BarberShop { id: Some(id), ..input })
}

/// Overwrite name, address and phone of an existing shop.
///
/// # Errors
///
/// Returns a validation error, or [`RecordError::NotFound`] if the id is unknown.
pub async fn update_shop(pool: &PgPool, id: Uuid, input: &BarberShop) -> Result<(), RecordError> {
    input.validate()?;
    let result = sqlx::query("UPDATE barber_shops SET name = $2, address = $3, phone = $4 WHERE id = $1")
        .bind(id)
        .bind(&input.name)
        .bind(&input.address)
        .bind(&input.phone)
        .execute(pool)
        .await?;
    ensure_affected(result.rows_affected(), KIND, id)
}

/// Delete a shop.
///
/// # Errors
///
/// Returns [`RecordError::NotFound`] if the id is unknown.
pub async fn delete_shop(pool: &PgPool, id: Uuid) -> Result<(), RecordError> {
    let result = sqlx::query("DELETE FROM barber_shops WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    ensure_affected(result.rows_affected(), KIND, id)
}

#[cfg(test)]
#[path = "shop_test.rs"]
mod tests;
