//! Customer records and their visit history.
//!
//! DESIGN
//! ======
//! `services_received` is stored as a JSONB array on the customer row. It is
//! always read and written whole, so a separate join table buys nothing.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use super::record::{RecordError, RecordKind, ensure_affected, require_text};

const KIND: RecordKind = RecordKind::Customer;

/// One service a customer received, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceVisit {
    pub service_id: Uuid,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub last_visit: String,
    #[serde(default)]
    pub services_received: Vec<ServiceVisit>,
}

impl Customer {
    /// # Errors
    ///
    /// Returns [`RecordError::Invalid`] for a blank name, or an email without `@`.
    pub fn validate(&self) -> Result<(), RecordError> {
        require_text(KIND, "name", &self.name)?;
        if !self.email.is_empty() && !self.email.contains('@') {
            return Err(RecordError::Invalid { kind: KIND, reason: "email must contain '@'".into() });
        }
        Ok(())
    }
}

type CustomerRow = (Uuid, String, String, String, String, Json<Vec<ServiceVisit>>);

fn from_row((id, name, phone, email, last_visit, visits): CustomerRow) -> Customer {
    Customer { id: Some(id), name, phone, email, last_visit, services_received: visits.0 }
}

const SELECT_COLUMNS: &str = "SELECT id, name, phone, email, last_visit, services_received FROM customers";

/// List all customers, oldest first.
///
/// # Errors
///
/// Returns a database or timeout error if the query fails.
pub async fn list_customers(pool: &PgPool) -> Result<Vec<Customer>, RecordError> {
    let rows = sqlx::query_as::<_, CustomerRow>(&format!("{SELECT_COLUMNS} ORDER BY created_at, id"))
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(from_row).collect())
}

/// Fetch one customer.
///
/// # Errors
///
/// Returns [`RecordError::NotFound`] if no customer has this id.
pub async fn get_customer(pool: &PgPool, id: Uuid) -> Result<Customer, RecordError> {
    sqlx::query_as::<_, CustomerRow>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .map(from_row)
        .ok_or(RecordError::NotFound { kind: KIND, id })
}

/// Insert a new customer and return it with its assigned id.
///
/// # Errors
///
/// Returns a validation, database or timeout error.
pub async fn create_customer(pool: &PgPool, input: Customer) -> Result<Customer, RecordError> {
    input.validate()?;
    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO customers (id, name, phone, email, last_visit, services_received)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(id)
    .bind(&input.name)
    .bind(&input.phone)
    .bind(&input.email)
    .bind(&input.last_visit)
    .bind(Json(&input.services_received))
    .execute(pool)
    .await?;
    Ok(Customer { id: Some(id), ..input })
}

/// Overwrite every field of an existing customer.
///
/// # Errors
///
/// Returns a validation error, or [`RecordError::NotFound`] if the id is unknown.
pub async fn update_customer(pool: &PgPool, id: Uuid, input: &Customer) -> Result<(), RecordError> {
    input.validate()?;
    let result = sqlx::query(
        "UPDATE customers
         SET name = $2, phone = $3, email = $4, last_visit = $5, services_received = $6
         WHERE id = $1",
    )
    .bind(id)
    .bind(&input.name)
    .bind(&input.phone)
    .bind(&input.email)
    .bind(&input.last_visit)
    .bind(Json(&input.services_received))
    .execute(pool)
    .await?;
    ensure_affected(result.rows_affected(), KIND, id)
}

/// Delete a customer.
///
/// # Errors
///
/// Returns [`RecordError::NotFound`] if the id is unknown.
pub async fn delete_customer(pool: &PgPool, id: Uuid) -> Result<(), RecordError> {
    let result = sqlx::query("DELETE FROM customers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    ensure_affected(result.rows_affected(), KIND, id)
}

#[cfg(test)]
#[path = "customer_test.rs"]
mod tests;
