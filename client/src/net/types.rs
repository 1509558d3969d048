//! Shared REST DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON bodies field-for-field (including the
//! `_id` and `barber_shop` keys) so serde round-trips stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A service offered by the shop (haircut, shave, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Record identifier (UUID string). Absent on create requests.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Price in whole currency units.
    pub price: i64,
    pub duration_minutes: i64,
}

/// One service a customer received, and when.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceVisit {
    pub service_id: String,
    pub date: String,
}

/// A shop customer with their visit history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
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

/// Contact record for a barber shop location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarberShop {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "barber_shop")]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
}

/// Authenticated user returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
    /// Authentication method used to create the session (e.g. `"github"`).
    #[serde(default = "default_auth_method")]
    pub auth_method: String,
}

fn default_auth_method() -> String {
    "session".to_owned()
}
