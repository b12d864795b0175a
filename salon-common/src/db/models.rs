//! Database row models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A salon customer
///
/// `total_visits` mirrors the number of appointments referencing this client.
/// The booking path keeps it in sync; the store does not enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
    pub total_visits: i64,
}

/// A single booked service for one client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Appointment {
    pub id: i64,
    pub client_id: i64,
    /// Free text as entered, not normalized
    pub service: String,
    pub created_at: NaiveDateTime,
}
