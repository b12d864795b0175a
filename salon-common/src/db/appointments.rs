//! Appointment queries

use crate::db::models::Appointment;
use crate::Result;
use chrono::NaiveDateTime;
use sqlx::SqliteExecutor;

const APPOINTMENT_COLUMNS: &str = "id, client_id, service, created_at";

/// Storage format for timestamps written explicitly (matches `datetime('now')`)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// All appointments, newest first
pub async fn list_appointments<'e, E>(executor: E) -> Result<Vec<Appointment>>
where
    E: SqliteExecutor<'e>,
{
    let sql = format!(
        "SELECT {} FROM appointments ORDER BY created_at DESC, id DESC",
        APPOINTMENT_COLUMNS
    );
    let appointments = sqlx::query_as::<_, Appointment>(&sql)
        .fetch_all(executor)
        .await?;
    Ok(appointments)
}

/// One client's appointments, newest first
pub async fn list_client_appointments<'e, E>(
    executor: E,
    client_id: i64,
) -> Result<Vec<Appointment>>
where
    E: SqliteExecutor<'e>,
{
    let sql = format!(
        "SELECT {} FROM appointments WHERE client_id = ? ORDER BY created_at DESC, id DESC",
        APPOINTMENT_COLUMNS
    );
    let appointments = sqlx::query_as::<_, Appointment>(&sql)
        .bind(client_id)
        .fetch_all(executor)
        .await?;
    Ok(appointments)
}

/// Insert an appointment stamped with the current time
///
/// Does not touch the client's visit counter; callers that book must
/// increment it in the same transaction.
pub async fn insert_appointment<'e, E>(
    executor: E,
    client_id: i64,
    service: &str,
) -> Result<Appointment>
where
    E: SqliteExecutor<'e>,
{
    let sql = format!(
        "INSERT INTO appointments (client_id, service) VALUES (?, ?) RETURNING {}",
        APPOINTMENT_COLUMNS
    );
    let appointment = sqlx::query_as::<_, Appointment>(&sql)
        .bind(client_id)
        .bind(service)
        .fetch_one(executor)
        .await?;
    Ok(appointment)
}

/// Insert an appointment with an explicit timestamp (sample data)
pub async fn insert_appointment_at<'e, E>(
    executor: E,
    client_id: i64,
    service: &str,
    created_at: NaiveDateTime,
) -> Result<Appointment>
where
    E: SqliteExecutor<'e>,
{
    let sql = format!(
        "INSERT INTO appointments (client_id, service, created_at) VALUES (?, ?, ?) RETURNING {}",
        APPOINTMENT_COLUMNS
    );
    let appointment = sqlx::query_as::<_, Appointment>(&sql)
        .bind(client_id)
        .bind(service)
        .bind(created_at.format(TIMESTAMP_FORMAT).to_string())
        .fetch_one(executor)
        .await?;
    Ok(appointment)
}
