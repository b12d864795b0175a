//! Client queries

use crate::db::models::Client;
use crate::{Error, Result};
use sqlx::SqliteExecutor;

const CLIENT_COLUMNS: &str = "id, name, phone, created_at, total_visits";

/// All clients ordered by name (id breaks ties between equal names)
pub async fn list_clients<'e, E>(executor: E) -> Result<Vec<Client>>
where
    E: SqliteExecutor<'e>,
{
    let sql = format!("SELECT {} FROM clients ORDER BY name ASC, id ASC", CLIENT_COLUMNS);
    let clients = sqlx::query_as::<_, Client>(&sql)
        .fetch_all(executor)
        .await?;
    Ok(clients)
}

/// Load a client by id
pub async fn get_client<'e, E>(executor: E, client_id: i64) -> Result<Option<Client>>
where
    E: SqliteExecutor<'e>,
{
    let sql = format!("SELECT {} FROM clients WHERE id = ?", CLIENT_COLUMNS);
    let client = sqlx::query_as::<_, Client>(&sql)
        .bind(client_id)
        .fetch_optional(executor)
        .await?;
    Ok(client)
}

/// First client (lowest id) whose name matches exactly
pub async fn find_client_by_name<'e, E>(executor: E, name: &str) -> Result<Option<Client>>
where
    E: SqliteExecutor<'e>,
{
    let sql = format!(
        "SELECT {} FROM clients WHERE name = ? ORDER BY id ASC LIMIT 1",
        CLIENT_COLUMNS
    );
    let client = sqlx::query_as::<_, Client>(&sql)
        .bind(name)
        .fetch_optional(executor)
        .await?;
    Ok(client)
}

/// Number of clients sharing an exact name
pub async fn count_clients_named<'e, E>(executor: E, name: &str) -> Result<i64>
where
    E: SqliteExecutor<'e>,
{
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients WHERE name = ?")
        .bind(name)
        .fetch_one(executor)
        .await?;
    Ok(count)
}

/// Insert a client with zero visits and return the stored row
pub async fn insert_client<'e, E>(executor: E, name: &str, phone: Option<&str>) -> Result<Client>
where
    E: SqliteExecutor<'e>,
{
    let sql = format!(
        "INSERT INTO clients (name, phone) VALUES (?, ?) RETURNING {}",
        CLIENT_COLUMNS
    );
    let client = sqlx::query_as::<_, Client>(&sql)
        .bind(name)
        .bind(phone)
        .fetch_one(executor)
        .await?;
    Ok(client)
}

/// Add one visit to a client's counter
///
/// Fails with `NotFound` if the client row no longer exists.
pub async fn increment_visits<'e, E>(executor: E, client_id: i64) -> Result<()>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("UPDATE clients SET total_visits = total_visits + 1 WHERE id = ?")
        .bind(client_id)
        .execute(executor)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::client_not_found(client_id));
    }
    Ok(())
}

/// Recompute every client's counter from the appointments table
///
/// Returns the number of client rows updated.
pub async fn recount_visits<'e, E>(executor: E) -> Result<u64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        r#"
        UPDATE clients
        SET total_visits = (
            SELECT COUNT(*) FROM appointments WHERE appointments.client_id = clients.id
        )
        "#,
    )
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
