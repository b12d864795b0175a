//! Appointment booking
//!
//! Resolves the client (by id, or by name with create-if-absent), writes the
//! appointment and bumps the client's visit counter. All three steps share
//! one transaction: either the client, appointment and counter changes are
//! all committed, or none are.

use salon_common::db::{appointments, begin_write, clients};
use salon_common::{Appointment, Client, Error, Result};
use serde::Deserialize;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{debug, info};

/// Booking input as received from `POST /appointments`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub client_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    pub service: String,
}

/// How the caller identified the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientRef<'a> {
    Id(i64),
    Name(&'a str),
}

impl BookingRequest {
    /// Pick the client reference; the id wins when both are present
    ///
    /// A blank name is treated as missing.
    pub fn client_ref(&self) -> Result<ClientRef<'_>> {
        if let Some(id) = self.client_id {
            return Ok(ClientRef::Id(id));
        }
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => Ok(ClientRef::Name(name)),
            _ => Err(Error::InvalidInput(
                "Either client_id or name must be provided.".to_string(),
            )),
        }
    }
}

/// Result of a successful booking
#[derive(Debug, Clone)]
pub struct Booking {
    pub appointment: Appointment,
    /// Client state after the booking committed
    pub client: Client,
    /// True when the client was created by this booking
    pub client_created: bool,
}

/// Find the referenced client, creating one when resolving by an unknown name
///
/// Returns the client and whether it was created.
pub async fn resolve_client(
    conn: &mut SqliteConnection,
    client_ref: ClientRef<'_>,
) -> Result<(Client, bool)> {
    match client_ref {
        ClientRef::Id(id) => {
            let client = clients::get_client(&mut *conn, id)
                .await?
                .ok_or_else(|| Error::client_not_found(id))?;
            Ok((client, false))
        }
        ClientRef::Name(name) => {
            if let Some(client) = clients::find_client_by_name(&mut *conn, name).await? {
                debug!(client_id = client.id, "Resolved client by name");
                return Ok((client, false));
            }
            let client = clients::insert_client(&mut *conn, name, None).await?;
            info!(client_id = client.id, name = %client.name, "Created client during booking");
            Ok((client, true))
        }
    }
}

/// Insert the appointment and count the visit
///
/// Fails if the client row is gone; the caller's transaction must then be
/// rolled back so no orphaned appointment survives.
pub async fn record_appointment(
    conn: &mut SqliteConnection,
    client: &Client,
    service: &str,
) -> Result<Appointment> {
    let appointment = appointments::insert_appointment(&mut *conn, client.id, service).await?;
    clients::increment_visits(&mut *conn, client.id).await?;
    Ok(appointment)
}

/// Book an appointment end to end
///
/// Input is validated before the transaction opens, so rejected requests
/// never touch the store. The transaction holds the write lock from the
/// start, so concurrent bookings under one new name resolve to one client.
pub async fn book_appointment(pool: &SqlitePool, request: &BookingRequest) -> Result<Booking> {
    if request.service.trim().is_empty() {
        return Err(Error::InvalidInput("service must not be empty".to_string()));
    }
    let client_ref = request.client_ref()?;

    let mut tx = begin_write(pool).await?;
    let (client, client_created) = resolve_client(&mut tx, client_ref).await?;
    let appointment = record_appointment(&mut tx, &client, &request.service).await?;
    tx.commit().await?;

    info!(
        appointment_id = appointment.id,
        client_id = client.id,
        service = %appointment.service,
        "Booked appointment"
    );

    let client = Client {
        total_visits: client.total_visits + 1,
        ..client
    };

    Ok(Booking {
        appointment,
        client,
        client_created,
    })
}
