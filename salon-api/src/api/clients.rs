//! Client endpoints
//!
//! GET /clients, POST /clients, GET /clients/:id, GET /clients/:id/history

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use salon_common::db::{appointments, clients};
use salon_common::{Appointment, Client};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{error::ApiResult, ApiError, AppState};

/// POST /clients request
#[derive(Debug, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// GET /clients
///
/// All clients ordered by name.
pub async fn list_clients(State(state): State<AppState>) -> ApiResult<Json<Vec<Client>>> {
    let clients = clients::list_clients(&state.db).await?;
    Ok(Json(clients))
}

/// POST /clients
///
/// Creates a client with zero visits. Duplicate names are allowed but logged.
pub async fn create_client(
    State(state): State<AppState>,
    Json(request): Json<CreateClientRequest>,
) -> ApiResult<Json<Client>> {
    if request.name.trim().is_empty() {
        return Err(ApiError::BadRequest("name must not be empty".to_string()));
    }

    let phone = request
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());

    let existing = clients::count_clients_named(&state.db, &request.name).await?;
    if existing > 0 {
        warn!(name = %request.name, existing, "Creating client with a name already in use");
    }

    let client = clients::insert_client(&state.db, &request.name, phone).await?;
    info!(client_id = client.id, name = %client.name, "Created client");

    Ok(Json(client))
}

/// GET /clients/:id
pub async fn get_client(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
) -> ApiResult<Json<Client>> {
    let client = clients::get_client(&state.db, client_id)
        .await?
        .ok_or_else(|| salon_common::Error::client_not_found(client_id))?;
    Ok(Json(client))
}

/// GET /clients/:id/history
///
/// The client's appointments, newest first. 404 if the client does not exist.
pub async fn client_history(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
) -> ApiResult<Json<Vec<Appointment>>> {
    if clients::get_client(&state.db, client_id).await?.is_none() {
        return Err(salon_common::Error::client_not_found(client_id).into());
    }

    let history = appointments::list_client_appointments(&state.db, client_id).await?;
    Ok(Json(history))
}

/// Build client routes
pub fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(list_clients).post(create_client))
        .route("/clients/:id", get(get_client))
        .route("/clients/:id/history", get(client_history))
}
