//! Appointment endpoints
//!
//! GET /appointments, POST /appointments

use axum::{extract::State, routing::get, Json, Router};
use salon_common::db::appointments;
use salon_common::Appointment;

use crate::services::{book_appointment, BookingRequest};
use crate::{error::ApiResult, AppState};

/// GET /appointments
///
/// Every appointment, newest first.
pub async fn list_appointments(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Appointment>>> {
    let appointments = appointments::list_appointments(&state.db).await?;
    Ok(Json(appointments))
}

/// POST /appointments
///
/// Body `{client_id?, name?, service}`. Resolves or creates the client, then
/// books. 404 for an unknown `client_id`, 400 when neither id nor name is given.
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> ApiResult<Json<Appointment>> {
    tracing::debug!(?request, "Booking request");

    let booking = book_appointment(&state.db, &request).await?;
    Ok(Json(booking.appointment))
}

/// Build appointment routes
pub fn appointment_routes() -> Router<AppState> {
    Router::new().route("/appointments", get(list_appointments).post(create_appointment))
}
