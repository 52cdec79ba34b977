//! Routes for the Appointment Management context.
//!
//! Request bodies are read as raw bytes and handed to the validation
//! gateway, so a missing or unparseable body is reported as the usual
//! missing-parameter error rather than as an extractor rejection.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};
use uuid::Uuid;

use studio_appointments::application::{command_handlers, query_handlers};
use studio_appointments::domain::commands;
use studio_appointments::domain::validation::{
    validate_appointment_patch, validate_new_appointment,
};
use studio_core::appointment::{Appointment, AppointmentId};
use studio_core::error::DomainError;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body carrying a list of appointments.
#[derive(Debug, Serialize)]
pub struct AppointmentsResponse {
    /// The matching appointments.
    pub appointments: Vec<Appointment>,
}

/// Response body carrying a single appointment.
#[derive(Debug, Serialize)]
pub struct AppointmentResponse {
    /// The created, updated or requested appointment.
    pub appointment: Appointment,
}

fn parse_body(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}

/// GET /
#[instrument(skip(state))]
async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<AppointmentsResponse>, ApiError> {
    let appointments = query_handlers::list_appointments(&*state.appointments).await?;
    Ok(Json(AppointmentsResponse { appointments }))
}

/// GET /{id}
#[instrument(skip(state))]
async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AppointmentResponse>, ApiError> {
    let appointment =
        query_handlers::get_appointment_by_id(&AppointmentId::new(id), &*state.appointments)
            .await?;
    Ok(Json(AppointmentResponse { appointment }))
}

/// GET /subject/{subject}
#[instrument(skip(state))]
async fn search_by_subject(
    State(state): State<AppState>,
    Path(subject): Path<String>,
) -> Result<Json<AppointmentsResponse>, ApiError> {
    let appointments = query_handlers::search_by_subject(&subject, &*state.appointments).await?;
    Ok(Json(AppointmentsResponse { appointments }))
}

/// GET /email/{email}
#[instrument(skip(state))]
async fn search_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<AppointmentsResponse>, ApiError> {
    let appointments =
        query_handlers::search_by_client_email(&email, &*state.appointments).await?;
    Ok(Json(AppointmentsResponse { appointments }))
}

/// POST /
#[instrument(skip_all)]
async fn create_appointment(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<AppointmentResponse>), ApiError> {
    let appointment = validate_new_appointment(&parse_body(&body)).map_err(DomainError::from)?;
    let command = commands::CreateAppointment {
        correlation_id: Uuid::new_v4(),
        appointment,
    };

    info!(correlation_id = %command.correlation_id, "handling create_appointment command");

    let appointment =
        command_handlers::handle_create_appointment(&command, &*state.appointments).await?;

    Ok((StatusCode::CREATED, Json(AppointmentResponse { appointment })))
}

/// PUT /
#[instrument(skip_all)]
async fn update_appointment(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AppointmentResponse>, ApiError> {
    let patch = validate_appointment_patch(&parse_body(&body)).map_err(DomainError::from)?;
    let command = commands::UpdateAppointment {
        correlation_id: Uuid::new_v4(),
        patch,
    };

    info!(correlation_id = %command.correlation_id, "handling update_appointment command");

    let appointment =
        command_handlers::handle_update_appointment(&command, &*state.appointments).await?;

    Ok(Json(AppointmentResponse { appointment }))
}

/// DELETE /{id}
#[instrument(skip(state))]
async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let command = commands::DeleteAppointment {
        correlation_id: Uuid::new_v4(),
        appointment_id: AppointmentId::new(id),
    };

    info!(correlation_id = %command.correlation_id, "handling delete_appointment command");

    command_handlers::handle_delete_appointment(&command, &*state.appointments).await?;

    Ok(StatusCode::OK)
}

/// Returns the router for the appointment context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_appointments)
                .post(create_appointment)
                .put(update_appointment),
        )
        .route("/{id}", get(get_appointment).delete(delete_appointment))
        .route("/subject/{subject}", get(search_by_subject))
        .route("/email/{email}", get(search_by_email))
}
