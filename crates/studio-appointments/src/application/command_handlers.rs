//! Command handlers for the Appointment Management context.
//!
//! This module contains application-level command handler functions that
//! enforce the identity and existence rules before delegating to the
//! repository: confirm the target exists, then act.

use studio_core::appointment::Appointment;
use studio_core::command::Command;
use studio_core::error::DomainError;
use studio_core::repository::AppointmentRepository;
use tracing::{debug, info, instrument, warn};

use crate::application::query_handlers::not_found;
use crate::domain::commands::{CreateAppointment, DeleteAppointment, UpdateAppointment};

/// Handles the `CreateAppointment` command: persists the validated record and
/// returns it with its store-assigned identifier.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the store fails.
#[instrument(skip_all, fields(
    command = command.command_type(),
    correlation_id = %command.correlation_id(),
))]
pub async fn handle_create_appointment(
    command: &CreateAppointment,
    repo: &dyn AppointmentRepository,
) -> Result<Appointment, DomainError> {
    let created = repo.insert(&command.appointment).await?;
    info!(appointment_id = %created.id, "appointment created");
    Ok(created)
}

/// Handles the `UpdateAppointment` command: checks the identifier, confirms
/// the record exists, and merges the supplied fields into it.
///
/// # Errors
///
/// Returns `DomainError::MissingIdentifier` if the patch carries no id.
/// Returns `DomainError::NotFound` if the id does not resolve to a record.
/// Returns `DomainError::Infrastructure` if the store fails.
#[instrument(skip_all, fields(
    command = command.command_type(),
    correlation_id = %command.correlation_id(),
))]
pub async fn handle_update_appointment(
    command: &UpdateAppointment,
    repo: &dyn AppointmentRepository,
) -> Result<Appointment, DomainError> {
    let Some(id) = command.target() else {
        return Err(DomainError::MissingIdentifier);
    };

    if !repo.exists(id).await? {
        return Err(not_found());
    }

    if command.patch.is_empty() {
        debug!(appointment_id = %id, "update carries no field change");
    }

    let Some(merged) = repo.fetch_and_merge(id, &command.patch).await? else {
        warn!(appointment_id = %id, "appointment vanished between check and update");
        return Err(not_found());
    };

    info!(appointment_id = %id, "appointment updated");
    Ok(merged)
}

/// Handles the `DeleteAppointment` command: confirms the record exists and
/// removes it.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the id does not resolve to a record.
/// Returns `DomainError::Infrastructure` if the store fails.
#[instrument(skip_all, fields(
    command = command.command_type(),
    correlation_id = %command.correlation_id(),
    appointment_id = %command.appointment_id,
))]
pub async fn handle_delete_appointment(
    command: &DeleteAppointment,
    repo: &dyn AppointmentRepository,
) -> Result<(), DomainError> {
    let id = &command.appointment_id;

    if !repo.exists(id).await? {
        return Err(not_found());
    }

    if !repo.delete_by_id(id).await? {
        warn!("appointment vanished between check and delete");
        return Err(not_found());
    }

    info!("appointment deleted");
    Ok(())
}
