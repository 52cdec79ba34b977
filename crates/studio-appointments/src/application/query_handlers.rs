//! Query handlers for the Appointment Management context.
//!
//! Reads never mutate. Lookups by identifier confirm existence first so that
//! absence is classified here rather than by the store.

use studio_core::appointment::{Appointment, AppointmentId};
use studio_core::error::DomainError;
use studio_core::repository::AppointmentRepository;
use tracing::{debug, instrument};

use crate::application::{APPOINTMENT_NOT_FOUND_ERR, NO_EMAIL_MATCH_ERR, NO_SUBJECT_MATCH_ERR};

pub(crate) fn not_found() -> DomainError {
    DomainError::NotFound(APPOINTMENT_NOT_FOUND_ERR.to_owned())
}

/// Lists every stored appointment. An empty store yields an empty list.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the store fails.
#[instrument(skip(repo))]
pub async fn list_appointments(
    repo: &dyn AppointmentRepository,
) -> Result<Vec<Appointment>, DomainError> {
    let appointments = repo.find_all().await?;
    debug!(count = appointments.len(), "listed appointments");
    Ok(appointments)
}

/// Retrieves one appointment by identifier.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the identifier does not resolve to a
/// stored record.
/// Returns `DomainError::Infrastructure` if the store fails.
#[instrument(skip_all, fields(appointment_id = %id))]
pub async fn get_appointment_by_id(
    id: &AppointmentId,
    repo: &dyn AppointmentRepository,
) -> Result<Appointment, DomainError> {
    if !repo.exists(id).await? {
        return Err(not_found());
    }
    repo.find_by_id(id).await?.ok_or_else(not_found)
}

/// Finds appointments having a subject tag that contains `subject`,
/// ignoring case.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no appointment matches.
/// Returns `DomainError::Infrastructure` if the store fails.
#[instrument(skip(repo))]
pub async fn search_by_subject(
    subject: &str,
    repo: &dyn AppointmentRepository,
) -> Result<Vec<Appointment>, DomainError> {
    let appointments = repo.find_by_subject_pattern(subject).await?;
    if appointments.is_empty() {
        return Err(DomainError::NotFound(NO_SUBJECT_MATCH_ERR.to_owned()));
    }
    debug!(count = appointments.len(), "subject search matched");
    Ok(appointments)
}

/// Finds appointments whose client email contains `email`, ignoring case.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no appointment matches.
/// Returns `DomainError::Infrastructure` if the store fails.
#[instrument(skip(repo))]
pub async fn search_by_client_email(
    email: &str,
    repo: &dyn AppointmentRepository,
) -> Result<Vec<Appointment>, DomainError> {
    let appointments = repo.find_by_email_pattern(email).await?;
    if appointments.is_empty() {
        return Err(DomainError::NotFound(NO_EMAIL_MATCH_ERR.to_owned()));
    }
    debug!(count = appointments.len(), "email search matched");
    Ok(appointments)
}
