//! Appointment repository abstraction.

use async_trait::async_trait;

use crate::appointment::{Appointment, AppointmentId, AppointmentPatch, NewAppointment};
use crate::error::DomainError;

/// Repository trait translating domain operations onto the persistent store.
///
/// Implementations perform no business-rule checks. Absence is reported as
/// `false`, `None` or an empty list, never as an error; the only error they
/// produce is `DomainError::Infrastructure`.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Returns whether `id` currently resolves to a stored record.
    async fn exists(&self, id: &AppointmentId) -> Result<bool, DomainError>;

    /// Load every stored record.
    async fn find_all(&self) -> Result<Vec<Appointment>, DomainError>;

    /// Load one record by identifier.
    async fn find_by_id(&self, id: &AppointmentId) -> Result<Option<Appointment>, DomainError>;

    /// Records having at least one subject tag containing `pattern`,
    /// case-insensitively.
    async fn find_by_subject_pattern(&self, pattern: &str)
    -> Result<Vec<Appointment>, DomainError>;

    /// Records whose client email contains `pattern`, case-insensitively.
    async fn find_by_email_pattern(&self, pattern: &str) -> Result<Vec<Appointment>, DomainError>;

    /// Persist a new record; the store assigns its identifier.
    async fn insert(&self, appointment: &NewAppointment) -> Result<Appointment, DomainError>;

    /// Load the record `id`, apply [`Appointment::merge`] with `patch`, and
    /// persist the result. Returns `None` if the record does not exist.
    async fn fetch_and_merge(
        &self,
        id: &AppointmentId,
        patch: &AppointmentPatch,
    ) -> Result<Option<Appointment>, DomainError>;

    /// Delete the record `id`. Returns whether a record was removed.
    async fn delete_by_id(&self, id: &AppointmentId) -> Result<bool, DomainError>;
}
