//! Test repositories — `AppointmentRepository` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use studio_core::appointment::{Appointment, AppointmentId, AppointmentPatch, NewAppointment};
use studio_core::error::DomainError;
use studio_core::repository::AppointmentRepository;
use studio_core::search::{any_tag_matches, contains_ignore_case};
use uuid::Uuid;

/// A fully functional in-memory repository. Records are kept in insertion
/// order and identified by random UUIDs. The name of every trait method
/// invoked is logged so tests can assert on call order.
#[derive(Debug, Default)]
pub struct InMemoryAppointmentRepository {
    records: Mutex<Vec<Appointment>>,
    operations: Mutex<Vec<&'static str>>,
}

impl InMemoryAppointmentRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `records`.
    #[must_use]
    pub fn with_records(records: Vec<Appointment>) -> Self {
        Self {
            records: Mutex::new(records),
            operations: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of the stored records.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn records(&self) -> Vec<Appointment> {
        self.records.lock().unwrap().clone()
    }

    /// Returns the names of the repository operations invoked so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn operations(&self) -> Vec<&'static str> {
        self.operations.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str) {
        self.operations.lock().unwrap().push(operation);
    }

    fn filtered(&self, predicate: impl Fn(&Appointment) -> bool) -> Vec<Appointment> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|a| predicate(*a))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn exists(&self, id: &AppointmentId) -> Result<bool, DomainError> {
        self.record("exists");
        Ok(self.records.lock().unwrap().iter().any(|a| &a.id == id))
    }

    async fn find_all(&self) -> Result<Vec<Appointment>, DomainError> {
        self.record("find_all");
        Ok(self.records())
    }

    async fn find_by_id(&self, id: &AppointmentId) -> Result<Option<Appointment>, DomainError> {
        self.record("find_by_id");
        Ok(self.filtered(|a| &a.id == id).into_iter().next())
    }

    async fn find_by_subject_pattern(
        &self,
        pattern: &str,
    ) -> Result<Vec<Appointment>, DomainError> {
        self.record("find_by_subject_pattern");
        Ok(self.filtered(|a| any_tag_matches(&a.subject_tags, pattern)))
    }

    async fn find_by_email_pattern(&self, pattern: &str) -> Result<Vec<Appointment>, DomainError> {
        self.record("find_by_email_pattern");
        Ok(self.filtered(|a| contains_ignore_case(&a.client.email, pattern)))
    }

    async fn insert(&self, appointment: &NewAppointment) -> Result<Appointment, DomainError> {
        self.record("insert");
        let created = appointment
            .clone()
            .with_id(AppointmentId::from(Uuid::new_v4()));
        self.records.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn fetch_and_merge(
        &self,
        id: &AppointmentId,
        patch: &AppointmentPatch,
    ) -> Result<Option<Appointment>, DomainError> {
        self.record("fetch_and_merge");
        let mut records = self.records.lock().unwrap();
        let Some(slot) = records.iter_mut().find(|a| &a.id == id) else {
            return Ok(None);
        };
        *slot = slot.merge(patch);
        Ok(Some(slot.clone()))
    }

    async fn delete_by_id(&self, id: &AppointmentId) -> Result<bool, DomainError> {
        self.record("delete_by_id");
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|a| &a.id != id);
        Ok(records.len() != before)
    }
}

/// A repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingAppointmentRepository;

fn connection_refused<T>() -> Result<T, DomainError> {
    Err(DomainError::Infrastructure("connection refused".into()))
}

#[async_trait]
impl AppointmentRepository for FailingAppointmentRepository {
    async fn exists(&self, _id: &AppointmentId) -> Result<bool, DomainError> {
        connection_refused()
    }

    async fn find_all(&self) -> Result<Vec<Appointment>, DomainError> {
        connection_refused()
    }

    async fn find_by_id(&self, _id: &AppointmentId) -> Result<Option<Appointment>, DomainError> {
        connection_refused()
    }

    async fn find_by_subject_pattern(
        &self,
        _pattern: &str,
    ) -> Result<Vec<Appointment>, DomainError> {
        connection_refused()
    }

    async fn find_by_email_pattern(&self, _pattern: &str) -> Result<Vec<Appointment>, DomainError> {
        connection_refused()
    }

    async fn insert(&self, _appointment: &NewAppointment) -> Result<Appointment, DomainError> {
        connection_refused()
    }

    async fn fetch_and_merge(
        &self,
        _id: &AppointmentId,
        _patch: &AppointmentPatch,
    ) -> Result<Option<Appointment>, DomainError> {
        connection_refused()
    }

    async fn delete_by_id(&self, _id: &AppointmentId) -> Result<bool, DomainError> {
        connection_refused()
    }
}

/// Wraps another repository and pretends every existence check succeeds.
/// Simulates a record deleted between the check and the act.
#[derive(Debug)]
pub struct StaleExistenceRepository<R>(pub R);

#[async_trait]
impl<R: AppointmentRepository> AppointmentRepository for StaleExistenceRepository<R> {
    async fn exists(&self, _id: &AppointmentId) -> Result<bool, DomainError> {
        Ok(true)
    }

    async fn find_all(&self) -> Result<Vec<Appointment>, DomainError> {
        self.0.find_all().await
    }

    async fn find_by_id(&self, id: &AppointmentId) -> Result<Option<Appointment>, DomainError> {
        self.0.find_by_id(id).await
    }

    async fn find_by_subject_pattern(
        &self,
        pattern: &str,
    ) -> Result<Vec<Appointment>, DomainError> {
        self.0.find_by_subject_pattern(pattern).await
    }

    async fn find_by_email_pattern(&self, pattern: &str) -> Result<Vec<Appointment>, DomainError> {
        self.0.find_by_email_pattern(pattern).await
    }

    async fn insert(&self, appointment: &NewAppointment) -> Result<Appointment, DomainError> {
        self.0.insert(appointment).await
    }

    async fn fetch_and_merge(
        &self,
        id: &AppointmentId,
        patch: &AppointmentPatch,
    ) -> Result<Option<Appointment>, DomainError> {
        self.0.fetch_and_merge(id, patch).await
    }

    async fn delete_by_id(&self, id: &AppointmentId) -> Result<bool, DomainError> {
        self.0.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[tokio::test]
    async fn test_insert_assigns_identifier_and_keeps_fields() {
        let repo = InMemoryAppointmentRepository::new();
        let input = fixtures::jacques_dupont();

        let created = repo.insert(&input).await.unwrap();

        assert!(!created.id.as_str().is_empty());
        assert_eq!(created.details(), input);
        assert!(repo.exists(&created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_fetch_and_merge_returns_none_for_unknown_id() {
        let repo = InMemoryAppointmentRepository::new();
        let id = AppointmentId::new("missing");

        let merged = repo
            .fetch_and_merge(&id, &AppointmentPatch::for_id(id.clone()))
            .await
            .unwrap();

        assert!(merged.is_none());
    }

    #[tokio::test]
    async fn test_delete_by_id_reports_whether_a_record_was_removed() {
        let repo = InMemoryAppointmentRepository::with_records(fixtures::studio_records());
        let id = fixtures::studio_records()[0].id.clone();

        assert!(repo.delete_by_id(&id).await.unwrap());
        assert!(!repo.delete_by_id(&id).await.unwrap());
        assert_eq!(repo.records().len(), 2);
    }

    #[tokio::test]
    async fn test_operations_are_logged_in_call_order() {
        let repo = InMemoryAppointmentRepository::new();
        let id = AppointmentId::new("x");

        repo.exists(&id).await.unwrap();
        repo.find_by_id(&id).await.unwrap();

        assert_eq!(repo.operations(), vec!["exists", "find_by_id"]);
    }
}
