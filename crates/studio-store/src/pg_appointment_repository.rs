//! `PostgreSQL` implementation of the `AppointmentRepository` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{debug, error};
use uuid::Uuid;

use studio_core::appointment::{
    Appointment, AppointmentId, AppointmentPatch, Client, NewAppointment,
};
use studio_core::error::DomainError;
use studio_core::repository::AppointmentRepository;
use studio_core::search::like_contains_pattern;

use crate::schema;

/// PostgreSQL-backed appointment repository.
///
/// Owns a handle on the connection pool built at startup. Identifiers are
/// UUIDs generated by the database; an identifier that is not a UUID cannot
/// resolve to a row and is reported as absent.
#[derive(Debug, Clone)]
pub struct PgAppointmentRepository {
    pool: PgPool,
}

impl PgAppointmentRepository {
    /// Creates a new `PgAppointmentRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AppointmentRow {
    id: Uuid,
    completion_flag: bool,
    client_first_name: String,
    client_last_name: String,
    client_age: i32,
    client_phone: String,
    client_email: String,
    first_appointment_date: DateTime<Utc>,
    subject_tags: Vec<String>,
}

impl From<AppointmentRow> for Appointment {
    fn from(row: AppointmentRow) -> Self {
        Self {
            id: AppointmentId::from(row.id),
            completion_flag: row.completion_flag,
            client: Client {
                first_name: row.client_first_name,
                last_name: row.client_last_name,
                age: row.client_age,
                phone: row.client_phone,
                email: row.client_email,
            },
            first_appointment_date: row.first_appointment_date,
            subject_tags: row.subject_tags,
        }
    }
}

/// Postgres `TEXT` cannot hold U+0000, so such a pattern matches nothing.
fn searchable(pattern: &str) -> bool {
    !pattern.contains('\0')
}

fn row_id(id: &AppointmentId) -> Option<Uuid> {
    Uuid::parse_str(id.as_str()).ok()
}

fn store_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |err| {
        error!(operation, error = %err, "appointment store failure");
        DomainError::Infrastructure(format!("{operation} failed: {err}"))
    }
}

fn into_appointments(rows: Vec<AppointmentRow>) -> Vec<Appointment> {
    rows.into_iter().map(Appointment::from).collect()
}

#[async_trait]
impl AppointmentRepository for PgAppointmentRepository {
    async fn exists(&self, id: &AppointmentId) -> Result<bool, DomainError> {
        let Some(uuid) = row_id(id) else {
            return Ok(false);
        };
        sqlx::query_scalar::<_, bool>(schema::EXISTS)
            .bind(uuid)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error("existence check"))
    }

    async fn find_all(&self) -> Result<Vec<Appointment>, DomainError> {
        let rows = sqlx::query_as::<_, AppointmentRow>(schema::SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("list"))?;
        Ok(into_appointments(rows))
    }

    async fn find_by_id(&self, id: &AppointmentId) -> Result<Option<Appointment>, DomainError> {
        let Some(uuid) = row_id(id) else {
            return Ok(None);
        };
        let row = sqlx::query_as::<_, AppointmentRow>(schema::SELECT_BY_ID)
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error("lookup by id"))?;
        Ok(row.map(Appointment::from))
    }

    async fn find_by_subject_pattern(
        &self,
        pattern: &str,
    ) -> Result<Vec<Appointment>, DomainError> {
        if !searchable(pattern) {
            return Ok(Vec::new());
        }
        let rows = sqlx::query_as::<_, AppointmentRow>(schema::SELECT_BY_SUBJECT_PATTERN)
            .bind(like_contains_pattern(pattern))
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("subject search"))?;
        debug!(pattern, matches = rows.len(), "subject search executed");
        Ok(into_appointments(rows))
    }

    async fn find_by_email_pattern(&self, pattern: &str) -> Result<Vec<Appointment>, DomainError> {
        if !searchable(pattern) {
            return Ok(Vec::new());
        }
        let rows = sqlx::query_as::<_, AppointmentRow>(schema::SELECT_BY_EMAIL_PATTERN)
            .bind(like_contains_pattern(pattern))
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("email search"))?;
        debug!(pattern, matches = rows.len(), "email search executed");
        Ok(into_appointments(rows))
    }

    async fn insert(&self, appointment: &NewAppointment) -> Result<Appointment, DomainError> {
        let row = sqlx::query_as::<_, AppointmentRow>(schema::INSERT)
            .bind(appointment.completion_flag)
            .bind(&appointment.client.first_name)
            .bind(&appointment.client.last_name)
            .bind(appointment.client.age)
            .bind(&appointment.client.phone)
            .bind(&appointment.client.email)
            .bind(appointment.first_appointment_date)
            .bind(appointment.subject_tags.as_slice())
            .fetch_one(&self.pool)
            .await
            .map_err(store_error("insert"))?;
        Ok(Appointment::from(row))
    }

    async fn fetch_and_merge(
        &self,
        id: &AppointmentId,
        patch: &AppointmentPatch,
    ) -> Result<Option<Appointment>, DomainError> {
        let Some(uuid) = row_id(id) else {
            return Ok(None);
        };

        let mut tx = self.pool.begin().await.map_err(store_error("begin update"))?;

        let Some(row) = sqlx::query_as::<_, AppointmentRow>(schema::SELECT_BY_ID_FOR_UPDATE)
            .bind(uuid)
            .fetch_optional(&mut *tx)
            .await
            .map_err(store_error("lock for update"))?
        else {
            return Ok(None);
        };

        let merged = Appointment::from(row).merge(patch);

        sqlx::query(schema::UPDATE)
            .bind(uuid)
            .bind(merged.completion_flag)
            .bind(&merged.client.first_name)
            .bind(&merged.client.last_name)
            .bind(merged.client.age)
            .bind(&merged.client.phone)
            .bind(&merged.client.email)
            .bind(merged.first_appointment_date)
            .bind(merged.subject_tags.as_slice())
            .execute(&mut *tx)
            .await
            .map_err(store_error("update"))?;

        tx.commit().await.map_err(store_error("commit update"))?;

        Ok(Some(merged))
    }

    async fn delete_by_id(&self, id: &AppointmentId) -> Result<bool, DomainError> {
        let Some(uuid) = row_id(id) else {
            return Ok(false);
        };
        let result = sqlx::query(schema::DELETE)
            .bind(uuid)
            .execute(&self.pool)
            .await
            .map_err(store_error("delete"))?;
        Ok(result.rows_affected() > 0)
    }
}
