//! PostgreSQL persistence for appointment records.

pub mod pg_appointment_repository;
pub mod schema;
