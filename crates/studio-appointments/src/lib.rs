//! Tattoo studio — Appointment Management bounded context.
//!
//! Responsible for validating incoming appointment records, enforcing
//! existence and identity rules, merge updates, and subject/email search.

pub mod application;
pub mod domain;
