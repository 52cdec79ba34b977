//! Application layer: the command and query handlers forming the service
//! layer above the repository.

pub mod command_handlers;
pub mod query_handlers;

/// Message of the not-found error raised for an unknown identifier.
pub const APPOINTMENT_NOT_FOUND_ERR: &str = "Appointment not found";

/// Message of the not-found error raised by an empty subject search.
pub const NO_SUBJECT_MATCH_ERR: &str = "No appointment found for this subject.";

/// Message of the not-found error raised by an empty email search.
pub const NO_EMAIL_MATCH_ERR: &str = "No appointment found with this email.";
