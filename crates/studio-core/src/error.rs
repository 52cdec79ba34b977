//! Domain error types.

use serde::Serialize;
use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Incoming record data failed validation.
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    /// An update was requested without an appointment identifier.
    #[error("The appointment identifier is required.")]
    MissingIdentifier,

    /// The requested identifier or search did not resolve to any record.
    #[error("{0}")]
    NotFound(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

/// A validation failure attached to a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dotted path of the offending field, e.g. `client.age`.
    pub field: String,
    /// Human-readable message describing the broken rule.
    pub message: String,
}

impl FieldError {
    /// Creates a new `FieldError`.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Structured result of a failed validation: a summary message plus the
/// per-field failures that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
pub struct ValidationErrors {
    /// Summary message surfaced to callers.
    pub message: String,
    /// Individual field failures. Empty when the whole parameter was missing.
    pub fields: Vec<FieldError>,
}

impl ValidationErrors {
    /// The required top-level parameter is absent or not an object.
    #[must_use]
    pub fn missing_parameter(name: &str) -> Self {
        Self {
            message: format!("Missing or invalid parameter \"{name}\"."),
            fields: Vec::new(),
        }
    }

    /// Builds the error from collected field failures. `subject` names the
    /// record being validated and prefixes the summary message.
    #[must_use]
    pub fn from_fields(subject: &str, fields: Vec<FieldError>) -> Self {
        let details = fields
            .iter()
            .map(|f| format!("{}: {}", f.field, f.message))
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            message: format!("{subject} validation failed: {details}"),
            fields,
        }
    }

    /// Returns the message recorded for `field`, if any.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_message_names_the_parameter() {
        let err = ValidationErrors::missing_parameter("appointment");

        assert_eq!(err.message, "Missing or invalid parameter \"appointment\".");
        assert!(err.fields.is_empty());
    }

    #[test]
    fn test_from_fields_joins_field_messages_into_summary() {
        let err = ValidationErrors::from_fields(
            "Appointment",
            vec![
                FieldError::new("client.age", "Client must be an adult."),
                FieldError::new("client.email", "Client email is invalid."),
            ],
        );

        assert_eq!(
            err.message,
            "Appointment validation failed: client.age: Client must be an adult., \
             client.email: Client email is invalid."
        );
        assert_eq!(err.message_for("client.email"), Some("Client email is invalid."));
        assert_eq!(err.message_for("subjectTags"), None);
    }

    #[test]
    fn test_validation_domain_error_displays_summary_only() {
        let err: DomainError = ValidationErrors::missing_parameter("appointment").into();

        assert_eq!(err.to_string(), "Missing or invalid parameter \"appointment\".");
    }
}
