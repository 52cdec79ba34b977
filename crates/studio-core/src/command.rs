//! Command abstractions for the write side of the service layer.

use uuid::Uuid;

use crate::appointment::AppointmentId;

/// Trait implemented by every write request handled by the service layer.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Stable name used in log fields, e.g. `appointment.create`.
    fn command_type(&self) -> &'static str;

    /// Correlation ID to trace this command through the system.
    fn correlation_id(&self) -> Uuid;

    /// The appointment this command targets, when known before it runs.
    fn target(&self) -> Option<&AppointmentId>;
}
