//! Commands for the Appointment Management context.

use studio_core::appointment::{AppointmentId, AppointmentPatch, NewAppointment};
use studio_core::command::Command;
use uuid::Uuid;

/// Command to book a new appointment.
#[derive(Debug, Clone)]
pub struct CreateAppointment {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The validated record to persist.
    pub appointment: NewAppointment,
}

/// Command to merge changes into an existing appointment.
#[derive(Debug, Clone)]
pub struct UpdateAppointment {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The sparse changes, including the target identifier.
    pub patch: AppointmentPatch,
}

/// Command to delete an appointment.
#[derive(Debug, Clone)]
pub struct DeleteAppointment {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The appointment identifier.
    pub appointment_id: AppointmentId,
}

impl Command for CreateAppointment {
    fn command_type(&self) -> &'static str {
        "appointment.create"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn target(&self) -> Option<&AppointmentId> {
        None
    }
}

impl Command for UpdateAppointment {
    fn command_type(&self) -> &'static str {
        "appointment.update"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn target(&self) -> Option<&AppointmentId> {
        self.patch.id.as_ref()
    }
}

impl Command for DeleteAppointment {
    fn command_type(&self) -> &'static str {
        "appointment.delete"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn target(&self) -> Option<&AppointmentId> {
        Some(&self.appointment_id)
    }
}
