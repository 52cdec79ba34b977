//! The appointment record and its embedded client.
//!
//! An [`Appointment`] is what the store holds. A [`NewAppointment`] is a
//! validated candidate that has not been assigned an identifier yet, and an
//! [`AppointmentPatch`] is the sparse input of a merge update.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque appointment identifier assigned by the store on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(String);

impl AppointmentId {
    /// Wraps a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Uuid> for AppointmentId {
    fn from(id: Uuid) -> Self {
        Self(id.to_string())
    }
}

/// The client an appointment is booked for. Has no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Client first name.
    pub first_name: String,
    /// Client last name.
    pub last_name: String,
    /// Client age in years; at least 18 for any accepted record.
    pub age: i32,
    /// Contact phone number.
    pub phone: String,
    /// Contact email address.
    pub email: String,
}

/// A validated appointment that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    /// Whether the tattoo work is finished.
    pub completion_flag: bool,
    /// The client.
    pub client: Client,
    /// Date of the first session.
    pub first_appointment_date: DateTime<Utc>,
    /// Subject tags describing the tattoo, at least one.
    pub subject_tags: Vec<String>,
}

impl NewAppointment {
    /// Attaches the store-assigned identifier.
    #[must_use]
    pub fn with_id(self, id: AppointmentId) -> Appointment {
        Appointment {
            id,
            completion_flag: self.completion_flag,
            client: self.client,
            first_appointment_date: self.first_appointment_date,
            subject_tags: self.subject_tags,
        }
    }
}

/// A persisted appointment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Store-assigned identifier, immutable once set.
    pub id: AppointmentId,
    /// Whether the tattoo work is finished.
    pub completion_flag: bool,
    /// The client.
    pub client: Client,
    /// Date of the first session.
    pub first_appointment_date: DateTime<Utc>,
    /// Subject tags describing the tattoo.
    pub subject_tags: Vec<String>,
}

impl Appointment {
    /// Returns the record without its identifier.
    #[must_use]
    pub fn details(&self) -> NewAppointment {
        NewAppointment {
            completion_flag: self.completion_flag,
            client: self.client.clone(),
            first_appointment_date: self.first_appointment_date,
            subject_tags: self.subject_tags.clone(),
        }
    }

    /// Applies a merge update: every field supplied in `patch` replaces the
    /// stored value, every omitted field is kept. The identifier never
    /// changes, whatever `patch.id` holds.
    #[must_use]
    pub fn merge(&self, patch: &AppointmentPatch) -> Appointment {
        Appointment {
            id: self.id.clone(),
            completion_flag: patch.completion_flag.unwrap_or(self.completion_flag),
            client: patch.client.clone().unwrap_or_else(|| self.client.clone()),
            first_appointment_date: patch
                .first_appointment_date
                .unwrap_or(self.first_appointment_date),
            subject_tags: patch
                .subject_tags
                .clone()
                .unwrap_or_else(|| self.subject_tags.clone()),
        }
    }
}

/// Sparse input of a merge update. `None` means "keep the stored value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentPatch {
    /// Identifier of the record to update; required by the service layer.
    pub id: Option<AppointmentId>,
    /// New completion flag.
    pub completion_flag: Option<bool>,
    /// Replacement client.
    pub client: Option<Client>,
    /// New first appointment date.
    pub first_appointment_date: Option<DateTime<Utc>>,
    /// Replacement subject tags.
    pub subject_tags: Option<Vec<String>>,
}

impl AppointmentPatch {
    /// A patch targeting `id` that changes nothing yet.
    #[must_use]
    pub fn for_id(id: AppointmentId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Returns `true` when the patch carries no field change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completion_flag.is_none()
            && self.client.is_none()
            && self.first_appointment_date.is_none()
            && self.subject_tags.is_none()
    }
}
