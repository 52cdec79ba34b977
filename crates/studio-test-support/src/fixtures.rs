//! Sample records shared by unit and integration tests.

use chrono::{TimeZone, Utc};
use studio_core::appointment::{Appointment, AppointmentId, Client, NewAppointment};

/// The record used in the end-to-end walkthrough: Jacques Dupont, not yet
/// completed, dragon and tribal tags.
///
/// # Panics
///
/// Never in practice; the fixed date is valid.
#[must_use]
pub fn jacques_dupont() -> NewAppointment {
    NewAppointment {
        completion_flag: false,
        client: Client {
            first_name: "Jacques".to_owned(),
            last_name: "Dupont".to_owned(),
            age: 28,
            phone: "514-555-1234".to_owned(),
            email: "jacques.dupont@example.com".to_owned(),
        },
        first_appointment_date: Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
        subject_tags: vec!["dragon".to_owned(), "tribal".to_owned()],
    }
}

/// The same record as [`jacques_dupont`], in the raw JSON shape clients send.
#[must_use]
pub fn jacques_dupont_json() -> serde_json::Value {
    serde_json::json!({
        "completionFlag": false,
        "client": {
            "firstName": "Jacques",
            "lastName": "Dupont",
            "age": 28,
            "phone": "514-555-1234",
            "email": "jacques.dupont@example.com"
        },
        "firstAppointmentDate": "2024-01-10",
        "subjectTags": ["dragon", "tribal"]
    })
}

/// Three stored records with fixed identifiers.
///
/// # Panics
///
/// Never in practice; the fixed dates are valid.
#[must_use]
pub fn studio_records() -> Vec<Appointment> {
    vec![
        jacques_dupont().with_id(AppointmentId::new("5c5dd07a381aba23c6193f3a")),
        NewAppointment {
            completion_flag: true,
            client: Client {
                first_name: "Mylène".to_owned(),
                last_name: "Smith".to_owned(),
                age: 34,
                phone: "438-555-9876".to_owned(),
                email: "mylene.smith@example.com".to_owned(),
            },
            first_appointment_date: Utc.with_ymd_and_hms(2023, 11, 15, 0, 0, 0).unwrap(),
            subject_tags: vec!["fleur".to_owned(), "papillon".to_owned()],
        }
        .with_id(AppointmentId::new("5c5dd07a4d06e5f1614b4231")),
        NewAppointment {
            completion_flag: false,
            client: Client {
                first_name: "Madame".to_owned(),
                last_name: "Ponpon".to_owned(),
                age: 45,
                phone: "450-555-6543".to_owned(),
                email: "ponpon@example.com".to_owned(),
            },
            first_appointment_date: Utc.with_ymd_and_hms(2024, 2, 5, 0, 0, 0).unwrap(),
            subject_tags: vec!["chiffres romains".to_owned(), "chat".to_owned()],
        }
        .with_id(AppointmentId::new("5c5dd07a2a96522453966b30")),
    ]
}
