//! Validation gateway.
//!
//! Turns a raw, untyped request body into a validated [`NewAppointment`] or
//! [`AppointmentPatch`]. Every field rule is evaluated and all failures are
//! reported together as [`ValidationErrors`]. Nothing here touches the store.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use serde_json::{Map, Value};
use studio_core::appointment::{AppointmentId, AppointmentPatch, Client, NewAppointment};
use studio_core::error::{FieldError, ValidationErrors};

/// Name of the top-level body field that must hold the record.
pub const APPOINTMENT_PARAM: &str = "appointment";

/// Youngest age a client may be booked at.
pub const MINIMUM_AGE: i64 = 18;

const RECORD_NAME: &str = "Appointment";

const CONTROL_CHARS_ERR: &str = "Text must not contain control characters.";
const TAG_CONTROL_CHARS_ERR: &str = "Subject tags must not contain control characters.";

// The pattern is a literal; compilation cannot fail.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").expect("email pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    Required,
    Optional,
}

/// A body field: its JSON key, its reported path and the message used when
/// a required value is absent.
struct Field {
    key: &'static str,
    path: &'static str,
    required: &'static str,
}

impl Field {
    fn error(&self, message: &str) -> FieldError {
        FieldError::new(self.path, message)
    }
}

const ID: Field = Field {
    key: "id",
    path: "id",
    required: "Appointment identifier must be a string.",
};
const COMPLETION_FLAG: Field = Field {
    key: "completionFlag",
    path: "completionFlag",
    required: "Completion status is required.",
};
const CLIENT: Field = Field {
    key: "client",
    path: "client",
    required: "A client is required.",
};
const FIRST_NAME: Field = Field {
    key: "firstName",
    path: "client.firstName",
    required: "Client first name is required.",
};
const LAST_NAME: Field = Field {
    key: "lastName",
    path: "client.lastName",
    required: "Client last name is required.",
};
const AGE: Field = Field {
    key: "age",
    path: "client.age",
    required: "Client age is required.",
};
const PHONE: Field = Field {
    key: "phone",
    path: "client.phone",
    required: "Client phone number is required.",
};
const EMAIL: Field = Field {
    key: "email",
    path: "client.email",
    required: "Client email is required.",
};
const FIRST_APPOINTMENT_DATE: Field = Field {
    key: "firstAppointmentDate",
    path: "firstAppointmentDate",
    required: "First appointment date is required.",
};
const SUBJECT_TAGS: Field = Field {
    key: "subjectTags",
    path: "subjectTags",
    required: "At least one subject is required.",
};

type Errors = Vec<FieldError>;

/// Validates the body of a create request. Every field is required.
///
/// # Errors
///
/// Returns the missing-parameter error when `body.appointment` is absent or
/// not an object, otherwise the collected field failures.
pub fn validate_new_appointment(body: &Value) -> Result<NewAppointment, ValidationErrors> {
    let candidate = appointment_param(body)?;
    let mut errors = Errors::new();

    let completion_flag = read(
        candidate,
        &COMPLETION_FLAG,
        Presence::Required,
        &mut errors,
        parse_completion_flag,
    );
    let client = read(candidate, &CLIENT, Presence::Required, &mut errors, parse_client);
    let first_appointment_date = read(
        candidate,
        &FIRST_APPOINTMENT_DATE,
        Presence::Required,
        &mut errors,
        parse_date,
    );
    let subject_tags = read(
        candidate,
        &SUBJECT_TAGS,
        Presence::Required,
        &mut errors,
        parse_subject_tags,
    );

    match (completion_flag, client, first_appointment_date, subject_tags) {
        (Some(completion_flag), Some(client), Some(first_appointment_date), Some(subject_tags))
            if errors.is_empty() =>
        {
            Ok(NewAppointment {
                completion_flag,
                client,
                first_appointment_date,
                subject_tags,
            })
        }
        _ => Err(ValidationErrors::from_fields(RECORD_NAME, errors)),
    }
}

/// Validates the body of a merge update. Every field is optional and a null
/// value counts as omitted, but any supplied value must satisfy the same rule
/// as on create. A supplied client replaces the stored one and must be
/// complete.
///
/// The presence of `id` is not checked here; the service layer owns that
/// rule.
///
/// # Errors
///
/// Returns the missing-parameter error when `body.appointment` is absent or
/// not an object, otherwise the collected field failures.
pub fn validate_appointment_patch(body: &Value) -> Result<AppointmentPatch, ValidationErrors> {
    let candidate = appointment_param(body)?;
    let mut errors = Errors::new();

    let patch = AppointmentPatch {
        id: read(candidate, &ID, Presence::Optional, &mut errors, parse_id),
        completion_flag: read(
            candidate,
            &COMPLETION_FLAG,
            Presence::Optional,
            &mut errors,
            parse_completion_flag,
        ),
        client: read(candidate, &CLIENT, Presence::Optional, &mut errors, parse_client),
        first_appointment_date: read(
            candidate,
            &FIRST_APPOINTMENT_DATE,
            Presence::Optional,
            &mut errors,
            parse_date,
        ),
        subject_tags: read(
            candidate,
            &SUBJECT_TAGS,
            Presence::Optional,
            &mut errors,
            parse_subject_tags,
        ),
    };

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationErrors::from_fields(RECORD_NAME, errors))
    }
}

fn appointment_param(body: &Value) -> Result<&Map<String, Value>, ValidationErrors> {
    body.get(APPOINTMENT_PARAM)
        .and_then(Value::as_object)
        .ok_or_else(|| ValidationErrors::missing_parameter(APPOINTMENT_PARAM))
}

/// Looks `field` up in `object` and hands a non-null value to `parse`.
/// Parsers push their own failures and return `None` when they do.
fn read<T>(
    object: &Map<String, Value>,
    field: &Field,
    presence: Presence,
    errors: &mut Errors,
    parse: impl FnOnce(&Field, &Value, &mut Errors) -> Option<T>,
) -> Option<T> {
    match object.get(field.key).filter(|v| !v.is_null()) {
        Some(value) => parse(field, value, errors),
        None => {
            if presence == Presence::Required {
                errors.push(field.error(field.required));
            }
            None
        }
    }
}

fn reject<T>(field: &Field, message: &str, errors: &mut Errors) -> Option<T> {
    errors.push(field.error(message));
    None
}

/// A blank identifier counts as omitted; the service layer reports it.
fn parse_id(field: &Field, value: &Value, errors: &mut Errors) -> Option<AppointmentId> {
    match value.as_str().map(str::trim) {
        Some("") => None,
        Some(id) => Some(AppointmentId::new(id)),
        None => reject(field, field.required, errors),
    }
}

fn parse_completion_flag(field: &Field, value: &Value, errors: &mut Errors) -> Option<bool> {
    match value.as_bool() {
        Some(flag) => Some(flag),
        None => reject(field, "Completion status must be a boolean.", errors),
    }
}

fn parse_text(field: &Field, value: &Value, errors: &mut Errors) -> Option<String> {
    match value.as_str() {
        Some(text) if has_control_chars(text) => reject(field, CONTROL_CHARS_ERR, errors),
        Some(text) if !text.trim().is_empty() => Some(text.to_owned()),
        _ => reject(field, field.required, errors),
    }
}

fn has_control_chars(text: &str) -> bool {
    text.chars().any(char::is_control)
}

fn parse_age(field: &Field, value: &Value, errors: &mut Errors) -> Option<i32> {
    let Some(age) = value.as_i64() else {
        return reject(field, "Client age must be an integer.", errors);
    };
    if age < MINIMUM_AGE {
        return reject(field, "Client must be an adult.", errors);
    }
    match i32::try_from(age) {
        Ok(age) => Some(age),
        Err(_) => reject(field, "Client age is out of range.", errors),
    }
}

fn parse_email(field: &Field, value: &Value, errors: &mut Errors) -> Option<String> {
    let email = parse_text(field, value, errors)?;
    if EMAIL_PATTERN.is_match(&email) {
        Some(email)
    } else {
        reject(field, "Client email is invalid.", errors)
    }
}

fn parse_client(field: &Field, value: &Value, errors: &mut Errors) -> Option<Client> {
    let Some(object) = value.as_object() else {
        return reject(field, "Client must be an object.", errors);
    };

    let first_name = read(object, &FIRST_NAME, Presence::Required, errors, parse_text);
    let last_name = read(object, &LAST_NAME, Presence::Required, errors, parse_text);
    let age = read(object, &AGE, Presence::Required, errors, parse_age);
    let phone = read(object, &PHONE, Presence::Required, errors, parse_text);
    let email = read(object, &EMAIL, Presence::Required, errors, parse_email);

    Some(Client {
        first_name: first_name?,
        last_name: last_name?,
        age: age?,
        phone: phone?,
        email: email?,
    })
}

fn parse_date(field: &Field, value: &Value, errors: &mut Errors) -> Option<DateTime<Utc>> {
    match value.as_str().and_then(parse_timestamp) {
        Some(date) => Some(date),
        None => reject(field, "First appointment date is invalid.", errors),
    }
}

/// Accepts RFC 3339, a zone-less `YYYY-MM-DDTHH:MM:SS` (read as UTC) or a
/// bare `YYYY-MM-DD` (midnight UTC).
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn parse_subject_tags(field: &Field, value: &Value, errors: &mut Errors) -> Option<Vec<String>> {
    let Some(items) = value.as_array() else {
        return reject(field, "Subject tags must be non-empty strings.", errors);
    };
    if items.is_empty() {
        return reject(field, field.required, errors);
    }
    if items
        .iter()
        .filter_map(Value::as_str)
        .any(has_control_chars)
    {
        return reject(field, TAG_CONTROL_CHARS_ERR, errors);
    }
    let tags: Option<Vec<String>> = items
        .iter()
        .map(|item| {
            item.as_str()
                .filter(|tag| !tag.trim().is_empty())
                .map(str::to_owned)
        })
        .collect();
    match tags {
        Some(tags) => Some(tags),
        None => reject(field, "Subject tags must be non-empty strings.", errors),
    }
}
