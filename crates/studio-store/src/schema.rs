//! SQL for the `appointments` table.
//!
//! The table itself is created by `migrations/0001_create_appointments.sql`,
//! embedded here as [`CREATE_APPOINTMENTS_TABLE`].
//! Pattern parameters are `ILIKE` patterns built with
//! `studio_core::search::like_contains_pattern`, which escapes with `\`.

macro_rules! select_appointments {
    ($($tail:literal)?) => {
        concat!(
            "SELECT id, completion_flag, client_first_name, client_last_name, client_age, \
             client_phone, client_email, first_appointment_date, subject_tags \
             FROM appointments"
            $(, " ", $tail)?
        )
    };
}

/// DDL for the `appointments` table and its listing index.
pub const CREATE_APPOINTMENTS_TABLE: &str =
    include_str!("../../../migrations/0001_create_appointments.sql");

/// Whether a row with id `$1` exists.
pub const EXISTS: &str = "SELECT EXISTS (SELECT 1 FROM appointments WHERE id = $1)";

/// Every row, oldest first.
pub const SELECT_ALL: &str = select_appointments!("ORDER BY created_at, id");

/// The row with id `$1`.
pub const SELECT_BY_ID: &str = select_appointments!("WHERE id = $1");

/// The row with id `$1`, locked until the end of the transaction.
pub const SELECT_BY_ID_FOR_UPDATE: &str = select_appointments!("WHERE id = $1 FOR UPDATE");

/// Rows having at least one tag matching pattern `$1`.
pub const SELECT_BY_SUBJECT_PATTERN: &str = select_appointments!(
    "WHERE EXISTS (SELECT 1 FROM unnest(subject_tags) AS tag WHERE tag ILIKE $1 ESCAPE '\\') \
     ORDER BY created_at, id"
);

/// Rows whose client email matches pattern `$1`.
pub const SELECT_BY_EMAIL_PATTERN: &str =
    select_appointments!("WHERE client_email ILIKE $1 ESCAPE '\\' ORDER BY created_at, id");

/// Inserts a row; the store assigns the id. Returns the stored row.
pub const INSERT: &str = "INSERT INTO appointments \
     (completion_flag, client_first_name, client_last_name, client_age, client_phone, \
      client_email, first_appointment_date, subject_tags) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
     RETURNING id, completion_flag, client_first_name, client_last_name, client_age, \
      client_phone, client_email, first_appointment_date, subject_tags";

/// Overwrites every mutable column of row `$1`.
pub const UPDATE: &str = "UPDATE appointments SET \
     completion_flag = $2, client_first_name = $3, client_last_name = $4, client_age = $5, \
     client_phone = $6, client_email = $7, first_appointment_date = $8, subject_tags = $9 \
     WHERE id = $1";

/// Deletes row `$1`.
pub const DELETE: &str = "DELETE FROM appointments WHERE id = $1";
