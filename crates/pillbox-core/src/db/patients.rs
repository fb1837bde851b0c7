//! Patient registry operations.

use chrono::NaiveDate;
use rusqlite::{params, ErrorCode};
use tracing::debug;

use super::{Database, DbError, DbResult};
use crate::models::{Patient, DOB_FORMAT};

/// Maximum length accepted for name columns.
const NAME_LIMIT: usize = 50;

impl Database {
    /// Insert a new patient.
    ///
    /// The date of birth is validated and bound as a real calendar date, so
    /// a malformed string never reaches the SQL layer. A primary-key
    /// collision or an empty name surfaces as [`DbError::Constraint`]; no
    /// partial row is ever written.
    pub fn insert_patient(&self, patient: &Patient) -> DbResult<()> {
        let dob: NaiveDate = patient.dob_date()?;

        if patient.first_name.is_empty() || patient.last_name.is_empty() {
            return Err(DbError::Constraint(
                "first_name and last_name must be non-empty".into(),
            ));
        }
        if patient.first_name.len() > NAME_LIMIT || patient.last_name.len() > NAME_LIMIT {
            return Err(DbError::Constraint(format!(
                "names are limited to {} characters",
                NAME_LIMIT
            )));
        }

        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO patients (id, first_name, last_name, dob) VALUES (?1, ?2, ?3, ?4)",
            params![patient.patient_id, patient.first_name, patient.last_name, dob],
        )
        .map_err(map_constraint)?;

        debug!(patient_id = patient.patient_id, "patient inserted");
        Ok(())
    }

    /// List all patients, ordered ascending by id.
    ///
    /// The stored date column is reformatted back into canonical
    /// `YYYY-MM-DD` text on the way out. An empty table yields an empty
    /// vector, not an error.
    pub fn list_patients(&self) -> DbResult<Vec<Patient>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, first_name, last_name, dob FROM patients ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| {
            let dob: NaiveDate = row.get(3)?;
            Ok(Patient {
                patient_id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                dob: dob.format(DOB_FORMAT).to_string(),
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

/// Fold SQLite constraint failures into [`DbError::Constraint`]; everything
/// else passes through untouched.
fn map_constraint(err: rusqlite::Error) -> DbError {
    match &err {
        rusqlite::Error::SqliteFailure(e, msg) if e.code == ErrorCode::ConstraintViolation => {
            DbError::Constraint(msg.clone().unwrap_or_else(|| e.to_string()))
        }
        _ => DbError::Sqlite(err),
    }
}
