//! Patient models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Date-of-birth format accepted by the registry.
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// Errors produced while validating patient input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("date of birth {0:?} is not a valid YYYY-MM-DD date")]
    InvalidDob(String),
}

/// A patient record as stored in the relational registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Caller-assigned identifier, used as the table's primary key
    pub patient_id: i64,
    /// Patient first name
    pub first_name: String,
    /// Patient last name
    pub last_name: String,
    /// Date of birth in YYYY-MM-DD format
    pub dob: String,
}

impl Patient {
    /// Create a new patient record.
    pub fn new(
        patient_id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        dob: impl Into<String>,
    ) -> Self {
        Self {
            patient_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            dob: dob.into(),
        }
    }

    /// Parse the date of birth into a real calendar date.
    ///
    /// Runs before every insert so that a malformed string never reaches
    /// the SQL layer. Rejects wrong formats and impossible dates
    /// (month 13, day 40).
    pub fn dob_date(&self) -> Result<NaiveDate, ValidationError> {
        NaiveDate::parse_from_str(&self.dob, DOB_FORMAT)
            .map_err(|_| ValidationError::InvalidDob(self.dob.clone()))
    }

    /// Full display name ("first last").
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
