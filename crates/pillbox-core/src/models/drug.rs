//! Drug models.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while parsing a ledger line back into a [`Drug`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),

    #[error("drug id is not an integer: {0:?}")]
    InvalidId(String),

    #[error("drug cost is not a number: {0:?}")]
    InvalidCost(String),
}

/// A drug record as stored in the flat-file ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Drug {
    /// Caller-assigned identifier (uniqueness is not enforced)
    pub drug_id: i64,
    /// Drug name
    pub name: String,
    /// Cost per unit
    pub cost: f64,
    /// Dosage information (e.g., "100mg twice daily")
    pub dosage: String,
}

impl Drug {
    /// Create a new drug record.
    pub fn new(drug_id: i64, name: impl Into<String>, cost: f64, dosage: impl Into<String>) -> Self {
        Self {
            drug_id,
            name: name.into(),
            cost,
            dosage: dosage.into(),
        }
    }

    /// Encode as a single ledger line: `id,name,cost,dosage`.
    ///
    /// Fields are joined with literal commas and not escaped, so a comma
    /// inside `name` or `dosage` corrupts the record on re-parse. Known
    /// limitation of the ledger format.
    pub fn to_line(&self) -> String {
        format!("{},{},{},{}", self.drug_id, self.name, self.cost, self.dosage)
    }

    /// Decode a ledger line produced by [`Drug::to_line`].
    ///
    /// Fields past the fourth are ignored, which means a comma inside the
    /// dosage silently truncates it. Round-trips exactly for any drug whose
    /// name and dosage are comma-free.
    pub fn from_line(line: &str) -> Result<Self, DecodeError> {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < 4 {
            return Err(DecodeError::FieldCount(parts.len()));
        }

        let drug_id = parts[0]
            .parse::<i64>()
            .map_err(|_| DecodeError::InvalidId(parts[0].to_string()))?;
        let cost = parts[2]
            .parse::<f64>()
            .map_err(|_| DecodeError::InvalidCost(parts[2].to_string()))?;

        Ok(Self {
            drug_id,
            name: parts[1].to_string(),
            cost,
            dosage: parts[3].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_to_line() {
        let drug = Drug::new(7, "Carprofen", 12.5, "100mg daily");
        assert_eq!(drug.to_line(), "7,Carprofen,12.5,100mg daily");
    }

    #[test]
    fn test_round_trip() {
        let drug = Drug::new(42, "Meloxicam", 8.25, "1.5mg/mL oral");
        let parsed = Drug::from_line(&drug.to_line()).unwrap();
        assert_eq!(parsed, drug);
    }

    #[test]
    fn test_too_few_fields() {
        assert_eq!(
            Drug::from_line("invalid,data,format"),
            Err(DecodeError::FieldCount(3))
        );
    }

    #[test]
    fn test_bad_id() {
        assert_eq!(
            Drug::from_line("abc,Carprofen,12.5,100mg"),
            Err(DecodeError::InvalidId("abc".into()))
        );
    }

    #[test]
    fn test_bad_cost() {
        assert_eq!(
            Drug::from_line("1,Carprofen,cheap,100mg"),
            Err(DecodeError::InvalidCost("cheap".into()))
        );
    }

    #[test]
    fn test_extra_fields_ignored() {
        // A comma inside the dosage truncates it rather than failing.
        let parsed = Drug::from_line("1,Carprofen,12.5,100mg,extra").unwrap();
        assert_eq!(parsed.dosage, "100mg");
    }

    proptest! {
        #[test]
        fn round_trip_comma_free(
            drug_id in any::<i64>(),
            name in "[A-Za-z0-9 ./-]{1,30}",
            cost in 0.0f64..100_000.0,
            dosage in "[A-Za-z0-9 ./-]{1,30}",
        ) {
            let drug = Drug::new(drug_id, name, cost, dosage);
            let parsed = Drug::from_line(&drug.to_line()).unwrap();
            prop_assert_eq!(parsed, drug);
        }
    }
}
