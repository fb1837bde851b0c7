//! Flat-file drug ledger.
//!
//! One drug per line, fields comma-separated in the fixed order
//! `id,name,cost,dosage`, no header row, no escaping. Append-only: records
//! are never updated or deleted in place. Assumes a single writer at a time;
//! concurrent callers must serialize access externally.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

use crate::models::Drug;

/// Flat-file store errors.
#[derive(Error, Debug)]
pub enum FileStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Append-only drug ledger backed by a text file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a ledger handle for the given path. The file itself is
    /// created lazily on the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one drug as a single terminated line.
    ///
    /// The file handle is scoped to this call and released on every exit
    /// path. The line and its terminator are written in one call, so no
    /// unterminated partial record is left behind on success.
    pub fn append(&self, drug: &Drug) -> Result<(), FileStoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(format!("{}\n", drug.to_line()).as_bytes())?;
        file.flush()?;
        Ok(())
    }

    /// Read every drug in the ledger, in file order.
    ///
    /// A missing file yields an empty vector, not an error. Blank lines are
    /// skipped; a line that fails to decode is skipped with a warning and
    /// the read continues. Best-effort by design: one corrupt record must
    /// not hide the rest of the ledger.
    pub fn read_all(&self) -> Result<Vec<Drug>, FileStoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut drugs = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match Drug::from_line(&line) {
                Ok(drug) => drugs.push(drug),
                Err(err) => warn!(line = %line, error = %err, "skipping malformed ledger line"),
            }
        }
        Ok(drugs)
    }

    /// Whether the backing file exists, independent of content.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
