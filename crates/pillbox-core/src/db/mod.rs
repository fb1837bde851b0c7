//! Relational patient registry backed by SQLite.
//!
//! Unlike a pooled design, [`Database`] holds only configuration. Every
//! operation opens a connection scoped to that single call and drops it on
//! every exit path, so no handle survives between calls.

mod patients;
mod schema;

pub use schema::*;

use std::path::PathBuf;

use rusqlite::Connection;
use thiserror::Error;
use tracing::debug;

use crate::models::ValidationError;

/// Database errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("database unreachable: {0}")]
    Connectivity(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type DbResult<T> = Result<T, DbError>;

/// Connection target for the patient registry.
///
/// Injected at construction so tests can point the store at an isolated
/// database file.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file (created on first use).
    pub path: PathBuf,
}

impl DbConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Handle to the patient registry.
pub struct Database {
    config: DbConfig,
}

impl Database {
    /// Create a registry handle for the given connection target.
    ///
    /// No connection is opened here; each operation connects on its own.
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }

    /// Open a connection for a single operation.
    pub(crate) fn connect(&self) -> DbResult<Connection> {
        Connection::open(&self.config.path)
            .map_err(|e| DbError::Connectivity(e.to_string()))
    }

    /// Idempotently create the `patients` table. Safe to call before every
    /// insert.
    pub fn ensure_schema(&self) -> DbResult<()> {
        let conn = self.connect()?;
        conn.execute_batch(SCHEMA)?;
        debug!(path = %self.config.path.display(), "schema ensured");
        Ok(())
    }

    /// Liveness probe: attempt to open and immediately drop a connection.
    ///
    /// Returns `false` on any connectivity failure instead of an error, so
    /// callers can branch without error handling.
    pub fn probe(&self) -> bool {
        self.connect().is_ok()
    }
}
