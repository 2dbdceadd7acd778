//! Store error taxonomy
//!
//! Every statement-level failure is classified so callers can tell a
//! constraint violation from a connectivity problem or a malformed
//! statement. The command layer still reports a coarse success/failure
//! line per operation; the classified kind is shown dimmed beneath it.

use std::path::PathBuf;

use thiserror::Error;

/// Failure kinds surfaced by the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened or is not a database.
    #[error("cannot open database at {path}: {message}")]
    Open { path: PathBuf, message: String },

    /// A constraint (NOT NULL, UNIQUE, ...) rejected the statement.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// The statement itself was malformed.
    #[error("malformed statement: {0}")]
    Statement(String),

    /// Any other database failure.
    #[error("database error: {0}")]
    Database(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(code, _)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                StoreError::Constraint(err.to_string())
            }
            rusqlite::Error::SqlInputError { .. } => StoreError::Statement(err.to_string()),
            _ => StoreError::Database(err.to_string()),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
