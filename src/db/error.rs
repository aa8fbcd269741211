//! Error taxonomy of the persistence layer.
//!
//! "Not found" is deliberately absent: lookups answer with `None`, zero, an
//! empty list or a documented default instead of failing.

use crate::libs::password::PasswordError;
use rusqlite::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique or foreign key constraint rejected the statement.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// The request was rejected before it reached the database.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Any other SQLite failure.
    #[error("storage failure: {0}")]
    Storage(#[source] rusqlite::Error),

    #[error("schema migration failed: {0:#}")]
    Migration(anyhow::Error),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(error: rusqlite::Error) -> Self {
        match &error {
            rusqlite::Error::SqliteFailure(failure, message) if failure.code == ErrorCode::ConstraintViolation => {
                StoreError::ConstraintViolation(message.clone().unwrap_or_else(|| failure.to_string()))
            }
            _ => StoreError::Storage(error),
        }
    }
}

impl StoreError {
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, StoreError::ConstraintViolation(_))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
