//! Store Module
//!
//! The error type every store returns. The store traits live next to their
//! entities (`users::store`, `products::store`); pool setup lives in
//! `server::config`.
//!
//! Absence is never an error here. Lookups return `Ok(None)`, deletes
//! return `Ok(false)`; `StoreError` is reserved for the database refusing
//! or failing an operation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write; carries the constraint name
    #[error("unique constraint violated: {0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                let constraint = db_err.constraint().unwrap_or("unique").to_string();
                return Self::Conflict(constraint);
            }
        }
        Self::Database(err)
    }
}
