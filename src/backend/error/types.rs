/**
 * Backend Error Types
 *
 * This module defines the errors a handler or middleware can return.
 * Each variant maps to exactly one HTTP status code.
 *
 * # Error Categories
 *
 * ## Authentication
 *
 * - `MissingToken` - no bearer token on a protected route
 * - `InvalidToken` - bad signature, malformed or expired token
 * - `InvalidCredentials` - email/password pair did not match
 *
 * ## Request
 *
 * - `Validation` - payload failed a shape check
 * - `Rejected` - path or body could not be extracted at all
 * - `NotFound` - lookup by id found nothing
 * - `Conflict` - unique constraint (e.g. duplicate email)
 *
 * ## Server
 *
 * - `Internal` - store or hashing failure; detail is logged, not returned
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("No token provided")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Payload validation failure
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// The named resource does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// An extractor refused the request; keeps the extractor's status
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    Conflict(String),

    /// Anything the caller cannot fix; the message is for the logs
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BackendError {
    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `MissingToken`, `InvalidToken`, `InvalidCredentials` - 401 Unauthorized
    /// - `Validation` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - `Rejected` - whatever the extractor chose (400, 415, 422)
    /// - `MethodNotAllowed` - 405 Method Not Allowed
    /// - `Conflict` - 409 Conflict
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingToken | Self::InvalidToken | Self::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Rejected { status, .. } => *status,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to the client
    pub fn message(&self) -> String {
        match self {
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}
