/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, plus the `From` impls that let
 * handlers use `?` on service and store results.
 *
 * # Response Format
 *
 * ```json
 * { "message": "Error message" }
 * ```
 */

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;
use crate::backend::store::StoreError;
use crate::backend::users::UserError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let Self::Internal(detail) = &self {
            tracing::error!("Request failed: {}", detail);
        }

        let body = serde_json::json!({ "message": self.message() });
        (status, Json(body)).into_response()
    }
}

impl From<UserError> for BackendError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidCredentials => Self::InvalidCredentials,
            UserError::EmailTaken => Self::Conflict(UserError::EmailTaken.to_string()),
            other => Self::internal(other.to_string()),
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(_) => Self::Conflict("Resource already exists".to_string()),
            StoreError::Database(e) => Self::internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}
