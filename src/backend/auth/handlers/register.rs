/**
 * Register Handler
 *
 * POST /api/auth/register - public counterpart of `POST /api/users`.
 *
 * # Validation
 *
 * - Email must be present and contain '@'
 * - Email must be unique (409 otherwise)
 */
use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::error::BackendError;
use crate::backend::extract::ApiJson;
use crate::backend::users::UserService;
use crate::shared::{NewUser, UserResponse};

pub async fn register(
    State(users): State<UserService>,
    ApiJson(request): ApiJson<NewUser>,
) -> Result<(StatusCode, Json<UserResponse>), BackendError> {
    request.validate().inspect_err(|e| {
        tracing::warn!("Registration rejected: {}", e);
    })?;

    let user = users.create_user(request).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}
