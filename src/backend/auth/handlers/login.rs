/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * # Authentication Process
 *
 * 1. Check the email/password pair through the user service
 * 2. Sign a JWT for the matching user
 * 3. Return token and user info
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same
 *   `401 {"message": "Invalid credentials"}`
 * - Passwords are never logged or returned
 */
use axum::{extract::State, response::Json};

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::error::BackendError;
use crate::backend::extract::ApiJson;
use crate::backend::users::{UserError, UserService};
use crate::shared::{LoginRequest, LoginResponse};

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - credentials do not match a stored user
/// * `500 Internal Server Error` - store, hashing or signing failure
pub async fn login(
    State(users): State<UserService>,
    State(keys): State<TokenKeys>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, BackendError> {
    let user = users
        .check_user_credentials(&request.email, &request.password)
        .await
        .inspect_err(|e| {
            if matches!(e, UserError::InvalidCredentials) {
                tracing::warn!("Login rejected: invalid credentials");
            }
        })?;

    let token = keys.create_token(user.id, &user.email).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::internal("token signing failed")
    })?;

    tracing::info!("User logged in: {}", user.id);

    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}
