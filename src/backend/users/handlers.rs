/**
 * User Handlers
 *
 * HTTP handlers for `/api/users`. All of them sit behind the auth gate.
 *
 * # Routes
 *
 * - `GET /api/users` - List users
 * - `POST /api/users` - Create a user
 * - `GET /api/users/me` - The user named by the token's `sub` claim
 * - `GET /api/users/{id}` - Fetch one user
 * - `PUT /api/users/{id}` - Update email and/or password
 * - `DELETE /api/users/{id}` - Delete a user
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::extract::{ApiJson, ApiPath};
use crate::backend::middleware::AuthUser;
use crate::backend::users::service::UserService;
use crate::shared::{NewUser, UserChanges, UserResponse};

pub async fn list_users(
    State(users): State<UserService>,
) -> Result<Json<Vec<UserResponse>>, BackendError> {
    let users = users.get_all_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn create_user(
    State(users): State<UserService>,
    ApiJson(request): ApiJson<NewUser>,
) -> Result<(StatusCode, Json<UserResponse>), BackendError> {
    request.validate()?;
    let user = users.create_user(request).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn get_user(
    State(users): State<UserService>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<UserResponse>, BackendError> {
    let user = users
        .get_user_by_id(id)
        .await?
        .ok_or(BackendError::NotFound("User"))?;
    Ok(Json(user.into()))
}

/// Get the user the bearer token was issued for
pub async fn get_me(
    State(users): State<UserService>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    // Tokens minted elsewhere may carry no usable subject
    let id = auth
        .user_id()
        .ok_or(BackendError::NotFound("User"))?;

    let user = users
        .get_user_by_id(id)
        .await?
        .ok_or(BackendError::NotFound("User"))?;
    Ok(Json(user.into()))
}

pub async fn update_user(
    State(users): State<UserService>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(changes): ApiJson<UserChanges>,
) -> Result<Json<UserResponse>, BackendError> {
    changes.validate()?;
    let user = users
        .update_user(changes, id)
        .await?
        .ok_or(BackendError::NotFound("User"))?;
    Ok(Json(user.into()))
}

pub async fn delete_user(
    State(users): State<UserService>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, BackendError> {
    if users.delete_user(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(BackendError::NotFound("User"))
    }
}
