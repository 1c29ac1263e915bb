/**
 * Authentication Middleware
 *
 * The gate in front of every protected route. It extracts the bearer token
 * from the Authorization header and checks its signature with the shared
 * secret before letting the request through.
 *
 * - no token → `401 {"message": "No token provided"}`
 * - bad signature, malformed or expired → `401 {"message": "Invalid token"}`
 *
 * The caller is never told why a token was rejected; the reason is logged.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::{Claims, TokenKeys};
use crate::backend::error::BackendError;

/// Claims of a verified token, attached to the request by the gate
#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticatedUser {
    pub subject: Option<String>,
    pub email: Option<String>,
}

impl AuthenticatedUser {
    /// The subject as a user id, when it is one
    pub fn user_id(&self) -> Option<Uuid> {
        self.subject.as_deref().and_then(|sub| Uuid::parse_str(sub).ok())
    }
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            subject: claims.sub,
            email: claims.email,
        }
    }
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies its signature (and expiry, if it has one)
/// 3. Attaches the decoded claims to request extensions
pub async fn auth_middleware(
    State(keys): State<TokenKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Rejected {}: no bearer token", request.uri().path());
        BackendError::MissingToken
    })?;

    let claims = keys.verify_token(token).map_err(|e| {
        tracing::warn!("Rejected {}: {}", request.uri().path(), e);
        BackendError::InvalidToken
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser::from(claims));

    Ok(next.run(request).await)
}

/// Pull `<token>` out of `Authorization: Bearer <token>`
///
/// Anything else (missing header, other scheme, empty token) counts as
/// no token at all.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

/// Axum extractor for the authenticated user
///
/// Only usable on routes behind `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::MissingToken
            })?;

        Ok(AuthUser(user))
    }
}
