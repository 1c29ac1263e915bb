/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /api/auth/register` - Create a user
 * - `POST /api/auth/login` - Exchange credentials for a token
 *
 * ## Users (behind the auth gate)
 * - `GET|POST /api/users`
 * - `GET /api/users/me`
 * - `GET|PUT|DELETE /api/users/{id}`
 *
 * ## Products (behind the auth gate)
 * - `GET|POST /api/products`
 * - `GET|PUT|DELETE /api/products/{id}`
 *
 * The gate guards the whole prefix, not just the routes above: an unknown
 * path or method under `/api/users` is a 401 without a token and only
 * becomes a 404/405 once the token checks out.
 */

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, register, TokenKeys};
use crate::backend::error::BackendError;
use crate::backend::middleware::auth_middleware;
use crate::backend::products::handlers::{
    create_product, delete_product, get_product, list_products, update_product,
};
use crate::backend::server::state::AppState;
use crate::backend::users::handlers::{
    create_user, delete_user, get_me, get_user, list_users, update_user,
};

/// Path prefixes that require a bearer token
pub const PROTECTED_PREFIXES: [&str; 2] = ["/api/users", "/api/products"];

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/me", get(get_me))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Whether `path` is one of the protected prefixes or lies beneath one
pub fn is_protected(path: &str) -> bool {
    PROTECTED_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

/// Run the auth gate for every request under a protected prefix
///
/// Layered over the whole router (fallbacks included), so it also sees
/// requests that match no route.
pub async fn gate_protected_prefixes(
    State(keys): State<TokenKeys>,
    request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    if is_protected(request.uri().path()) {
        auth_middleware(State(keys), request, next).await
    } else {
        Ok(next.run(request).await)
    }
}
