//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - The auth gate protecting `/api/users` and `/api/products`
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, Router};
//! use storefront_api::backend::middleware::auth_middleware;
//! use storefront_api::backend::server::AppState;
//!
//! fn protect(router: Router<AppState>, state: &AppState) -> Router<AppState> {
//!     router.route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
//! }
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
