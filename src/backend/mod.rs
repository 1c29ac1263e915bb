//! Backend Module
//!
//! All server-side code: the Axum server, the auth gate, the services and
//! their stores. Only compiled with the `ssr` feature.
//!
//! # Architecture
//!
//! - **`server`** - Composition root, application state, pool setup
//! - **`routes`** - Route configuration and router assembly
//! - **`middleware`** - The auth gate
//! - **`auth`** - Token signing/verification, register and login handlers
//! - **`users`** - User model, credential store, service, handlers
//! - **`products`** - Product model, store, service, handlers
//! - **`store`** - Store error type
//! - **`error`** - `BackendError` and its HTTP rendering
//! - **`extract`** - `Json`/`Path` wrappers that reject with `BackendError`
//!
//! # Request Flow
//!
//! ```text
//! request → Router → auth gate (protected prefixes) → handler
//!         → service → store → JSON response
//! ```
//!
//! # Thread Safety
//!
//! `AppState` is cloned per request. Services hold `Arc<dyn Store>`; the
//! PostgreSQL stores share one `PgPool`. There is no other shared mutable
//! state.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Extractors with JSON rejections
pub mod extract;

/// Token issuance and verification
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Users: model, store, service, handlers
pub mod users;

/// Products: model, store, service, handlers
pub mod products;

/// Store error type
pub mod store;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState};
