//! Backend Error Module
//!
//! Error types for the HTTP layer and their conversion into responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and From implementations
//! ```
//!
//! # Response Format
//!
//! Every error is rendered as JSON with a single field:
//!
//! ```json
//! { "message": "Invalid token" }
//! ```
//!
//! Internal failures (database errors, hashing failures) are logged with
//! their detail and rendered as `500 {"message": "Internal server error"}`.
//! There is no retry.
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront_api::backend::error::BackendError;
//! use axum::Json;
//!
//! async fn handler() -> Result<Json<()>, BackendError> {
//!     Err(BackendError::NotFound("User"))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
