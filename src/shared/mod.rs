//! Shared Module
//!
//! Types that every layer of the application agrees on: configuration,
//! the JSON shapes exchanged over HTTP, and validation errors.
//!
//! Nothing here depends on axum or sqlx, so the DTOs can be reused by any
//! client that talks to the API.

/// User request/response types
pub mod user;

/// Product request/response types
pub mod product;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, DatabaseSettings};
pub use error::SharedError;
pub use product::{NewProduct, ProductChanges, ProductResponse};
pub use user::{LoginRequest, LoginResponse, NewUser, UserChanges, UserResponse};
