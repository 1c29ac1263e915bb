//! Storefront API - Main Library
//!
//! A small REST backend for users and products, with bearer-token
//! authentication and bcrypt-hashed credentials stored in PostgreSQL.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared by every layer
//!   - Configuration (`AppConfig`)
//!   - Request/response DTOs for users and products
//!   - Validation error type
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and router
//!   - Auth gate middleware and token issuance
//!   - User and product services over narrow store traits
//!   - PostgreSQL and in-memory store implementations
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use storefront_api::backend::server::init::create_app;
//! use storefront_api::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - `Option<T>` for lookups that may find nothing
//! - Custom error types in `shared::error` and `backend::error`

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
