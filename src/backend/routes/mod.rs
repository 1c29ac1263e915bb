//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - /api endpoints and the auth gate
//! ```
//!
//! # Route Protection
//!
//! Everything under `/api/users` and `/api/products` passes through the auth
//! gate, matched route or not.
//! `/api/auth/**` and `/health` do not.

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
