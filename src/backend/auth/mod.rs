//! Authentication Module
//!
//! Token issuance and verification. The gate that enforces tokens on
//! protected routes lives in `backend::middleware`.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── sessions.rs     - JWT signing and verification (TokenKeys, Claims)
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── register.rs - User registration handler
//!     └── login.rs    - Credential check and token issuance
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email and password → user created (password hashed)
//! 2. **Login**: email and password → credentials checked → JWT returned
//! 3. **Protected call**: `Authorization: Bearer <jwt>` → gate verifies signature

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, register};
pub use sessions::{Claims, TokenKeys};
