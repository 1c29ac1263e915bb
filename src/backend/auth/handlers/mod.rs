//! Authentication Handlers Module
//!
//! The public, unguarded endpoints that hand out identities and tokens.
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - Create a user
//! - **`login`** - POST /api/auth/login - Verify credentials, issue a JWT

pub mod login;

pub mod register;

pub use login::login;
pub use register::register;
