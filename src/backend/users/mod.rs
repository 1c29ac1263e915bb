//! Users Module
//!
//! Everything about user records: the persisted model, the credential
//! store interface and its implementations, the service holding the
//! password rules, and the HTTP handlers for `/api/users`.
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs       - Module exports and documentation
//! ├── model.rs     - User record and store inputs
//! ├── store.rs     - UserStore trait and PostgreSQL implementation
//! ├── memory.rs    - In-memory UserStore
//! ├── service.rs   - UserService and UserError
//! └── handlers.rs  - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before they reach a store
//! - A stored password is always a hash, never the plaintext
//! - Responses are built from `UserResponse`, which has no password field
//! - Credential failures carry no hint about which check failed

/// User record and store inputs
pub mod model;

/// Credential store trait and PostgreSQL implementation
pub mod store;

/// In-memory credential store
pub mod memory;

/// Business logic over the credential store
pub mod service;

/// HTTP handlers for user endpoints
pub mod handlers;

pub use memory::MemoryUserStore;
pub use model::{User, UserInsert, UserUpdate};
pub use service::{UserError, UserService};
pub use store::{PgUserStore, UserStore};
