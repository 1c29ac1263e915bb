//! Server Module
//!
//! Startup wiring for the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database pool loading
//! └── init.rs         - Composition root (create_app)
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `AppConfig` is read once in `main`
//! 2. **Database**: pool connected, migrations applied
//! 3. **State**: stores wired into services
//! 4. **Router**: routes, auth gate and tracing layer assembled

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::create_app;
pub use state::AppState;
