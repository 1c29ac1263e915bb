//! Products Module
//!
//! Plain CRUD over the `products` table, laid out like `users`: model,
//! store trait with PostgreSQL and in-memory implementations, a thin
//! service, and handlers for `/api/products`.

pub mod model;

pub mod store;

pub mod memory;

pub mod service;

pub mod handlers;

pub use memory::MemoryProductStore;
pub use model::Product;
pub use service::ProductService;
pub use store::{PgProductStore, ProductStore};
