//! API integration tests

mod auth_test;
mod products_test;
