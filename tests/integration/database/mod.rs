//! PostgreSQL store tests

mod stores_test;
