//! Integration tests
//!
//! Drives the full router (auth gate, handlers, services) over the
//! in-memory stores. The `database` tests exercise the PostgreSQL stores
//! and only run when `DATABASE_URL` is set.

#![cfg(feature = "ssr")]


mod api;
mod database;
