//! PostgreSQL helpers for the store tests

use sqlx::postgres::{PgPool, PgPoolOptions};

/// Connect to `DATABASE_URL` and run migrations
///
/// Returns `None` when the variable is unset so the caller can skip.
pub async fn test_pool() -> Option<PgPool> {
    dotenv::dotenv().ok();
    let url = std::env::var("DATABASE_URL").ok()?;

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect to DATABASE_URL");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");

    Some(pool)
}

/// Remove all rows written by the store tests
pub async fn reset(pool: &PgPool) {
    sqlx::query("TRUNCATE users, products")
        .execute(pool)
        .await
        .expect("truncate tables");
}
