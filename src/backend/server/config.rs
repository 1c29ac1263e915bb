/**
 * Server Configuration
 *
 * Turns the database part of `AppConfig` into a live connection pool with
 * an up-to-date schema.
 *
 * # Error Handling
 *
 * Unlike the per-request paths, a failure here is fatal: the caller logs it
 * and the process exits without listening.
 */

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::backend::store::StoreError;
use crate::shared::DatabaseSettings;

const MAX_CONNECTIONS: u32 = 10;

/// Driver options for the configured database
///
/// Parts are set field by field, so a password may contain `@`, `/`, `#`
/// or `:` without being mistaken for URL syntax.
pub fn connect_options(settings: &DatabaseSettings) -> Result<PgConnectOptions, StoreError> {
    match settings {
        DatabaseSettings::Url(url) => Ok(url.parse::<PgConnectOptions>()?),
        DatabaseSettings::Parts {
            host,
            port,
            user,
            password,
            name,
        } => Ok(PgConnectOptions::new()
            .host(host)
            .port(*port)
            .username(user)
            .password(password)
            .database(name)),
    }
}

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Builds the driver options from the settings
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs the embedded migrations
pub async fn load_database(settings: &DatabaseSettings) -> Result<PgPool, StoreError> {
    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(connect_options(settings)?)
        .await?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| StoreError::Database(e.into()))?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
