/**
 * Server Initialization
 *
 * The composition root: builds concrete stores, wires them into services,
 * and hands the resulting state to the router.
 *
 * # Initialization Process
 *
 * 1. Connect the pool and run migrations
 * 2. Build the PostgreSQL stores
 * 3. Create `AppState` from stores and configuration
 * 4. Create the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::products::PgProductStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::backend::store::StoreError;
use crate::backend::users::PgUserStore;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns the store error if the database cannot be reached or migrated.
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing storefront backend");

    let pool = load_database(&config.database).await?;

    let app_state = AppState::new(
        Arc::new(PgUserStore::new(pool.clone())),
        Arc::new(PgProductStore::new(pool)),
        config,
    );

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
