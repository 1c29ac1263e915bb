/**
 * Router Configuration
 *
 * Assembles the health check, the API routes and the fallbacks into one
 * router, with the auth gate and a tracing span around every request.
 */

use axum::{middleware, response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{configure_api_routes, gate_protected_prefixes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// 1. **Health**: `GET /health`, unauthenticated liveness probe
/// 2. **API Routes**: auth, users, products
/// 3. **Fallbacks**: JSON 404 for unknown routes, JSON 405 for unknown methods
/// 4. **Auth gate**: layered last so it also covers both fallbacks
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", get(health));

    let router = configure_api_routes(router);

    // method_not_allowed_fallback only reaches routes registered before it
    let router = router
        .fallback(|| async { BackendError::NotFound("Route") })
        .method_not_allowed_fallback(|| async { BackendError::MethodNotAllowed });

    router
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            gate_protected_prefixes,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
