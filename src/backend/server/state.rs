/**
 * Application State Management
 *
 * `AppState` is the composition root's output: the services wired to their
 * stores, plus the token keys. It is cloned into every request; the clones
 * share the same `Arc`s and the same connection pool.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers ask for just the piece they
 * need:
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use storefront_api::backend::users::UserService;
 *
 * async fn handler(State(users): State<UserService>) {
 *     let _ = users.get_all_users().await;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::products::{ProductService, ProductStore};
use crate::backend::users::{UserService, UserStore};
use crate::shared::AppConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub products: ProductService,
    pub token_keys: TokenKeys,
}

impl AppState {
    /// Wire services to the given stores using `config`
    pub fn new(
        user_store: Arc<dyn UserStore>,
        product_store: Arc<dyn ProductStore>,
        config: &AppConfig,
    ) -> Self {
        Self {
            users: UserService::new(user_store, config.bcrypt_cost),
            products: ProductService::new(product_store),
            token_keys: TokenKeys::new(&config.jwt_secret, config.token_ttl_secs),
        }
    }
}

impl FromRef<AppState> for UserService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for ProductService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.products.clone()
    }
}

impl FromRef<AppState> for TokenKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.token_keys.clone()
    }
}
