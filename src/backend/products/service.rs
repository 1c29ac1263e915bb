/**
 * Product Service
 *
 * CRUD over the product store. Payloads are validated by the handlers
 * before they get here; the service adds nothing but logging.
 *
 * Store errors pass through untouched and become a 409 or a 500 at the
 * HTTP edge.
 */

use std::sync::Arc;

use uuid::Uuid;

use crate::backend::products::model::Product;
use crate::backend::products::store::ProductStore;
use crate::backend::store::StoreError;
use crate::shared::{NewProduct, ProductChanges};

/// Pass-through service over a `ProductStore`
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub async fn get_all_products(&self) -> Result<Vec<Product>, StoreError> {
        self.store.find_all().await
    }

    pub async fn get_product_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
        self.store.find_by_id(id).await
    }

    pub async fn create_product(&self, product: NewProduct) -> Result<Product, StoreError> {
        let product = self.store.create(product).await?;
        tracing::info!("Product created: {}", product.id);
        Ok(product)
    }

    pub async fn update_product(
        &self,
        changes: ProductChanges,
        id: Uuid,
    ) -> Result<Option<Product>, StoreError> {
        self.store.update(id, changes).await
    }

    pub async fn delete_product(&self, id: Uuid) -> Result<bool, StoreError> {
        let deleted = self.store.delete(id).await?;
        if deleted {
            tracing::info!("Product deleted: {}", id);
        }
        Ok(deleted)
    }
}
