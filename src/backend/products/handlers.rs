/**
 * Product Handlers
 *
 * - `GET /api/products` / `POST /api/products`
 * - `GET|PUT|DELETE /api/products/{id}`
 *
 * All routes sit behind the auth gate.
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::extract::{ApiJson, ApiPath};
use crate::backend::products::service::ProductService;
use crate::shared::{NewProduct, ProductChanges, ProductResponse};

pub async fn list_products(
    State(products): State<ProductService>,
) -> Result<Json<Vec<ProductResponse>>, BackendError> {
    let products = products.get_all_products().await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

pub async fn create_product(
    State(products): State<ProductService>,
    ApiJson(request): ApiJson<NewProduct>,
) -> Result<(StatusCode, Json<ProductResponse>), BackendError> {
    request.validate()?;
    let product = products.create_product(request).await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

pub async fn get_product(
    State(products): State<ProductService>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<ProductResponse>, BackendError> {
    let product = products
        .get_product_by_id(id)
        .await?
        .ok_or(BackendError::NotFound("Product"))?;
    Ok(Json(product.into()))
}

pub async fn update_product(
    State(products): State<ProductService>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(changes): ApiJson<ProductChanges>,
) -> Result<Json<ProductResponse>, BackendError> {
    changes.validate()?;
    let product = products
        .update_product(changes, id)
        .await?
        .ok_or(BackendError::NotFound("Product"))?;
    Ok(Json(product.into()))
}

pub async fn delete_product(
    State(products): State<ProductService>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, BackendError> {
    if products.delete_product(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(BackendError::NotFound("Product"))
    }
}
