//! Product handlers
//!
//! Catalog endpoints used by the storefront and the seller admin page.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::ProductSubmission;
use crate::domain::entities::Product;
use crate::error::AppError;
use crate::AppState;

/// Query string for product deletion
#[derive(Debug, Deserialize)]
pub struct DeleteProductQuery {
    pub id: Option<String>,
}

/// Acknowledgement body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /products
///
/// All products, newest first.
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.catalog_service.list_products().await?;
    Ok(Json(products))
}

/// GET /products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = state.catalog_service.get_product(&id).await?;
    Ok(Json(product))
}

/// POST /products
///
/// List a new product. `price` and `quantity` may be numbers or numeric strings.
/// A `null` body is treated as an empty submission.
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<Option<ProductSubmission>>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let Json(submission) = payload?;
    let submission = submission.unwrap_or_default();
    let product = state.catalog_service.create_product(submission).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// DELETE /products?id=<id>
pub async fn delete_product(
    State(state): State<AppState>,
    query: Result<Query<DeleteProductQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Query(query) = query?;
    state
        .catalog_service
        .delete_product(query.id.as_deref())
        .await?;

    Ok(Json(MessageResponse {
        message: "Product deleted successfully".to_string(),
    }))
}
