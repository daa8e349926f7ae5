//! Order handlers
//!
//! Buyer inquiry endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::app::OrderSubmission;
use crate::domain::entities::Order;
use crate::error::AppError;
use crate::AppState;

/// Response body for a created order
#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    pub id: String,
}

/// POST /orders
///
/// Record an inquiry and notify the seller. Mail problems never change the
/// response. A `null` body is treated as an empty submission.
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<Option<OrderSubmission>>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateOrderResponse>), AppError> {
    let Json(submission) = payload?;
    let submission = submission.unwrap_or_default();
    let id = state.order_service.create_order(submission).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse { id: id.to_string() }),
    ))
}

/// GET /orders/:id
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, AppError> {
    let order = state.order_service.get_order(&id).await?;
    Ok(Json(order))
}
