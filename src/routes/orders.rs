use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::Value;

use crate::{
    dto::orders::CreateOrderRequest,
    error::{AppError, AppResult},
    models::Order,
    response::MessageBody,
    services::order_service,
    state::AppState,
    validation::{FieldError, FieldErrorCode},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", post(create_order))
        .route("/orders/{id}", get(get_order))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = Order),
        (status = 400, description = "Validation error", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::Validation(vec![FieldError::new(
            "body",
            FieldErrorCode::InvalidType,
            rejection.body_text(),
        )])
    })?;

    let order = order_service::submit_order(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order", body = Order),
        (status = 404, description = "Order not found", body = MessageBody),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = order_service::get_order(&state, &id).await?;
    Ok(Json(order))
}
