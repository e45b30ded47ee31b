use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult, models::Product, response::MessageBody, services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/product", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/product",
    responses(
        (status = 200, description = "The product on sale", body = Product),
        (status = 404, description = "Product not found", body = MessageBody),
    ),
    tag = "Product"
)]
pub async fn get_product(State(state): State<AppState>) -> AppResult<Json<Product>> {
    let product = product_service::get_active_product(&state).await?;
    Ok(Json(product))
}
