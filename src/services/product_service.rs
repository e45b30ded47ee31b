use crate::{
    error::{AppError, AppResult},
    models::Product,
    state::AppState,
};

pub async fn get_active_product(state: &AppState) -> AppResult<Product> {
    match state.store.get_active_product()? {
        Some(product) => Ok(product),
        None => Err(AppError::NotFound("Product")),
    }
}
