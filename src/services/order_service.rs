use serde_json::Value;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Order, Product},
    state::AppState,
    store::StoreResult,
    validation::validate_order_payload,
};

/// Validate, store, notify, then record whether the webhook went through.
///
/// The order is accepted as soon as it is stored; the notification outcome
/// only decides `webhook_sent`.
pub async fn submit_order(state: &AppState, payload: Value) -> AppResult<Order> {
    let input = validate_order_payload(&payload).map_err(AppError::Validation)?;

    let order = state.store.create_order(input)?;
    tracing::info!(order_id = %order.id, quantity = order.quantity, "order created");

    let product_name = product_name_for(state, &order);
    let outcome = state.notifier.notify(&order, &product_name).await;

    // Order is placed from here on; store failures below are only logged.
    if let Err(err) = state
        .store
        .update_order_webhook_status(order.id, outcome.is_delivered())
    {
        tracing::error!(order_id = %order.id, error = %err, "failed to record webhook status");
        return Ok(order);
    }

    match state.store.get_order(order.id) {
        Ok(stored) => Ok(stored.unwrap_or(order)),
        Err(err) => {
            tracing::error!(order_id = %order.id, error = %err, "failed to re-read order");
            Ok(order)
        }
    }
}

pub async fn get_order(state: &AppState, id: &str) -> AppResult<Order> {
    let Ok(id) = Uuid::parse_str(id) else {
        return Err(AppError::NotFound("Order"));
    };
    match state.store.get_order(id)? {
        Some(order) => Ok(order),
        None => Err(AppError::NotFound("Order")),
    }
}

fn product_name_for(state: &AppState, order: &Order) -> String {
    let by_id = Uuid::parse_str(&order.product_id)
        .ok()
        .and_then(|id| logged(state.store.get_product(id), order));
    let product = by_id.or_else(|| logged(state.store.get_active_product(), order));
    product.map(|p| p.name).unwrap_or_default()
}

fn logged(result: StoreResult<Option<Product>>, order: &Order) -> Option<Product> {
    result.unwrap_or_else(|err| {
        tracing::warn!(order_id = %order.id, error = %err, "product lookup failed for webhook");
        None
    })
}
