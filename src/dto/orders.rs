use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order fields supplied by the storefront. Everything else on an
/// [`Order`](crate::models::Order) is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub product_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub size: String,
    pub quantity: i32,
    #[schema(example = "300.00")]
    pub unit_price: String,
    #[schema(example = "900.00")]
    pub total_amount: String,
}
