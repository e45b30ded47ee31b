use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Decimal string, e.g. `"300.00"`.
    pub price: String,
    /// Pre-discount price shown struck through, when there is one.
    pub original_price: Option<String>,
    pub image_url: String,
    pub thumbnail_urls: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub product_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub size: String,
    pub quantity: i32,
    pub unit_price: String,
    /// Computed by the storefront and stored as given.
    pub total_amount: String,
    pub status: OrderStatus,
    pub webhook_sent: bool,
    pub created_at: DateTime<Utc>,
}
