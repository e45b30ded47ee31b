//! Best-effort order notification to an external webhook.
//!
//! Delivery never affects whether an order is accepted. The caller gets a
//! [`NotificationOutcome`] and records `webhook_sent` from it.

use std::time::Duration;

use chrono::SecondsFormat;
use reqwest::Client;
use serde::Serialize;

use crate::models::Order;

pub const WEBHOOK_URL_VARS: [&str; 2] = ["N8N_WEBHOOK_URL", "WEBHOOK_URL"];
pub const CURRENCY: &str = "EGP";
pub const SOURCE: &str = "website";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    pub order_id: String,
    pub product: WebhookProduct,
    pub customer: WebhookCustomer,
    pub timestamp: String,
    pub currency: &'static str,
    pub source: &'static str,
}

#[derive(Debug, Serialize)]
pub struct WebhookProduct {
    pub name: String,
    pub size: String,
    pub quantity: i32,
    pub price: f64,
    pub total: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookCustomer {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl WebhookPayload {
    pub fn from_order(order: &Order, product_name: &str) -> Self {
        Self {
            order_id: order.id.to_string(),
            product: WebhookProduct {
                name: product_name.to_string(),
                size: order.size.clone(),
                quantity: order.quantity,
                price: order.unit_price.parse().unwrap_or(0.0),
                total: order.total_amount.parse().unwrap_or(0.0),
            },
            customer: WebhookCustomer {
                full_name: order.customer_name.clone(),
                email: order.customer_email.clone(),
                phone: order.customer_phone.clone(),
                address: order.customer_address.clone(),
            },
            timestamp: order
                .created_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            currency: CURRENCY,
            source: SOURCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    Delivered,
    /// No endpoint configured.
    Skipped,
    Rejected { status: u16 },
    Failed { reason: String },
}

impl NotificationOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, NotificationOutcome::Delivered)
    }
}

/// Where the endpoint URL comes from.
#[derive(Debug, Clone)]
pub enum WebhookTarget {
    /// Looked up on every call from [`WEBHOOK_URL_VARS`], first non-empty wins.
    Environment,
    Fixed(Option<String>),
}

impl WebhookTarget {
    pub fn resolve(&self) -> Option<String> {
        match self {
            WebhookTarget::Environment => webhook_url_from_env(),
            WebhookTarget::Fixed(url) => url.clone(),
        }
    }
}

pub fn webhook_url_from_env() -> Option<String> {
    WEBHOOK_URL_VARS.iter().find_map(|name| {
        std::env::var(name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: Client,
    target: WebhookTarget,
}

impl WebhookNotifier {
    pub fn new(target: WebhookTarget, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, target })
    }

    pub fn from_env(timeout: Duration) -> anyhow::Result<Self> {
        Self::new(WebhookTarget::Environment, timeout)
    }

    pub async fn notify(&self, order: &Order, product_name: &str) -> NotificationOutcome {
        let Some(url) = self.target.resolve() else {
            tracing::warn!(order_id = %order.id, "no webhook URL configured, skipping notification");
            return NotificationOutcome::Skipped;
        };

        let payload = WebhookPayload::from_order(order, product_name);
        let result = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&payload)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                tracing::info!(order_id = %order.id, status = %response.status(), "webhook delivered");
                NotificationOutcome::Delivered
            }
            Ok(response) => {
                let status = response.status();
                tracing::error!(
                    order_id = %order.id,
                    status = %status,
                    "webhook rejected"
                );
                NotificationOutcome::Rejected {
                    status: status.as_u16(),
                }
            }
            Err(err) => {
                tracing::error!(order_id = %order.id, error = %err, "webhook request failed");
                NotificationOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }
}
