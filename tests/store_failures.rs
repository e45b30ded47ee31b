mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::Value;
use storefront_api::{
    dto::{orders::CreateOrderRequest, products::CreateProductRequest},
    models::{Order, Product},
    store::{MemStorage, OrderStore, StoreError, StoreResult},
};
use uuid::Uuid;
use wiremock::{Mock, MockServer, ResponseTemplate, matchers::method};

use common::{TestApp, notifier, order_body, router_with};

/// Delegates to `MemStorage`, except for the operations switched off.
struct FlakyStore {
    inner: Arc<MemStorage>,
    fail_flag_update: bool,
    fail_product_reads: bool,
}

impl OrderStore for FlakyStore {
    fn get_product(&self, id: Uuid) -> StoreResult<Option<Product>> {
        if self.fail_product_reads {
            return Err(StoreError::Poisoned("products"));
        }
        self.inner.get_product(id)
    }

    fn get_active_product(&self) -> StoreResult<Option<Product>> {
        if self.fail_product_reads {
            return Err(StoreError::Poisoned("products"));
        }
        self.inner.get_active_product()
    }

    fn create_product(&self, input: CreateProductRequest) -> StoreResult<Product> {
        self.inner.create_product(input)
    }

    fn create_order(&self, input: CreateOrderRequest) -> StoreResult<Order> {
        self.inner.create_order(input)
    }

    fn get_order(&self, id: Uuid) -> StoreResult<Option<Order>> {
        self.inner.get_order(id)
    }

    fn update_order_webhook_status(&self, id: Uuid, sent: bool) -> StoreResult<()> {
        if self.fail_flag_update {
            return Err(StoreError::Poisoned("orders"));
        }
        self.inner.update_order_webhook_status(id, sent)
    }

    fn list_orders(&self) -> StoreResult<Vec<Order>> {
        self.inner.list_orders()
    }

    fn order_count(&self) -> StoreResult<usize> {
        self.inner.order_count()
    }
}

fn flaky_app(webhook_url: Option<String>, fail_flag_update: bool, fail_product_reads: bool) -> TestApp {
    let inner = Arc::new(MemStorage::seeded().expect("seed"));
    let store = FlakyStore {
        inner: inner.clone(),
        fail_flag_update,
        fail_product_reads,
    };
    TestApp {
        router: router_with(Arc::new(store), notifier(webhook_url)),
        store: inner,
    }
}

#[tokio::test]
async fn failed_flag_update_still_places_order() {
    let webhook = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&webhook)
        .await;

    let app = flaky_app(Some(webhook.uri()), true, false);
    let (status, order) = app.post_json("/api/orders", &order_body("any")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["status"], "pending");
    assert_eq!(order["webhookSent"], false);
    assert_eq!(app.store.order_count().unwrap(), 1);

    let id = order["id"].as_str().expect("order id");
    let (status, fetched) = app.get(&format!("/api/orders/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["webhookSent"], false);
}

#[tokio::test]
async fn failed_product_lookup_sends_webhook_without_name() -> anyhow::Result<()> {
    let webhook = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&webhook)
        .await;

    let app = flaky_app(Some(webhook.uri()), false, true);
    let product_id = app.store.get_active_product()?.expect("seeded product").id;
    let (status, order) = app
        .post_json("/api/orders", &order_body(&product_id.to_string()))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["webhookSent"], true);

    let requests = webhook.received_requests().await.expect("recording enabled");
    let payload: Value = requests[0].body_json()?;
    assert_eq!(payload["product"]["name"], "");
    Ok(())
}
