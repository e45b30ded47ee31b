#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use storefront_api::{
    notifier::{WebhookNotifier, WebhookTarget},
    routes::create_app,
    state::AppState,
    store::{MemStorage, OrderStore},
};
use tower::ServiceExt;

#[derive(Clone)]
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemStorage>,
}

pub fn notifier(url: Option<String>) -> WebhookNotifier {
    notifier_with_timeout(url, Duration::from_secs(5))
}

pub fn notifier_with_timeout(url: Option<String>, timeout: Duration) -> WebhookNotifier {
    WebhookNotifier::new(WebhookTarget::Fixed(url), timeout).expect("http client")
}

pub fn app_with(store: MemStorage, notifier: WebhookNotifier) -> TestApp {
    let store = Arc::new(store);
    let state = AppState::new(store.clone(), notifier);
    TestApp {
        router: create_app(state, "tests/downloads"),
        store,
    }
}

/// Router over any store; callers keep their own handle to it.
pub fn router_with(store: Arc<dyn OrderStore>, notifier: WebhookNotifier) -> Router {
    create_app(AppState::new(store, notifier), "tests/downloads")
}

pub fn seeded_app(webhook_url: Option<String>) -> TestApp {
    app_with(MemStorage::seeded().expect("seed"), notifier(webhook_url))
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .expect("request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible router");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }
}

pub fn order_body(product_id: &str) -> Value {
    json!({
        "productId": product_id,
        "customerName": "Mona Adel",
        "customerEmail": "mona@example.com",
        "customerPhone": "+20 100 000 0000",
        "customerAddress": "12 Nile St, Cairo",
        "size": "M",
        "quantity": 3,
        "unitPrice": "300.00",
        "totalAmount": "900.00"
    })
}
