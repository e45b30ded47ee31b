use std::sync::Arc;

use crate::{notifier::WebhookNotifier, store::OrderStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn OrderStore>,
    pub notifier: WebhookNotifier,
}

impl AppState {
    pub fn new(store: Arc<dyn OrderStore>, notifier: WebhookNotifier) -> Self {
        Self { store, notifier }
    }
}
