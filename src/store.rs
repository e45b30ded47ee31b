use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    dto::{orders::CreateOrderRequest, products::CreateProductRequest},
    models::{Order, OrderStatus, Product},
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock poisoned while accessing {0}")]
    Poisoned(&'static str),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Holder of every product and order for the lifetime of the process.
///
/// Each call is a single short critical section; implementations must not
/// hold a lock across an `.await`.
pub trait OrderStore: Send + Sync {
    fn get_product(&self, id: Uuid) -> StoreResult<Option<Product>>;

    /// The product currently on sale, if any.
    fn get_active_product(&self) -> StoreResult<Option<Product>>;

    /// Inserting an active product deactivates every other product.
    fn create_product(&self, input: CreateProductRequest) -> StoreResult<Product>;

    fn create_order(&self, input: CreateOrderRequest) -> StoreResult<Order>;

    fn get_order(&self, id: Uuid) -> StoreResult<Option<Order>>;

    /// Unknown ids are ignored.
    fn update_order_webhook_status(&self, id: Uuid, sent: bool) -> StoreResult<()>;

    /// Oldest first.
    fn list_orders(&self) -> StoreResult<Vec<Order>>;

    fn order_count(&self) -> StoreResult<usize>;
}

#[derive(Debug, Default)]
pub struct MemStorage {
    products: RwLock<HashMap<Uuid, Product>>,
    orders: RwLock<HashMap<Uuid, Order>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the storefront's single launch product.
    pub fn seeded() -> StoreResult<Self> {
        let store = Self::new();
        store.create_product(default_product())?;
        Ok(store)
    }
}

fn poisoned<T>(what: &'static str) -> impl FnOnce(PoisonError<T>) -> StoreError {
    move |_| StoreError::Poisoned(what)
}

impl OrderStore for MemStorage {
    fn get_product(&self, id: Uuid) -> StoreResult<Option<Product>> {
        let products = self.products.read().map_err(poisoned("products"))?;
        Ok(products.get(&id).cloned())
    }

    fn get_active_product(&self) -> StoreResult<Option<Product>> {
        let products = self.products.read().map_err(poisoned("products"))?;
        Ok(products.values().find(|p| p.is_active).cloned())
    }

    fn create_product(&self, input: CreateProductRequest) -> StoreResult<Product> {
        let product = Product {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            price: input.price,
            original_price: input.original_price,
            image_url: input.image_url,
            thumbnail_urls: input.thumbnail_urls,
            is_active: input.is_active,
            created_at: Utc::now(),
        };

        let mut products = self.products.write().map_err(poisoned("products"))?;
        if product.is_active {
            for other in products.values_mut() {
                other.is_active = false;
            }
        }
        products.insert(product.id, product.clone());
        Ok(product)
    }

    fn create_order(&self, input: CreateOrderRequest) -> StoreResult<Order> {
        let order = Order {
            id: Uuid::new_v4(),
            product_id: input.product_id,
            customer_name: input.customer_name,
            customer_email: input.customer_email,
            customer_phone: input.customer_phone,
            customer_address: input.customer_address,
            size: input.size,
            quantity: input.quantity,
            unit_price: input.unit_price,
            total_amount: input.total_amount,
            status: OrderStatus::Pending,
            webhook_sent: false,
            created_at: Utc::now(),
        };

        let mut orders = self.orders.write().map_err(poisoned("orders"))?;
        orders.insert(order.id, order.clone());
        Ok(order)
    }

    fn get_order(&self, id: Uuid) -> StoreResult<Option<Order>> {
        let orders = self.orders.read().map_err(poisoned("orders"))?;
        Ok(orders.get(&id).cloned())
    }

    fn update_order_webhook_status(&self, id: Uuid, sent: bool) -> StoreResult<()> {
        let mut orders = self.orders.write().map_err(poisoned("orders"))?;
        if let Some(order) = orders.get_mut(&id) {
            order.webhook_sent = sent;
        }
        Ok(())
    }

    fn list_orders(&self) -> StoreResult<Vec<Order>> {
        let orders = self.orders.read().map_err(poisoned("orders"))?;
        let mut list: Vec<Order> = orders.values().cloned().collect();
        list.sort_by_key(|o| o.created_at);
        Ok(list)
    }

    fn order_count(&self) -> StoreResult<usize> {
        let orders = self.orders.read().map_err(poisoned("orders"))?;
        Ok(orders.len())
    }
}

pub fn default_product() -> CreateProductRequest {
    const PHOTO_PARAMS: &str = "ixlib=rb-4.0.3&auto=format&fit=crop";
    let thumb = |photo: &str| {
        format!("https://images.unsplash.com/{photo}?{PHOTO_PARAMS}&w=200&h=200")
    };

    CreateProductRequest {
        name: "Luxury Cropped Black T-Shirt".into(),
        description: "Minimal. Premium cotton. Built for grind.".into(),
        price: "300.00".into(),
        original_price: Some("350.00".into()),
        image_url: format!(
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?{PHOTO_PARAMS}&w=800&h=800"
        ),
        thumbnail_urls: vec![
            thumb("photo-1521572163474-6864f9cf17ab"),
            thumb("photo-1503341504253-dff4815485f1"),
            thumb("photo-1562157873-818bc0726f68"),
        ],
        is_active: true,
    }
}
