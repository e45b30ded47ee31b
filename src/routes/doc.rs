use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::orders::CreateOrderRequest,
    models::{Order, OrderStatus, Product},
    response::MessageBody,
    routes::{health, orders, products},
    validation::{FieldError, FieldErrorCode},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::get_product,
        orders::create_order,
        orders::get_order,
    ),
    components(
        schemas(
            Product,
            Order,
            OrderStatus,
            CreateOrderRequest,
            FieldError,
            FieldErrorCode,
            MessageBody,
            health::HealthData,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Product", description = "The product on sale"),
        (name = "Orders", description = "Order endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
