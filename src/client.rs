//! HTTP client for the storefront API.
//!
//! Mirrors what the product page does: fetch the product, check the contact
//! form locally, build the order body and submit it once.

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::{
    dto::checkout::{CustomerForm, OrderSelection},
    models::{Order, Product},
    response::MessageBody,
    validation::{FieldError, FormErrors, build_order_request, validate_customer_form},
};

#[derive(Debug, Error)]
pub enum ClientError {
    /// The form failed local checks; nothing was sent.
    #[error("order form is incomplete")]
    InvalidForm(FormErrors),

    #[error("order rejected by server")]
    Rejected { errors: Vec<FieldError> },

    #[error("{0}")]
    NotFound(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct StorefrontClient {
    client: Client,
    base_url: String,
}

impl StorefrontClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_product(&self) -> Result<Product, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/product", self.base_url))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json::<Product>().await?),
            status => Err(error_from_body(status, response).await),
        }
    }

    pub async fn fetch_order(&self, id: &str) -> Result<Order, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/orders/{id}", self.base_url))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json::<Order>().await?),
            status => Err(error_from_body(status, response).await),
        }
    }

    /// Validate the form and, only if it passes, submit exactly one order.
    pub async fn place_order(
        &self,
        product: &Product,
        selection: &OrderSelection,
        form: &CustomerForm,
    ) -> Result<Order, ClientError> {
        let customer = validate_customer_form(form).map_err(ClientError::InvalidForm)?;
        let body = build_order_request(product, selection, customer);

        let response = self
            .client
            .post(format!("{}/api/orders", self.base_url))
            .json(&body)
            .send()
            .await?;

        match response.status() {
            StatusCode::CREATED | StatusCode::OK => Ok(response.json::<Order>().await?),
            status => Err(error_from_body(status, response).await),
        }
    }
}

async fn error_from_body(status: StatusCode, response: reqwest::Response) -> ClientError {
    let text = match response.text().await {
        Ok(text) => text,
        Err(err) => return ClientError::Request(err),
    };
    let body = serde_json::from_str::<MessageBody>(&text).ok();

    match (status, body) {
        (StatusCode::BAD_REQUEST, Some(MessageBody { errors: Some(errors), .. })) => {
            ClientError::Rejected { errors }
        }
        (StatusCode::NOT_FOUND, Some(body)) => ClientError::NotFound(body.message),
        (status, Some(body)) => ClientError::Api {
            status: status.as_u16(),
            message: body.message,
        },
        (status, None) => ClientError::Api {
            status: status.as_u16(),
            message: text,
        },
    }
}
