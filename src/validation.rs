//! Field checks for the two order boundaries: the contact form filled in on
//! the storefront, and the JSON body arriving at `POST /api/orders`.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::{
    dto::{
        checkout::{CustomerDetails, CustomerForm, OrderSelection},
        orders::CreateOrderRequest,
    },
    models::Product,
};

pub const MIN_QUANTITY: i32 = 1;
pub const MAX_QUANTITY: i32 = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("valid decimal regex"));

/// Form field name -> message shown under the input.
pub type FormErrors = BTreeMap<String, String>;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_decimal(value: &str) -> bool {
    DECIMAL_RE.is_match(value)
}

pub fn validate_customer_form(form: &CustomerForm) -> Result<CustomerDetails, FormErrors> {
    let mut errors = FormErrors::new();

    let full_name = form.full_name.trim();
    if full_name.is_empty() {
        errors.insert("fullName".into(), "Full name is required".into());
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.insert("email".into(), "Email is required".into());
    } else if !is_valid_email(email) {
        errors.insert("email".into(), "Please enter a valid email address".into());
    }

    let phone = form.phone.trim();
    if phone.is_empty() {
        errors.insert("phone".into(), "Phone number is required".into());
    }

    let address = form.address.trim();
    if address.is_empty() {
        errors.insert("address".into(), "Delivery address is required".into());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(CustomerDetails {
        full_name: full_name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
    })
}

pub fn clamp_quantity(quantity: i32) -> i32 {
    quantity.clamp(MIN_QUANTITY, MAX_QUANTITY)
}

/// `price × quantity` with two decimals. Returns `None` when `price` is not a
/// decimal string.
pub fn line_total(price: &str, quantity: i32) -> Option<String> {
    if !is_decimal(price) {
        return None;
    }
    let unit: f64 = price.parse().ok()?;
    Some(format!("{:.2}", unit * f64::from(quantity)))
}

/// Assemble the order body the storefront submits for the active product.
pub fn build_order_request(
    product: &Product,
    selection: &OrderSelection,
    customer: CustomerDetails,
) -> CreateOrderRequest {
    let quantity = clamp_quantity(selection.quantity);
    let total_amount =
        line_total(&product.price, quantity).unwrap_or_else(|| product.price.clone());

    CreateOrderRequest {
        product_id: product.id.to_string(),
        customer_name: customer.full_name,
        customer_email: customer.email,
        customer_phone: customer.phone,
        customer_address: customer.address,
        size: selection.size.clone(),
        quantity,
        unit_price: product.price.clone(),
        total_amount,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorCode {
    Required,
    InvalidType,
    InvalidFormat,
    TooSmall,
    TooBig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub code: FieldErrorCode,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, code: FieldErrorCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }
}

/// Check an incoming order body, collecting every failing field.
pub fn validate_order_payload(payload: &Value) -> Result<CreateOrderRequest, Vec<FieldError>> {
    let Some(obj) = payload.as_object() else {
        return Err(vec![FieldError::new(
            "body",
            FieldErrorCode::InvalidType,
            "Expected object",
        )]);
    };

    let mut errors = Vec::new();
    let product_id = string_field(obj, "productId", &mut errors);
    let customer_name = string_field(obj, "customerName", &mut errors);
    let customer_email = string_field(obj, "customerEmail", &mut errors);
    let customer_phone = string_field(obj, "customerPhone", &mut errors);
    let customer_address = string_field(obj, "customerAddress", &mut errors);
    let size = string_field(obj, "size", &mut errors);
    let quantity = quantity_field(obj, "quantity", &mut errors);
    let unit_price = decimal_field(obj, "unitPrice", &mut errors);
    let total_amount = decimal_field(obj, "totalAmount", &mut errors);

    match (
        product_id,
        customer_name,
        customer_email,
        customer_phone,
        customer_address,
        size,
        quantity,
        unit_price,
        total_amount,
    ) {
        (
            Some(product_id),
            Some(customer_name),
            Some(customer_email),
            Some(customer_phone),
            Some(customer_address),
            Some(size),
            Some(quantity),
            Some(unit_price),
            Some(total_amount),
        ) if errors.is_empty() => Ok(CreateOrderRequest {
            product_id,
            customer_name,
            customer_email,
            customer_phone,
            customer_address,
            size,
            quantity,
            unit_price,
            total_amount,
        }),
        _ => Err(errors),
    }
}

fn present<'a>(
    obj: &'a Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a Value> {
    match obj.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, FieldErrorCode::Required, "Required"));
            None
        }
        Some(value) => Some(value),
    }
}

fn string_field(
    obj: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match present(obj, field, errors)? {
        Value::String(s) => Some(s.clone()),
        other => {
            errors.push(FieldError::new(
                field,
                FieldErrorCode::InvalidType,
                format!("Expected string, received {}", type_name(other)),
            ));
            None
        }
    }
}

fn decimal_field(
    obj: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let value = string_field(obj, field, errors)?;
    if !is_decimal(&value) {
        errors.push(FieldError::new(
            field,
            FieldErrorCode::InvalidFormat,
            "Expected a decimal amount such as 300.00",
        ));
        return None;
    }
    Some(value)
}

fn quantity_field(
    obj: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<i32> {
    let value = present(obj, field, errors)?;
    let Some(number) = value.as_f64() else {
        errors.push(FieldError::new(
            field,
            FieldErrorCode::InvalidType,
            format!("Expected number, received {}", type_name(value)),
        ));
        return None;
    };
    if number.fract() != 0.0 {
        errors.push(FieldError::new(
            field,
            FieldErrorCode::InvalidType,
            "Expected integer, received float",
        ));
        return None;
    }
    if number < f64::from(MIN_QUANTITY) {
        errors.push(FieldError::new(
            field,
            FieldErrorCode::TooSmall,
            format!("Number must be greater than or equal to {MIN_QUANTITY}"),
        ));
        return None;
    }
    if number > f64::from(i32::MAX) {
        errors.push(FieldError::new(
            field,
            FieldErrorCode::TooBig,
            format!("Number must be less than or equal to {}", i32::MAX),
        ));
        return None;
    }
    Some(number as i32)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "productId": "p-1",
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

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
    }

    #[test]
    fn blank_form_reports_every_field() {
        let errors = validate_customer_form(&CustomerForm {
            full_name: "   ".into(),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors["fullName"], "Full name is required");
        assert_eq!(errors["email"], "Email is required");
        assert_eq!(errors["phone"], "Phone number is required");
        assert_eq!(errors["address"], "Delivery address is required");
    }

    #[test]
    fn malformed_email_is_keyed_by_field() {
        let errors = validate_customer_form(&CustomerForm {
            full_name: "Mona".into(),
            email: "not-an-email".into(),
            phone: "0100".into(),
            address: "Cairo".into(),
        })
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["email"], "Please enter a valid email address");
    }

    #[test]
    fn valid_form_is_trimmed() {
        let details = validate_customer_form(&CustomerForm {
            full_name: " Mona ".into(),
            email: "mona@example.com ".into(),
            phone: "0100".into(),
            address: "Cairo".into(),
        })
        .unwrap();
        assert_eq!(details.full_name(), "Mona");
        assert_eq!(details.email(), "mona@example.com");
    }

    #[test]
    fn accepts_valid_payload_and_ignores_server_fields() {
        let mut body = valid_body();
        body["id"] = json!("client-chosen");
        body["webhookSent"] = json!(true);
        let order = validate_order_payload(&body).unwrap();
        assert_eq!(order.quantity, 3);
        assert_eq!(order.total_amount, "900.00");
    }

    #[test]
    fn quantity_above_storefront_limit_still_passes() {
        let mut body = valid_body();
        body["quantity"] = json!(25);
        assert_eq!(validate_order_payload(&body).unwrap().quantity, 25);
    }

    #[test]
    fn collects_all_failures() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("customerEmail");
        body["quantity"] = json!("3");
        body["unitPrice"] = json!("three hundred");
        body["size"] = json!(null);

        let errors = validate_order_payload(&body).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["customerEmail", "size", "quantity", "unitPrice"]);
        assert_eq!(errors[0].code, FieldErrorCode::Required);
        assert_eq!(errors[2].code, FieldErrorCode::InvalidType);
        assert_eq!(errors[3].code, FieldErrorCode::InvalidFormat);
    }

    #[test]
    fn rejects_non_positive_and_fractional_quantity() {
        let mut body = valid_body();
        body["quantity"] = json!(0);
        assert_eq!(
            validate_order_payload(&body).unwrap_err()[0].code,
            FieldErrorCode::TooSmall
        );
        body["quantity"] = json!(1.5);
        assert_eq!(
            validate_order_payload(&body).unwrap_err()[0].code,
            FieldErrorCode::InvalidType
        );
    }

    #[test]
    fn non_object_body() {
        let errors = validate_order_payload(&json!([1, 2])).unwrap_err();
        assert_eq!(errors[0].field, "body");
    }

    #[test]
    fn totals() {
        assert_eq!(line_total("300.00", 3).as_deref(), Some("900.00"));
        assert_eq!(line_total("19.99", 2).as_deref(), Some("39.98"));
        assert_eq!(line_total("abc", 2), None);
        assert_eq!(clamp_quantity(0), 1);
        assert_eq!(clamp_quantity(42), 10);
    }
}
