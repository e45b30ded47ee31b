use serde::{Deserialize, Serialize};

/// Raw contact details as typed into the order form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Contact details that passed form validation. Only
/// [`validate_customer_form`](crate::validation::validate_customer_form) builds one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub(crate) full_name: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) address: String,
}

impl CustomerDetails {
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

/// Size and quantity picked on the product page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSelection {
    pub size: String,
    pub quantity: i32,
}

impl Default for OrderSelection {
    fn default() -> Self {
        Self {
            size: "M".to_string(),
            quantity: 1,
        }
    }
}
