//! Product domain types.
//!
//! These types represent catalog products independent of how they are
//! stored or transported.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::ports::CoreError;

/// Message returned when a create payload lacks a usable name or price.
pub const INVALID_PRODUCT_MESSAGE: &str = "Invalid product data. 'name' and 'price' are required.";

/// A product that exists in the catalog.
///
/// `price` keeps the JSON number exactly as it was supplied, so an integer
/// price is echoed back as an integer and a fractional price as a float.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier (e.g. `prod1`, `prod_3fa9c2d1`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Number,
}

impl Product {
    /// Build a product from its parts.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: impl Into<Number>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
        }
    }
}

/// A validated product that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Number,
}

impl NewProduct {
    /// Validate a create payload.
    ///
    /// The payload must be a JSON object whose `name` is a non-empty string
    /// and whose `price` is a JSON number.
    ///
    /// This is deliberately stricter than a truthiness check: `true` is not
    /// a price, and a non-string `name` such as `42` is rejected even
    /// though it is present and non-empty.
    pub fn from_payload(payload: &Value) -> Result<Self, CoreError> {
        let Some(fields) = payload.as_object() else {
            return Err(CoreError::Validation(
                "An unexpected error occurred: request body must be a JSON object".to_string(),
            ));
        };

        let name = fields
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty());
        let price = match fields.get("price") {
            Some(Value::Number(price)) => Some(price),
            _ => None,
        };

        match (name, price) {
            (Some(name), Some(price)) => Ok(Self {
                name: name.to_string(),
                price: price.clone(),
            }),
            _ => Err(CoreError::Validation(INVALID_PRODUCT_MESSAGE.to_string())),
        }
    }

    /// Attach an id, producing a catalog product.
    pub fn with_id(self, id: impl Into<String>) -> Product {
        Product {
            id: id.into(),
            name: self.name,
            price: self.price,
        }
    }
}
