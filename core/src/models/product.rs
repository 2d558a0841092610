// core/src/models/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted catalog entry. `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub description: Option<String>,
  pub price: f64,
  pub category: String, // Free-form grouping, not a foreign key
  pub quantity: i64,
  pub created_at: DateTime<Utc>,
}

/// Everything a caller may supply when creating a product.
///
/// `name`, `price` and `category` are required; `description` is optional and
/// `quantity` defaults to 0 when omitted from a request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
  pub price: f64,
  pub category: String,
  #[serde(default)]
  pub quantity: i64,
}

impl NewProduct {
  pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      description: None,
      price,
      category: category.into(),
      quantity: 0,
    }
  }

  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }

  pub fn with_quantity(mut self, quantity: i64) -> Self {
    self.quantity = quantity;
    self
  }
}
