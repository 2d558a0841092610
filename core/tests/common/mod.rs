// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use catalog::store::{open_pool, StoreConfig};
use catalog::{NewProduct, Product, Products};
use once_cell::sync::Lazy;
use sqlx::SqlitePool;
use tracing::Level;

// --- Helper for Tracing Setup ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Store Helpers ---

/// A fresh, private in-memory catalog.
pub async fn memory_store() -> SqlitePool {
  setup_tracing();
  open_pool(&StoreConfig::in_memory())
    .await
    .expect("in-memory store should open")
}

pub async fn insert_all(pool: &SqlitePool, products: &[NewProduct]) -> Vec<Product> {
  let mut tx = pool.begin().await.unwrap();
  let created = Products::new(&mut *tx).create_many(products).await.unwrap();
  tx.commit().await.unwrap();
  created
}

/// A small mixed catalog exercising every price bucket and a few categories.
pub fn mixed_catalog() -> Vec<NewProduct> {
  vec![
    NewProduct::new("Walnut Desk", 12500.0, "furniture").with_quantity(2),
    NewProduct::new("Desk Lamp", 850.0, "furniture").with_quantity(14),
    NewProduct::new("Anvil", 5000.0, "tools").with_quantity(1),
    NewProduct::new("Chisel Set", 1000.0, "tools").with_quantity(6),
    NewProduct::new("Hand Plane", 7250.5, "tools").with_quantity(3),
    NewProduct::new("Notebook", 3.99, "stationery").with_quantity(250),
    NewProduct::new("Fountain Pen", 4999.99, "stationery"),
    NewProduct::new("bookend", 1000.01, "furniture").with_quantity(9),
  ]
}
