// core/src/store/mod.rs

//! SQLite persistence for the catalog.
//!
//! The pool is the only shared resource. Callers acquire a connection (or a
//! transaction) per unit of work and hand it to a `Products` repository; the
//! connection goes back to the pool when the guard is dropped.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{info, instrument};

use crate::error::{CatalogError, CatalogResult};

pub mod products;

pub use products::Products;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://products.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const SCHEMA: [&str; 2] = [
  r#"
  CREATE TABLE IF NOT EXISTS products (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT    NOT NULL,
    description TEXT,
    price       REAL    NOT NULL,
    category    TEXT    NOT NULL,
    quantity    INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT    NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
  )
  "#,
  "CREATE INDEX IF NOT EXISTS idx_products_category ON products (category)",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
  pub url: String,
  pub max_connections: u32,
}

impl Default for StoreConfig {
  fn default() -> Self {
    Self {
      url: DEFAULT_DATABASE_URL.to_string(),
      max_connections: DEFAULT_MAX_CONNECTIONS,
    }
  }
}

impl StoreConfig {
  pub fn new(url: impl Into<String>, max_connections: u32) -> Self {
    Self {
      url: url.into(),
      max_connections,
    }
  }

  /// A private database living as long as the returned pool.
  pub fn in_memory() -> Self {
    Self::new("sqlite::memory:", 1)
  }

  pub fn is_in_memory(&self) -> bool {
    self.url.contains(":memory:") || self.url.contains("mode=memory")
  }
}

/// Opens the pool and makes sure the schema exists.
#[instrument(name = "store::open_pool", skip(config), fields(max_connections = config.max_connections), err)]
pub async fn open_pool(config: &StoreConfig) -> CatalogResult<SqlitePool> {
  if config.max_connections == 0 {
    return Err(CatalogError::Config("max_connections must be at least 1".to_string()));
  }

  let options = SqliteConnectOptions::from_str(&config.url)
    .map_err(|e| CatalogError::Config(format!("Invalid database URL '{}': {}", config.url, e)))?
    .create_if_missing(true);

  // Every connection to an in-memory database opens a fresh, empty one, so
  // such pools hold exactly one connection and never recycle it.
  let pool_options = if config.is_in_memory() {
    SqlitePoolOptions::new()
      .max_connections(1)
      .idle_timeout(None)
      .max_lifetime(None)
  } else {
    SqlitePoolOptions::new().max_connections(config.max_connections)
  };

  let pool = pool_options.connect_with(options).await?;
  init_schema(&pool).await?;
  info!("Product store ready.");
  Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> CatalogResult<()> {
  for statement in SCHEMA {
    sqlx::query(statement).execute(pool).await?;
  }
  Ok(())
}

/// Round-trips a trivial query; used by the health endpoint.
pub async fn ping(pool: &SqlitePool) -> CatalogResult<()> {
  sqlx::query("SELECT 1").execute(pool).await?;
  Ok(())
}
