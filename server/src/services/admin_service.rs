// server/src/services/admin_service.rs

//! Catalog maintenance shared by the debug endpoints and server startup.

use catalog::seed::sample_products;
use catalog::{Product, Products};
use sqlx::SqlitePool;
use tracing::{info, instrument};

use crate::errors::Result;

/// Inserts the eight sample products in one transaction.
#[instrument(name = "admin_service::seed_sample_data", skip(pool), err)]
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<Vec<Product>> {
  let mut tx = pool.begin().await?;
  let created = Products::new(&mut *tx).create_many(&sample_products()).await?;
  tx.commit().await?;

  info!("Seeded {} sample products.", created.len());
  Ok(created)
}

/// Deletes every product, returning the number of rows removed.
#[instrument(name = "admin_service::delete_all_products", skip(pool), err)]
pub async fn delete_all_products(pool: &SqlitePool) -> Result<u64> {
  let mut tx = pool.begin().await?;
  let deleted = Products::new(&mut *tx).delete_all().await?;
  tx.commit().await?;
  Ok(deleted)
}

/// Startup check: logs a hint for an empty catalog, or seeds it when asked to.
#[instrument(name = "admin_service::prepare_catalog", skip(pool), err)]
pub async fn prepare_catalog(pool: &SqlitePool, seed_when_empty: bool) -> Result<()> {
  let existing = {
    let mut conn = pool.acquire().await?;
    Products::new(&mut *conn).count().await?
  };

  if existing > 0 {
    info!("Catalog holds {} products.", existing);
  } else if seed_when_empty {
    seed_sample_data(pool).await?;
  } else {
    info!("Catalog is empty. Load sample data with POST /api/test-data.");
  }
  Ok(())
}
