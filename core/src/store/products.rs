// core/src/store/products.rs

//! Repository for the `products` table.

use futures_util::TryStreamExt;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection};
use tracing::{debug, info, instrument};

use crate::error::CatalogResult;
use crate::models::{NewProduct, Product};
use crate::query::{ProductQuery, SortKey};
use crate::stats::{CatalogStats, StatsAccumulator};

const PRODUCT_COLUMNS: &str = "id, name, description, price, category, quantity, created_at";

// The subset of columns the statistics pass needs.
#[derive(Debug, FromRow)]
struct StockRow {
  category: String,
  price: f64,
  quantity: i64,
}

/// Operations on products over a borrowed connection.
///
/// The repository never owns a connection: pass `&mut *conn` for a pooled
/// connection or `&mut *tx` to run inside a transaction.
pub struct Products<'c> {
  db: &'c mut SqliteConnection,
}

impl<'c> Products<'c> {
  pub fn new(db: &'c mut SqliteConnection) -> Self {
    Self { db }
  }

  #[instrument(skip(self, request), fields(name = %request.name, category = %request.category), err)]
  pub async fn create(&mut self, request: &NewProduct) -> CatalogResult<Product> {
    let sql = format!(
      "INSERT INTO products (name, description, price, category, quantity) VALUES (?, ?, ?, ?, ?) RETURNING {}",
      PRODUCT_COLUMNS
    );
    let product = sqlx::query_as::<_, Product>(&sql)
      .bind(&request.name)
      .bind(&request.description)
      .bind(request.price)
      .bind(&request.category)
      .bind(request.quantity)
      .fetch_one(&mut *self.db)
      .await?;

    debug!(product_id = product.id, "Product inserted.");
    Ok(product)
  }

  /// Inserts all requests in order. Run it on a transaction for all-or-nothing.
  #[instrument(skip(self, requests), fields(count = requests.len()), err)]
  pub async fn create_many(&mut self, requests: &[NewProduct]) -> CatalogResult<Vec<Product>> {
    let mut created = Vec::with_capacity(requests.len());
    for request in requests {
      created.push(self.create(request).await?);
    }
    Ok(created)
  }

  #[instrument(skip(self), err)]
  pub async fn get_by_id(&mut self, id: i64) -> CatalogResult<Option<Product>> {
    let sql = format!("SELECT {} FROM products WHERE id = ?", PRODUCT_COLUMNS);
    let product = sqlx::query_as::<_, Product>(&sql)
      .bind(id)
      .fetch_optional(&mut *self.db)
      .await?;
    Ok(product)
  }

  #[instrument(skip(self, query), fields(offset = query.skip, limit = query.limit, sort = ?query.sort), err)]
  pub async fn list(&mut self, query: &ProductQuery) -> CatalogResult<Vec<Product>> {
    let mut builder = QueryBuilder::<Sqlite>::new(format!("SELECT {} FROM products WHERE 1=1", PRODUCT_COLUMNS));

    if let Some(ref category) = query.category {
      builder.push(" AND category = ");
      builder.push_bind(category.clone());
    }
    if let Some(min) = query.price.min {
      builder.push(" AND price >= ");
      builder.push_bind(min);
    }
    if let Some(max) = query.price.max {
      builder.push(" AND price <= ");
      builder.push_bind(max);
    }

    builder.push(" ORDER BY ");
    builder.push(SortKey::order_by(query.sort));
    builder.push(" LIMIT ");
    builder.push_bind(query.limit);
    builder.push(" OFFSET ");
    builder.push_bind(query.skip);

    debug!(sql = builder.sql(), "Listing products.");
    let products = builder.build_query_as::<Product>().fetch_all(&mut *self.db).await?;

    info!("Retrieved {} products.", products.len());
    Ok(products)
  }

  /// Distinct categories in ascending order.
  #[instrument(skip(self), err)]
  pub async fn categories(&mut self) -> CatalogResult<Vec<String>> {
    let categories = sqlx::query_scalar::<_, String>("SELECT DISTINCT category FROM products ORDER BY category")
      .fetch_all(&mut *self.db)
      .await?;
    Ok(categories)
  }

  #[instrument(skip(self), err)]
  pub async fn count(&mut self) -> CatalogResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
      .fetch_one(&mut *self.db)
      .await?;
    Ok(count)
  }

  /// Removes every product and returns how many rows went.
  #[instrument(skip(self), err)]
  pub async fn delete_all(&mut self) -> CatalogResult<u64> {
    let result = sqlx::query("DELETE FROM products").execute(&mut *self.db).await?;
    info!("Deleted {} products.", result.rows_affected());
    Ok(result.rows_affected())
  }

  /// Statistics over the whole table, computed in one streamed pass.
  #[instrument(skip(self), err)]
  pub async fn stats(&mut self) -> CatalogResult<CatalogStats> {
    let mut acc = StatsAccumulator::default();
    let mut rows =
      sqlx::query_as::<_, StockRow>("SELECT category, price, quantity FROM products ORDER BY id").fetch(&mut *self.db);
    while let Some(row) = rows.try_next().await? {
      acc.push(&row.category, row.price, row.quantity)?;
    }
    debug!(rows = acc.rows_seen(), "Statistics pass finished.");
    Ok(acc.finish())
  }
}
