// server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use catalog::query::DEFAULT_LIMIT;
use catalog::{CatalogResult, NewProduct, ProductQuery, Products, SortKey};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

fn default_limit() -> i64 {
  DEFAULT_LIMIT
}

/// Query string of `GET /api/products`.
#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  #[serde(default)]
  pub skip: i64,
  #[serde(default = "default_limit")]
  pub limit: i64,
  pub category: Option<String>,
  pub min_price: Option<f64>,
  pub max_price: Option<f64>,
  pub sort_by: Option<String>,
}

impl ListProductsQuery {
  pub fn into_product_query(self) -> CatalogResult<ProductQuery> {
    let mut query = ProductQuery::new(self.skip, self.limit)?;
    if let Some(category) = self.category {
      query = query.with_category(category);
    }
    if let Some(min) = self.min_price {
      query = query.with_min_price(min)?;
    }
    if let Some(max) = self.max_price {
      query = query.with_max_price(max)?;
    }
    if let Some(key) = self.sort_by {
      query = query.sorted_by(key.parse::<SortKey>()?);
    }
    Ok(query)
  }
}

#[instrument(name = "handler::list_products", skip(app_state, query_params))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let query = query_params.into_inner().into_product_query()?;
  debug!(?query, "Parsed listing query.");

  let mut conn = app_state.db_pool.acquire().await?;
  let products = Products::new(&mut *conn).list(&query).await?;

  info!("Listed {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(
  name = "handler::create_product",
  skip(app_state, payload),
  fields(name = %payload.name, category = %payload.category)
)]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<NewProduct>,
) -> Result<HttpResponse, AppError> {
  let request = payload.into_inner();

  // The transaction rolls back on drop if the insert or the commit fails.
  let mut tx = app_state.db_pool.begin().await?;
  let product = Products::new(&mut *tx).create(&request).await.map_err(|e| {
    warn!("Failed to create product '{}': {}", request.name, e);
    AppError::Rejected(e.to_string())
  })?;
  tx.commit().await.map_err(|e| AppError::Rejected(e.to_string()))?;

  info!(product_id = product.id, "Product created.");
  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": "Product added successfully",
      "product": product
  })))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %*path))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  let mut conn = app_state.db_pool.acquire().await?;
  match Products::new(&mut *conn).get_by_id(product_id).await? {
    Some(product) => Ok(HttpResponse::Ok().json(product)),
    None => Err(AppError::NotFound(format!("Product with ID {} not found.", product_id))),
  }
}

#[instrument(name = "handler::list_categories", skip(app_state))]
pub async fn list_categories_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let mut conn = app_state.db_pool.acquire().await?;
  let categories = Products::new(&mut *conn).categories().await?;
  Ok(HttpResponse::Ok().json(categories))
}
