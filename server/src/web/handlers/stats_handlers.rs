// server/src/web/handlers/stats_handlers.rs

use actix_web::{web, HttpResponse};
use catalog::Products;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::catalog_stats", skip(app_state))]
pub async fn catalog_stats_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let mut conn = app_state.db_pool.acquire().await?;
  let stats = Products::new(&mut *conn).stats().await?;

  info!(
    total_products = stats.total_products,
    total_categories = stats.total_categories,
    "Computed catalog statistics."
  );
  Ok(HttpResponse::Ok().json(stats))
}
