// server/src/web/handlers/admin_handlers.rs

//! Debug endpoints: wipe the catalog or load the sample products.
//! There is no access control on these routes.

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::admin_service;
use crate::state::AppState;

#[instrument(name = "handler::delete_all_products", skip(app_state))]
pub async fn delete_all_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let deleted = admin_service::delete_all_products(&app_state.db_pool).await?;

  info!("Deleted {} products on request.", deleted);
  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": format!("Deleted {} products", deleted)
  })))
}

#[instrument(name = "handler::seed_test_data", skip(app_state))]
pub async fn seed_test_data_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let created = admin_service::seed_sample_data(&app_state.db_pool).await?;

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": format!("Created {} sample products", created.len())
  })))
}
