// server/src/web/routes.rs

use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::handlers::{admin_handlers, product_handlers, stats_handlers};
use crate::web::pages;

// Confirms the store answers before reporting healthy.
async fn health_check_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  catalog::store::ping(&app_state.db_pool).await?;
  Ok(HttpResponse::Ok().json(json!({ "status": "ok", "checked_at": Utc::now() })))
}

/// Route table shared by `main.rs` and the integration tests.
///
/// Extractor failures (bad query strings, bodies, path segments) are turned
/// into `AppError::Validation` so they never reach a handler.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::QueryConfig::default().error_handler(|err, _req| AppError::Validation(err.to_string()).into()))
    .app_data(web::JsonConfig::default().error_handler(|err, _req| AppError::Validation(err.to_string()).into()))
    .app_data(web::PathConfig::default().error_handler(|err, _req| AppError::Validation(err.to_string()).into()))
    .service(
      web::scope("/api")
        .route("/health", web::get().to(health_check_handler))
        .service(
          web::resource("/products")
            .route(web::get().to(product_handlers::list_products_handler))
            .route(web::post().to(product_handlers::create_product_handler))
            .route(web::delete().to(admin_handlers::delete_all_products_handler)),
        )
        .route(
          "/products/{product_id}",
          web::get().to(product_handlers::get_product_handler),
        )
        .route(
          "/categories",
          web::get().to(product_handlers::list_categories_handler),
        )
        .route("/stats", web::get().to(stats_handlers::catalog_stats_handler))
        .route("/test-data", web::post().to(admin_handlers::seed_test_data_handler)),
    )
    // Server-rendered pages
    .route("/", web::get().to(pages::index_page))
    .route("/add", web::get().to(pages::add_product_page))
    .route("/stats", web::get().to(pages::stats_page))
    .route("/static/script.js", web::get().to(pages::script_asset));
}
