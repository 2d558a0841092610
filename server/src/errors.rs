// server/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use catalog::CatalogError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  /// Malformed or out-of-range client input, rejected before any store access.
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  /// A write the store refused (e.g. a constraint violation on create).
  #[error("Request Rejected: {0}")]
  Rejected(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Catalog Error: {0}")]
  Catalog(#[from] CatalogError),
}

// Pool acquisition and commit failures surface as store errors
impl From<sqlx::Error> for AppError {
  fn from(err: sqlx::Error) -> Self {
    AppError::Catalog(CatalogError::Store(err))
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Rejected(_) => StatusCode::BAD_REQUEST,
      AppError::Catalog(CatalogError::InvalidQuery { .. }) | AppError::Catalog(CatalogError::UnknownSortKey(_)) => {
        StatusCode::BAD_REQUEST
      }
      AppError::Config(_) | AppError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Rejecting request");
    }

    let body = match self {
      AppError::Validation(m) => json!({"error": "Invalid request", "detail": m}),
      AppError::NotFound(m) => json!({"error": "Not found", "detail": m}),
      AppError::Rejected(m) => json!({"error": "Request rejected", "detail": m}),
      AppError::Config(m) => json!({"error": "Configuration issue", "detail": m}),
      AppError::Catalog(e @ CatalogError::InvalidQuery { .. }) | AppError::Catalog(e @ CatalogError::UnknownSortKey(_)) => {
        json!({"error": "Invalid request", "detail": e.to_string()})
      }
      AppError::Catalog(e @ CatalogError::AggregateOverflow(_)) => {
        json!({"error": "Statistics unavailable", "detail": e.to_string()})
      }
      AppError::Catalog(e) => json!({"error": "Database operation failed", "detail": e.to_string()}),
    };
    HttpResponse::build(status).json(body)
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
