// core/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("Invalid query parameter '{param}': {message}")]
  InvalidQuery { param: &'static str, message: String },

  #[error("Unknown sort key '{0}'. Expected one of: price_asc, price_desc, name, newest")]
  UnknownSortKey(String),

  #[error("Store error: {0}")]
  Store(#[from] sqlx::Error),

  #[error("Statistics overflow: {0} is out of range")]
  AggregateOverflow(&'static str),

  #[error("Store configuration error: {0}")]
  Config(String),
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
