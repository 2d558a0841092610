// server/src/state.rs
use crate::config::AppConfig;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub db_pool: SqlitePool,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(db_pool: SqlitePool, config: AppConfig) -> Self {
    Self {
      db_pool,
      config: Arc::new(config),
    }
  }
}
