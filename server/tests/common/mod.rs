// tests/common/mod.rs
#![allow(dead_code)]

use catalog::store::{open_pool, StoreConfig};
use catalog_server::{AppConfig, AppState};
use once_cell::sync::Lazy;
use tracing::Level;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// App state over a private in-memory store.
pub async fn test_state() -> AppState {
  setup_tracing();
  let config = AppConfig {
    database_url: "sqlite::memory:".to_string(),
    ..AppConfig::default()
  };
  let pool = open_pool(&config.store_config()).await.expect("in-memory store should open");
  AppState::new(pool, config)
}

/// Builds the full route table around the given state.
macro_rules! test_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state))
        .configure(catalog_server::web::configure_app_routes),
    )
    .await
  };
}
