// server/src/config.rs

use crate::errors::{AppError, Result};
use catalog::store::{StoreConfig, DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
  #[default]
  Text,
  Json,
}

impl FromStr for LogFormat {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_ascii_lowercase().as_str() {
      "text" | "pretty" => Ok(LogFormat::Text),
      "json" => Ok(LogFormat::Json),
      other => Err(AppError::Config(format!(
        "Invalid LOG_FORMAT '{}': expected 'text' or 'json'",
        other
      ))),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub db_max_connections: u32,

  // Insert the sample products at startup when the catalog is empty
  pub seed_db: bool,

  pub log_format: LogFormat,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 8000,
      database_url: DEFAULT_DATABASE_URL.to_string(),
      db_max_connections: DEFAULT_MAX_CONNECTIONS,
      seed_db: false,
      log_format: LogFormat::Text,
    }
  }
}

impl AppConfig {
  /// Loads `.env` (if present) and reads the process environment.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable lookup; unset variables take defaults.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let defaults = Self::default();

    let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);
    let server_port = match lookup("SERVER_PORT") {
      Some(raw) => raw
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT '{}': {}", raw, e)))?,
      None => defaults.server_port,
    };
    let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);
    let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
      Some(raw) => {
        let parsed = raw
          .parse::<u32>()
          .map_err(|e| AppError::Config(format!("Invalid DB_MAX_CONNECTIONS '{}': {}", raw, e)))?;
        if parsed == 0 {
          return Err(AppError::Config("DB_MAX_CONNECTIONS must be at least 1".to_string()));
        }
        parsed
      }
      None => defaults.db_max_connections,
    };
    let seed_db = match lookup("SEED_DB") {
      Some(raw) => raw
        .parse::<bool>()
        .map_err(|e| AppError::Config(format!("Invalid SEED_DB value '{}': {}", raw, e)))?,
      None => defaults.seed_db,
    };
    let log_format = match lookup("LOG_FORMAT") {
      Some(raw) => raw.parse::<LogFormat>()?,
      None => defaults.log_format,
    };

    Ok(Self {
      server_host,
      server_port,
      database_url,
      db_max_connections,
      seed_db,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }

  pub fn store_config(&self) -> StoreConfig {
    StoreConfig::new(self.database_url.clone(), self.db_max_connections)
  }
}
