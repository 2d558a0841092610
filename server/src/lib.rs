// server/src/lib.rs

//! HTTP front end for the product catalog: configuration, error mapping,
//! shared state and the actix-web route table.

pub mod config;
pub mod errors;
pub mod services;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
